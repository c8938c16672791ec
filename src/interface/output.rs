use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::interface::render::DayReport;

/// Write the rendered report with a trailing newline.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, format!("{}\n", report))?;
    Ok(())
}

/// Write the per-day totals as pretty-printed JSON.
pub fn write_json(path: &Path, reports: &[DayReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, NutrientValue};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_report_appends_newline() {
        let file = NamedTempFile::new().unwrap();
        write_report(file.path(), "| Day |").unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "| Day |\n");
    }

    #[test]
    fn test_write_json() {
        let file = NamedTempFile::new().unwrap();
        let reports = vec![DayReport::new(
            Day::new("upper"),
            &NutrientValue::new(10.0, 10.0, 0.0, 80.0),
        )];
        write_json(file.path(), &reports).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value[0]["day"], "upper");
        assert_eq!(value[0]["calories"], 80.0);
        assert_eq!(value[0]["carbs_pct"], 50.0);
    }
}
