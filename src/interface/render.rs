use serde::Serialize;

use crate::models::{Day, NutrientValue};

const HEADER: &str = "| Day | Calories | Carbs | Protein | Fat |";
const SEPARATOR: &str = "|-----|----------|-------|---------|-----|";

/// One day's totals with each macro's share of macro-derived calories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub day: Day,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs_pct: f64,
    pub protein_pct: f64,
    pub fat_pct: f64,
}

impl DayReport {
    pub fn new(day: Day, totals: &NutrientValue) -> Self {
        let macro_cal = totals.macro_calories();
        let pct = |cal: f64| {
            if macro_cal > 0.0 {
                cal / macro_cal * 100.0
            } else {
                0.0
            }
        };

        Self {
            day,
            calories: totals.calories,
            carbs: totals.carbs,
            protein: totals.protein,
            fat: totals.fat,
            carbs_pct: pct(totals.carbs_calories()),
            protein_pct: pct(totals.protein_calories()),
            fat_pct: pct(totals.fat_calories()),
        }
    }

    /// Markdown table row, e.g. `| Upper | 2310 kcal | 260g (45%) | ... |`.
    pub fn row(&self) -> String {
        format!(
            "| {} | {:.0} kcal | {:.0}g ({:.0}%) | {:.0}g ({:.0}%) | {:.0}g ({:.0}%) |",
            self.day.capitalized(),
            self.calories,
            self.carbs,
            self.carbs_pct,
            self.protein,
            self.protein_pct,
            self.fat,
            self.fat_pct
        )
    }
}

/// Render the full markdown report: header, separator, one row per day.
pub fn render_report(reports: &[DayReport]) -> String {
    let mut rows = vec![HEADER.to_string(), SEPARATOR.to_string()];
    rows.extend(reports.iter().map(DayReport::row));
    rows.join("\n")
}
