use thiserror::Error;

/// A menu item that could not be resolved against the nutrition table.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingFood {
    /// Menu text as written in the plan.
    pub name: String,

    /// Closest stored name, if one is similar enough to be worth showing.
    pub suggestion: Option<String>,
}

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Not found in nutrition table:\n{}", format_missing(.0))]
    MissingFoods(Vec<MissingFood>),

    #[error(
        "Choice group #{group_id} [choose {required}] has only {available} option(s), {} short",
        shortfall(.required, .available)
    )]
    InsufficientOptions {
        group_id: u32,
        required: usize,
        available: usize,
    },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Cannot average an empty group: {0}")]
    EmptyGroup(String),

    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    #[error("Invalid nutrition table at line {line}: {message}")]
    InvalidTable { line: u64, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn shortfall(required: &usize, available: &usize) -> usize {
    required.saturating_sub(*available)
}

fn format_missing(missing: &[MissingFood]) -> String {
    missing
        .iter()
        .map(|m| match &m.suggestion {
            Some(s) => format!("   - {} (did you mean '{}'?)", m.name, s),
            None => format!("   - {}", m.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, MacroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_foods_lists_every_name() {
        let err = MacroError::MissingFoods(vec![
            MissingFood {
                name: "dragon fruit".to_string(),
                suggestion: None,
            },
            MissingFood {
                name: "chiken breast".to_string(),
                suggestion: Some("chicken breast".to_string()),
            },
        ]);

        let msg = err.to_string();
        assert!(msg.contains("   - dragon fruit"));
        assert!(msg.contains("   - chiken breast (did you mean 'chicken breast'?)"));
    }

    #[test]
    fn test_insufficient_options_message_never_underflows() {
        let err = MacroError::InsufficientOptions {
            group_id: 1,
            required: 1,
            available: 2,
        };
        assert!(err.to_string().ends_with("0 short"));
    }

    #[test]
    fn test_insufficient_options_reports_shortfall() {
        let err = MacroError::InsufficientOptions {
            group_id: 3,
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Choice group #3 [choose 2] has only 1 option(s), 1 short"
        );
    }
}
