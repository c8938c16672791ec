use std::sync::LazyLock;

use regex::Regex;

use crate::models::Unit;
use crate::planner::constants::{DEFAULT_AMOUNT, HALF_AMOUNT};

/// `<number> [g|cup|cups] <rest>`; the unit must end on a word boundary so
/// "2 garlic cloves" keeps its "g". The rest may be empty, which keeps a bare
/// "150" from splitting into 15 and "0".
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*(?:(g|cups?)\b)?\s*(.*)$").expect("valid quantity regex")
});

/// Amount, unit and food name extracted from menu text.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Option<Unit>,
    /// Lowercase food-name text.
    pub name: String,
}

/// Parse menu text such as "110g chicken breast" or "half banana".
///
/// Text without a leading number is one unit-less serving.
pub fn parse_quantity(text: &str) -> Quantity {
    let text = text.trim().to_lowercase();

    if let Some(rest) = text.strip_prefix("half ") {
        return Quantity {
            amount: HALF_AMOUNT,
            unit: None,
            name: rest.trim().to_string(),
        };
    }

    if let Some(caps) = QUANTITY_RE.captures(&text) {
        if let Ok(amount) = caps[1].parse::<f64>() {
            return Quantity {
                amount,
                unit: caps.get(2).and_then(|m| Unit::from_token(m.as_str())),
                name: caps[3].trim().to_string(),
            };
        }
    }

    Quantity {
        amount: DEFAULT_AMOUNT,
        unit: None,
        name: text,
    }
}
