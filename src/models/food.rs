use crate::models::NutrientValue;

/// Units the quantity parser recognizes in menu text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Gram,
    Cup,
}

impl Unit {
    /// Parse a unit token. Only `g`, `cup` and `cups` are accepted.
    pub fn from_token(token: &str) -> Option<Unit> {
        match token {
            "g" => Some(Unit::Gram),
            "cup" | "cups" => Some(Unit::Cup),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Cup => "cup",
        }
    }
}

/// Reference nutrition facts for one food, per one reference serving.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    /// Canonical lowercase name; unique within a table.
    pub name: String,

    /// Macros and calories for one reference serving.
    pub per_serving: NutrientValue,

    /// Size of the reference serving, e.g. `100` for "100 g".
    pub serving_amount: f64,

    /// Unit of the reference serving, lowercase, e.g. `g`, `cup`, `slice`.
    /// Recognized unit spellings are normalized, so `cups` is stored as `cup`.
    pub serving_unit: String,
}

impl FoodRecord {
    pub fn new(
        name: &str,
        per_serving: NutrientValue,
        serving_amount: f64,
        serving_unit: &str,
    ) -> Self {
        let unit = serving_unit.trim().to_lowercase();
        let serving_unit = Unit::from_token(&unit)
            .map(|u| u.as_str().to_string())
            .unwrap_or(unit);

        Self {
            name: name.trim().to_lowercase(),
            per_serving,
            serving_amount,
            serving_unit,
        }
    }

    /// Whether a requested unit can be scaled against the reference serving.
    ///
    /// A missing unit always scales; grams scale against grams; any other unit
    /// must equal the reference unit.
    pub fn accepts_unit(&self, unit: Option<Unit>) -> bool {
        match unit {
            None => true,
            Some(u) => u.as_str() == self.serving_unit,
        }
    }

    /// Nutrients for `ratio` reference servings.
    pub fn scaled(&self, ratio: f64) -> NutrientValue {
        self.per_serving * ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> FoodRecord {
        FoodRecord::new("Brown Rice ", NutrientValue::new(23.0, 2.6, 0.9, 111.0), 100.0, "G")
    }

    #[test]
    fn test_new_canonicalizes() {
        let food = rice();
        assert_eq!(food.name, "brown rice");
        assert_eq!(food.serving_unit, "g");
    }

    #[test]
    fn test_new_normalizes_plural_cups() {
        let milk = FoodRecord::new("milk", NutrientValue::new(12.0, 8.0, 8.0, 149.0), 2.0, "Cups");
        assert_eq!(milk.serving_unit, "cup");
        assert!(milk.accepts_unit(Some(Unit::Cup)));

        let bread = FoodRecord::new("bread", NutrientValue::default(), 1.0, "slices");
        assert_eq!(bread.serving_unit, "slices");
    }

    #[test]
    fn test_accepts_unit() {
        let food = rice();
        assert!(food.accepts_unit(None));
        assert!(food.accepts_unit(Some(Unit::Gram)));
        assert!(!food.accepts_unit(Some(Unit::Cup)));
    }

    #[test]
    fn test_unit_tokens() {
        assert_eq!(Unit::from_token("g"), Some(Unit::Gram));
        assert_eq!(Unit::from_token("cups"), Some(Unit::Cup));
        assert_eq!(Unit::from_token("tbsp"), None);
    }
}
