use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{MacroError, Result};
use crate::models::{FoodRecord, NutrientValue};
use crate::nutrition::matching::{best_match, suggest};
use crate::nutrition::quantity::parse_quantity;
use crate::planner::constants::{TABLE_HEADER_ROWS, TABLE_MIN_COLUMNS};

/// Reference nutrition facts keyed by canonical name.
///
/// Records are kept in name order, which makes fuzzy-match ties resolve to
/// the alphabetically first name.
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    foods: BTreeMap<String, FoodRecord>,
}

impl NutritionTable {
    /// Build a table from records. Later records replace earlier ones with
    /// the same canonical name.
    pub fn from_records<I: IntoIterator<Item = FoodRecord>>(records: I) -> Self {
        let mut foods = BTreeMap::new();
        for record in records {
            foods.insert(record.name.clone(), record);
        }
        Self { foods }
    }

    /// Load a markdown table file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::load(file)
    }

    /// Parse a markdown pipe table.
    ///
    /// Columns after the outer pipes are
    /// `[_, name, carbs, protein, fat, serving amount, serving unit, calories, ..]`.
    /// The first two rows are the header and separator. Rows with too few
    /// columns are skipped.
    pub fn load<R: Read>(source: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(source);

        let mut records = Vec::new();
        for row in reader.records().skip(TABLE_HEADER_ROWS) {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            match parse_row(&row, line)? {
                Some(record) => records.push(record),
                None => debug!("Skipping short nutrition row at line {}", line),
            }
        }

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Look up a record by exact canonical name.
    pub fn record(&self, name: &str) -> Option<&FoodRecord> {
        self.foods.get(name)
    }

    /// All canonical names in sort order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    /// Resolve free food-name text to a canonical name.
    ///
    /// An exact case-insensitive hit wins outright; otherwise the best
    /// word-overlap score above 0.5.
    pub fn find_match(&self, text: &str) -> Option<&str> {
        let text = text.trim().to_lowercase();

        if let Some((name, _)) = self.foods.get_key_value(&text) {
            return Some(name.as_str());
        }

        let found = best_match(&text, self.names());
        debug!("Matched '{}' -> {:?}", text, found);
        found
    }

    /// Whether menu text (quantity included) resolves to a stored food.
    pub fn exists(&self, menu_text: &str) -> bool {
        let quantity = parse_quantity(menu_text);
        self.find_match(&quantity.name).is_some()
    }

    /// Closest stored name for menu text that failed to resolve.
    pub fn suggest(&self, menu_text: &str) -> Option<&str> {
        let quantity = parse_quantity(menu_text);
        suggest(&quantity.name, self.names())
    }

    /// Nutrients for menu text such as "110g chicken breast", scaled by portion.
    ///
    /// When the requested unit cannot be compared with the reference serving
    /// (e.g. cups against grams), the amount is used as the ratio directly.
    pub fn get(&self, menu_text: &str) -> Result<NutrientValue> {
        let quantity = parse_quantity(menu_text);
        let record = self
            .find_match(&quantity.name)
            .and_then(|name| self.record(name))
            .ok_or_else(|| MacroError::ItemNotFound(menu_text.to_string()))?;

        let ratio = if record.accepts_unit(quantity.unit) {
            quantity.amount / record.serving_amount
        } else {
            warn!(
                "Unit mismatch for '{}': expected '{}', got '{}'",
                menu_text,
                record.serving_unit,
                quantity.unit.map(|u| u.as_str()).unwrap_or_default()
            );
            quantity.amount
        };

        Ok(record.scaled(ratio))
    }
}

fn parse_row(row: &StringRecord, line: u64) -> Result<Option<FoodRecord>> {
    let cells: Vec<&str> = row.iter().collect();
    if cells.len() < 2 {
        return Ok(None);
    }
    // Drop the empty cells outside the leading and trailing pipes.
    let cols = &cells[1..cells.len() - 1];
    if cols.len() < TABLE_MIN_COLUMNS {
        return Ok(None);
    }

    let number = |idx: usize, label: &str| -> Result<f64> {
        cols[idx].parse::<f64>().map_err(|_| MacroError::InvalidTable {
            line,
            message: format!("{} '{}' is not a number", label, cols[idx]),
        })
    };

    let per_serving = NutrientValue::new(
        number(2, "carbs")?,
        number(3, "protein")?,
        number(4, "fat")?,
        number(7, "calories")?,
    );
    let serving_amount = number(5, "serving amount")?;
    if serving_amount <= 0.0 {
        return Err(MacroError::InvalidTable {
            line,
            message: format!("serving amount for '{}' must be positive", cols[1]),
        });
    }

    Ok(Some(FoodRecord::new(
        cols[1],
        per_serving,
        serving_amount,
        cols[6],
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
| # | Food | Carbs | Protein | Fat | Serving | Unit | Calories |
|---|------|-------|---------|-----|---------|------|----------|
| 1 | Chicken Breast | 0 | 31 | 3.6 | 100 | g | 165 |
| 2 | Brown Rice | 23 | 2.6 | 0.9 | 100 | g | 111 |
| 3 | Banana | 27 | 1.3 | 0.4 | 1 | medium | 105 |
| 4 | Whole Milk | 12 | 8 | 8 | 1 | cup | 149 |
| short | row |
";

    fn table() -> NutritionTable {
        NutritionTable::load(TABLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_skips_header_and_short_rows() {
        let t = table();
        assert_eq!(t.len(), 4);
        let rice = t.record("brown rice").unwrap();
        assert_eq!(rice.serving_unit, "g");
        assert!((rice.per_serving.calories - 111.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_rejects_bad_number() {
        let bad = "\
| # | Food | C | P | F | S | U | Cal |
|---|---|---|---|---|---|---|---|
| 1 | Toast | lots | 3 | 1 | 1 | slice | 80 |
";
        let err = NutritionTable::load(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, MacroError::InvalidTable { line: 3, .. }));
    }

    #[test]
    fn test_load_rejects_non_positive_serving() {
        let bad = "\
| # | Food | C | P | F | S | U | Cal |
|---|---|---|---|---|---|---|---|
| 1 | Oats | 66 | 17 | 7 | 100 | g | 389 |
| 2 | Air | 0 | 0 | 0 | 0 | g | 0 |
";
        let err = NutritionTable::load(bad.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            MacroError::InvalidTable { line: 4, ref message } if message.contains("Air")
        ));
    }

    #[test]
    fn test_tie_resolves_to_first_name_in_sort_order() {
        let t = NutritionTable::from_records([
            FoodRecord::new("white rice", NutrientValue::new(28.0, 2.7, 0.3, 130.0), 100.0, "g"),
            FoodRecord::new("brown rice", NutrientValue::new(23.0, 2.6, 0.9, 111.0), 100.0, "g"),
        ]);
        assert_eq!(t.find_match("rice white brown"), Some("brown rice"));
        assert_eq!(t.names().collect::<Vec<_>>(), ["brown rice", "white rice"]);
    }

    #[test]
    fn test_get_plural_cup_serving_scales() {
        let facts = "\
| # | Food | C | P | F | S | U | Cal |
|---|---|---|---|---|---|---|---|
| 1 | Milk | 12 | 8 | 8 | 2 | cups | 149 |
";
        let t = NutritionTable::load(facts.as_bytes()).unwrap();
        assert_eq!(t.record("milk").unwrap().serving_unit, "cup");

        let v = t.get("2 cups milk").unwrap();
        assert!((v.carbs - 12.0).abs() < 1e-9);
        assert!((v.calories - 149.0).abs() < 1e-9);

        let one = t.get("1 cup milk").unwrap();
        assert!((one.protein - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_match_exact_and_fuzzy() {
        let t = table();
        assert_eq!(t.find_match("BANANA"), Some("banana"));
        assert_eq!(t.find_match("grilled chicken breast"), Some("chicken breast"));
        assert_eq!(t.find_match("chicken"), None);
        assert_eq!(t.find_match("tofu"), None);
    }

    #[test]
    fn test_get_scales_grams() {
        let t = table();
        let v = t.get("50g brown rice").unwrap();
        assert!((v.carbs - 11.5).abs() < 1e-9);
        assert!((v.calories - 55.5).abs() < 1e-9);
    }

    #[test]
    fn test_get_half_and_count() {
        let t = table();
        let half = t.get("half banana").unwrap();
        assert!((half.carbs - 13.5).abs() < 1e-9);

        let two = t.get("2 banana").unwrap();
        assert!((two.calories - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_get_unit_mismatch_uses_amount() {
        let t = table();
        // Cups against a gram reference: ratio is the raw amount.
        let v = t.get("2 cup brown rice").unwrap();
        assert!((v.carbs - 46.0).abs() < 1e-9);

        let milk = t.get("2 cups whole milk").unwrap();
        assert!((milk.protein - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_get_missing_item() {
        let t = table();
        let err = t.get("100g tofu").unwrap_err();
        assert!(matches!(err, MacroError::ItemNotFound(ref s) if s == "100g tofu"));
    }

    #[test]
    fn test_exists_agrees_with_get() {
        let t = table();
        for text in ["110g chicken breast", "half banana", "tofu", "1 cup whole milk", "rice"] {
            assert_eq!(t.exists(text), t.get(text).is_ok(), "{}", text);
        }
    }
}
