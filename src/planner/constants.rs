/// Calories per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Calories per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Calories per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// A fuzzy match is accepted only above this word-overlap score.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Amount assumed when menu text names no quantity.
pub const DEFAULT_AMOUNT: f64 = 1.0;

/// Amount for the "half <food>" shorthand.
pub const HALF_AMOUNT: f64 = 0.5;

/// Day labels reported when none are given on the command line.
pub const DEFAULT_DAYS: [&str; 3] = ["upper", "lower", "rest"];

/// Top-level menu keys that are not food sections.
pub const RESERVED_SECTIONS: [&str; 2] = ["carbs", "extra"];

/// Number of cells a nutrition table row needs after the outer pipes.
pub const TABLE_MIN_COLUMNS: usize = 8;

/// Header and separator rows at the top of the nutrition table.
pub const TABLE_HEADER_ROWS: usize = 2;
