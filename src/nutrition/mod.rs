pub mod matching;
pub mod quantity;
pub mod table;

pub use matching::{best_match, overlap_score};
pub use quantity::{parse_quantity, Quantity};
pub use table::NutritionTable;
