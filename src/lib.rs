pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod nutrition;
pub mod planner;

pub use error::{MacroError, Result};
pub use models::{Day, FoodRecord, MenuPlan, NutrientValue, Unit};
pub use nutrition::NutritionTable;
