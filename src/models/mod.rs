mod food;
mod menu;
mod nutrients;

pub use food::{FoodRecord, Unit};
pub use menu::{Day, MenuPlan, OptionGroup};
pub use nutrients::NutrientValue;
