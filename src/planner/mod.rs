pub mod aggregate;
pub mod constants;
pub mod validation;

pub use aggregate::{compute_day, extra_nutrients, group_nutrients};
pub use constants::*;
pub use validation::check_menu;
