pub mod output;
pub mod render;

pub use output::{write_json, write_report};
pub use render::{render_report, DayReport};
