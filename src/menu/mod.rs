mod loader;
mod tree;

pub use loader::{load_menu, parse_menu};
pub use tree::MenuNode;
