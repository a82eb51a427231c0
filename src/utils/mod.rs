pub mod paths;
pub mod terminal;

pub use paths::display_path;
pub use terminal::{sanitize_for_display, truncate_line};
