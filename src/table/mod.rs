mod line;
mod loader;
mod table;

pub use line::{DELIMITER, split_line};
pub use loader::TableLoader;
pub use table::{AUTO_APPENDED, ERRORS_COLUMN, Table};
