mod error;
mod lines;
mod sort;

pub use error::{Result, SortError};
pub use lines::{is_sorted, read_lines, sort_lines, split_lines, write_lines};
pub use sort::{Config, Sort};
