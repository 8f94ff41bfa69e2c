//! Command implementations

mod assess;
mod config;
mod extract;
mod report;

pub use assess::{TaskInput, assess};
pub use config::show_config;
pub use extract::{InputFormat, extract};
pub use report::report;
