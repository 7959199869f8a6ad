//! CLI command handlers, one per file.

mod completions;
mod generate;
mod keyword;
mod sanitize;
mod sniff;

pub use completions::run_completions;
pub use generate::run_generate;
pub use keyword::run_keyword;
pub use sanitize::run_sanitize;
pub use sniff::{run_sniff, SniffArgs};
