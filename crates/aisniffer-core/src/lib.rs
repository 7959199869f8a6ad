pub mod config;
pub mod error;
pub mod logging;

pub mod candidates;
pub mod sanitize;
pub mod storage;
pub mod wordlist;

pub use error::GenerateError;
