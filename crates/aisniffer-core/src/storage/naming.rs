//! Output file naming.

use chrono::{DateTime, Local, TimeZone};

/// Formats `now` as `YYYYMMDD_HHMMSS`.
pub fn timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// Current local time as `YYYYMMDD_HHMMSS`.
pub fn timestamp_now() -> String {
    timestamp(&Local::now())
}

/// `nontargeted_<size>_<timestamp>.txt`
pub fn non_targeted_file_name(size: usize, timestamp: &str) -> String {
    format!("nontargeted_{size}_{timestamp}.txt")
}

/// `ai_<keyword>_<timestamp>.txt`, with spaces in the keyword replaced by `_`.
/// Path separators are replaced too so the name stays a single file.
pub fn keyword_file_name(keyword: &str, timestamp: &str) -> String {
    let stem = keyword.replace([' ', '/', '\\'], "_");
    format!("ai_{stem}_{timestamp}.txt")
}
