//! Fixed vocabularies used by the generators.

/// Common web-application path terms; seeds the non-targeted list.
pub const COMMON_BASE: &[&str] = &[
    "admin", "login", "logout", "dashboard", "panel", "manage",
    "api", "docs", "swagger", "openapi", "health", "status",
    "backup", "old", "test", "dev", "staging", "debug",
    "uploads", "download", "export", "import",
    "report", "reports", "invoice", "billing", "pay", "payment",
    "user", "users", "account", "accounts", "profile",
    "config", "settings", "setup",
    "index", "home", "main",
];

/// Terms a keyword is combined with in the keyword generator.
pub const WEB_TERMS: &[&str] = &[
    "admin", "login", "panel", "dashboard", "manage", "config", "settings",
    "report", "reports", "export", "download", "upload", "api", "docs",
];

/// Prefixes tried in front of every base term ("" means none).
pub const PREFIXES: &[&str] = &["", "new", "old", "test", "dev"];

/// Suffixes tried after every base term ("" means none).
pub const SUFFIXES: &[&str] = &["", "1", "2", "old", "bak", "backup", "test", "dev", "tmp"];

/// Separators used when joining prefix, base and suffix.
pub const SEPARATORS: &[&str] = &["", "-", "_"];

/// Separators drawn from when padding with random pairs.
pub const PADDING_SEPARATORS: &[&str] = &["-", "_", ""];
