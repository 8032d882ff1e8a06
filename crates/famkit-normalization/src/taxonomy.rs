//! Recognition of structured taxonomy identifiers.
//!
//! Identifiers look like `autodesk.spec.aec:length-2.0.0`:
//! `authority.namespace[.subpath]:kind-MAJOR.MINOR.PATCH`.

use std::sync::LazyLock;

use regex::Regex;

/// Finds a taxonomy identifier anywhere in a string.
static EMBEDDED_TAXONOMY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"autodesk\.[^-]+:[^-]+-\d+\.\d+\.\d+").expect("Invalid taxonomy id regex")
});

/// Returns true if the string is shaped like a taxonomy identifier.
pub fn looks_like_taxonomy_id(value: &str) -> bool {
    value.contains(':')
}

/// Extracts the first embedded taxonomy identifier, if any.
pub fn extract_taxonomy_id(value: &str) -> Option<&str> {
    EMBEDDED_TAXONOMY_ID.find(value).map(|found| found.as_str())
}
