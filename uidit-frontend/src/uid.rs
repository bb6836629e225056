use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub const DEFAULT_FILENAME: &str = "uid.txt";
pub const JSON_FILENAME: &str = "uids.json";
pub const TEMPLATE: &str = "123456789\n# multiple UIDs allowed line by line\n";

pub const EMPTY_REASON: &str = "Empty";
pub const DIGITS_REASON: &str = "UID should be 1–20 digits (example rule)";

/// Placeholder rule for a uid, not a real identifier grammar.
const UID_PATTERN: &str = r"(?i)^[0-9]{1,20}$";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Validation {
    Ok,
    Invalid(String),
}

#[derive(Debug, Serialize)]
struct UidExport<'a> {
    uids: Vec<&'a str>,
}

pub fn validate(value: &str) -> Validation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Validation::Invalid(EMPTY_REASON.to_string());
    }

    if get_uid_regex().is_match(trimmed) {
        Validation::Ok
    } else {
        Validation::Invalid(DIGITS_REASON.to_string())
    }
}

/// Splits on every line ending, trims each line, drops empty ones and
/// serializes the rest as `{"uids": [...]}` with two space indentation.
pub fn to_json(content: &str) -> Result<String, serde_json::Error> {
    let uids: Vec<&str> = content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    serde_json::to_string_pretty(&UidExport { uids })
}

fn get_uid_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(UID_PATTERN).expect("Failed to compile regex"))
}
