//! Hint string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::{HintWarning, LayoutHints};
use crate::calculator::DataTypeHint;
use crate::complexity::ContentComplexity;

/// Parse a hint string into hints + warnings.
pub(super) fn parse_query(query: &str) -> (LayoutHints, Vec<HintWarning>) {
    let mut hints = LayoutHints::new();
    let mut warnings = Vec::new();
    let mut data_type_seen = false;

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);

        match key.to_ascii_lowercase().as_str() {
            "datatype" | "type" => match parse_data_type(&value) {
                Some(t) => {
                    if data_type_seen {
                        warnings.push(HintWarning::DuplicateKey {
                            key: String::from("dataType"),
                            value: value.clone(),
                        });
                    }
                    data_type_seen = true;
                    hints.data_type = t;
                }
                None => warnings.push(HintWarning::ValueInvalid {
                    key: "dataType",
                    value,
                    reason: "expected generic|text|numeric|temporal|media|form|collection|hierarchical|chart",
                }),
            },
            "complexity" => match parse_complexity(&value) {
                Some(c) => {
                    if hints.complexity.is_some() {
                        warnings.push(HintWarning::DuplicateKey {
                            key: String::from("complexity"),
                            value: value.clone(),
                        });
                    }
                    hints.complexity = Some(c);
                }
                None => warnings.push(HintWarning::ValueInvalid {
                    key: "complexity",
                    value,
                    reason: "expected simple|moderate|complex|verycomplex",
                }),
            },
            _ => {
                if hints.preferences.contains_key(&key) {
                    warnings.push(HintWarning::DuplicateKey {
                        key: key.clone(),
                        value: value.clone(),
                    });
                }
                hints.preferences.insert(key, value);
            }
        }
    }

    (hints, warnings)
}

// ---- Value parsers ----

fn parse_data_type(s: &str) -> Option<DataTypeHint> {
    let s = s.trim();
    if let Some(t) = DataTypeHint::ALL
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(s))
    {
        return Some(t);
    }
    match s.to_ascii_lowercase().as_str() {
        "image" | "photo" | "video" => Some(DataTypeHint::Media),
        "number" => Some(DataTypeHint::Numeric),
        "date" | "time" => Some(DataTypeHint::Temporal),
        "list" => Some(DataTypeHint::Collection),
        "tree" => Some(DataTypeHint::Hierarchical),
        _ => None,
    }
}

fn parse_complexity(s: &str) -> Option<ContentComplexity> {
    match s.trim().to_ascii_lowercase().as_str() {
        "simple" => Some(ContentComplexity::Simple),
        "moderate" => Some(ContentComplexity::Moderate),
        "complex" => Some(ContentComplexity::Complex),
        "verycomplex" | "very_complex" | "very-complex" => Some(ContentComplexity::VeryComplex),
        _ => None,
    }
}

/// Non-negative integer preference, e.g. `fieldCount`.
pub(crate) fn parse_count(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok()
}

/// Boolean preference, e.g. `hasValidation`.
pub(crate) fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---- Tokenizer ----

/// Split on '&', skipping empty pairs. A leading '?' is ignored.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a component. '+' decodes to a space; malformed escapes
/// pass through; invalid UTF-8 is replaced.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
