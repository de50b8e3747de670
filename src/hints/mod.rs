//! Advisory layout hints.
//!
//! Hints carry what the caller knows about the content: its category, a
//! declared complexity, and free-form string preferences. They are advisory.
//! The generic layout path derives complexity from the item count and only
//! reports a conflicting declared complexity in its reasoning. The form path
//! reads its field parameters from the string preferences.
//!
//! Hints can be built in code or parsed from a query-style string:
//!
//! ```
//! use zenarrange::{DataTypeHint, hints};
//!
//! let result = hints::parse("dataType=media&fieldCount=10&hasValidation=true");
//! assert!(result.warnings.is_empty());
//!
//! let hints = result.hints;
//! assert_eq!(hints.data_type, DataTypeHint::Media);
//! assert_eq!(hints.get("fieldCount"), Some("10"));
//! ```
//!
//! `dataType` (alias `type`) and `complexity` are recognized case-insensitively.
//! Every other key is kept verbatim as a custom preference.

mod parse;

pub(crate) use parse::{parse_count, parse_flag};

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::calculator::DataTypeHint;
use crate::complexity::ContentComplexity;

/// Declarative, advisory description of the content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutHints {
    /// Category of the content.
    pub data_type: DataTypeHint,
    /// Complexity declared by the caller. Advisory only.
    pub complexity: Option<ContentComplexity>,
    /// Custom string-keyed preferences.
    pub preferences: BTreeMap<String, String>,
}

impl LayoutHints {
    /// Empty hints: generic data, no declared complexity, no preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content category.
    pub fn data_type(mut self, data_type: DataTypeHint) -> Self {
        self.data_type = data_type;
        self
    }

    /// Declare a complexity.
    pub fn complexity(mut self, complexity: ContentComplexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Add or replace a custom preference.
    pub fn preference(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.preferences.insert(key.into(), value.into());
        self
    }

    /// Look up a custom preference.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.preferences.get(key).map(String::as_str)
    }
}

/// Result of parsing a hint string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed hints.
    pub hints: LayoutHints,
    /// Non-fatal parse warnings.
    pub warnings: Vec<HintWarning>,
}

/// Non-fatal warning from hint parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A recognized key had a value that could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a `key=value&key=value` hint string (with or without leading `?`).
///
/// Never fails; problems are reported as warnings next to the hints.
pub fn parse(query: &str) -> ParseResult {
    let (hints, warnings) = parse::parse_query(query);
    ParseResult { hints, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let hints = LayoutHints::new()
            .data_type(DataTypeHint::Form)
            .complexity(ContentComplexity::Complex)
            .preference("fieldCount", "12");
        assert_eq!(hints.data_type, DataTypeHint::Form);
        assert_eq!(hints.complexity, Some(ContentComplexity::Complex));
        assert_eq!(hints.get("fieldCount"), Some("12"));
        assert_eq!(hints.get("missing"), None);
    }

    #[test]
    fn preference_replaces_existing_value() {
        let hints = LayoutHints::new()
            .preference("fieldCount", "3")
            .preference("fieldCount", "9");
        assert_eq!(hints.get("fieldCount"), Some("9"));
        assert_eq!(hints.preferences.len(), 1);
    }

    #[test]
    fn default_is_generic() {
        let hints = LayoutHints::default();
        assert_eq!(hints.data_type, DataTypeHint::Generic);
        assert!(hints.complexity.is_none());
        assert!(hints.preferences.is_empty());
    }
}
