//! Form layout decisions.
//!
//! Independent of the generic path: complexity comes from the field
//! parameters declared in the hints' string preferences, not from an item
//! count.
//!
//! ```
//! use zenarrange::{ContentComplexity, LayoutHints, ValidationStrategy, form_layout_decision};
//!
//! let hints = LayoutHints::new()
//!     .preference("fieldCount", "10")
//!     .preference("hasComplexFields", "true")
//!     .preference("hasValidation", "true");
//! let form = form_layout_decision(&hints);
//!
//! assert_eq!(form.content_complexity, ContentComplexity::Complex);
//! assert_eq!(form.validation, ValidationStrategy::RealTime);
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
use alloc::string::String;

use crate::complexity::ContentComplexity;
use crate::hints::{LayoutHints, parse_count, parse_flag};

/// Preference key for the number of fields.
pub const FIELD_COUNT_KEY: &str = "fieldCount";
/// Preference key for whether any field is complex (pickers, rich text).
pub const HAS_COMPLEX_FIELDS_KEY: &str = "hasComplexFields";
/// Preference key for whether fields are validated.
pub const HAS_VALIDATION_KEY: &str = "hasValidation";
/// Field count assumed when absent or unparseable.
pub const DEFAULT_FIELD_COUNT: usize = 5;
/// Fewest fields a form needs to be complex.
pub const COMPLEX_FORM_MIN_FIELDS: usize = 8;
/// Fewest fields a form needs to be moderate.
pub const MODERATE_FORM_MIN_FIELDS: usize = 5;

/// Container wrapping the form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormContainer {
    Adaptive,
    Structured,
    Standard,
    Scrollable,
}

/// Arrangement of label and control within each field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldLayout {
    Standard,
    Compact,
    Spacious,
    Vertical,
}

/// Vertical rhythm between fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormSpacing {
    Compact,
    Comfortable,
    Generous,
}

/// When field validation runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationStrategy {
    None,
    RealTime,
    OnSubmit,
}

impl ValidationStrategy {
    const fn name(self) -> &'static str {
        match self {
            Self::None => "no",
            Self::RealTime => "real-time",
            Self::OnSubmit => "on-submit",
        }
    }
}

/// Field parameters read from hints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormParameters {
    pub field_count: usize,
    pub has_complex_fields: bool,
    pub has_validation: bool,
}

impl Default for FormParameters {
    fn default() -> Self {
        Self {
            field_count: DEFAULT_FIELD_COUNT,
            has_complex_fields: false,
            has_validation: false,
        }
    }
}

impl FormParameters {
    /// Read parameters from hint preferences. Absent or unparseable values
    /// take their defaults.
    pub fn from_hints(hints: &LayoutHints) -> Self {
        let defaults = Self::default();
        Self {
            field_count: hints
                .get(FIELD_COUNT_KEY)
                .and_then(parse_count)
                .unwrap_or(defaults.field_count),
            has_complex_fields: hints
                .get(HAS_COMPLEX_FIELDS_KEY)
                .and_then(parse_flag)
                .unwrap_or(defaults.has_complex_fields),
            has_validation: hints
                .get(HAS_VALIDATION_KEY)
                .and_then(parse_flag)
                .unwrap_or(defaults.has_validation),
        }
    }

    /// Complexity of a form with these parameters.
    ///
    /// Complex needs many fields, complex fields, and validation together.
    pub fn complexity(&self) -> ContentComplexity {
        if self.field_count >= COMPLEX_FORM_MIN_FIELDS
            && self.has_complex_fields
            && self.has_validation
        {
            ContentComplexity::Complex
        } else if self.field_count >= MODERATE_FORM_MIN_FIELDS {
            ContentComplexity::Moderate
        } else {
            ContentComplexity::Simple
        }
    }
}

/// Layout decision for a form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormLayoutDecision {
    pub preferred_container: FormContainer,
    pub field_layout: FieldLayout,
    pub spacing: FormSpacing,
    pub validation: ValidationStrategy,
    pub content_complexity: ContentComplexity,
    /// Human-readable justification. Never empty.
    pub reasoning: String,
}

/// Decide the layout for a form described by `hints`.
pub fn form_layout_decision(hints: &LayoutHints) -> FormLayoutDecision {
    form_layout_decision_with(FormParameters::from_hints(hints))
}

/// Decide the layout for a form with explicit parameters.
pub fn form_layout_decision_with(params: FormParameters) -> FormLayoutDecision {
    let complexity = params.complexity();
    let validation = if params.has_validation {
        ValidationStrategy::RealTime
    } else {
        ValidationStrategy::None
    };

    let reasoning = format!(
        "Form layout optimized for {} fields with {} complexity and {} validation",
        params.field_count,
        complexity.name(),
        validation.name(),
    );

    debug_decision!(
        field_count = params.field_count,
        complexity = ?complexity,
        validation = ?validation,
        "form layout decision"
    );

    FormLayoutDecision {
        preferred_container: FormContainer::Adaptive,
        field_layout: FieldLayout::Standard,
        spacing: FormSpacing::Comfortable,
        validation,
        content_complexity: complexity,
        reasoning,
    }
}
