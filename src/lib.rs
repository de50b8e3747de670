//! Adaptive layout decisions: columns, spacing, and sizing from content and viewport.
//!
//! Pure computation: no rendering, no I/O, no state between calls. Every
//! entry point is deterministic, so identical inputs always produce
//! identical decisions and callers may invoke it from any thread.
//!
//! # Modules
//!
//! - [`screen`] — Viewport width to screen size category
//! - [`complexity`] — Item count to complexity tier and layout approach
//! - [`context`] — Device, windowing state, and the effective viewport
//! - [`calculator`] — Layered column caps, spacing, and media item size
//! - [`hints`] — Advisory hints and `key=value` preference parsing
//! - [`decision`] — Generic layout decisions
//! - [`form`] — Form layout decisions
//! - [`card`] — Card and intelligent card layouts
//! - [`strategy`] — Grid, responsive behavior, and card expansion selectors
//!
//! # Example
//!
//! ```
//! use zenarrange::{DeviceType, LayoutApproach, LayoutContext, LayoutHints, layout_decision};
//!
//! let ctx = LayoutContext::new(DeviceType::Phone, 375.0);
//! let decision = layout_decision(20, &LayoutHints::new(), Some(&ctx));
//!
//! assert_eq!(decision.approach, LayoutApproach::Responsive);
//! assert_eq!(decision.columns, 2);
//! assert!(decision.reasoning.contains("2 columns"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// Structured logging; compiled out without the `tracing` feature.
#[cfg(feature = "tracing")]
macro_rules! trace_layer {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}
#[cfg(not(feature = "tracing"))]
macro_rules! trace_layer {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_decision {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}
#[cfg(not(feature = "tracing"))]
macro_rules! debug_decision {
    ($($arg:tt)*) => {};
}

pub mod calculator;
pub mod card;
pub mod complexity;
pub mod context;
pub mod decision;
pub mod form;
pub mod hints;
pub mod screen;
pub mod strategy;

pub use calculator::{AlbumTier, ColumnLayout, DataTypeHint};
pub use card::{
    CardLayoutDecision, IntelligentCardLayoutDecision, card_layout, intelligent_card_layout,
};
pub use complexity::{ContentComplexity, LayoutApproach};
pub use context::{
    CapabilityProbe, ContextError, DeviceContext, DeviceType, LayoutContext, Platform, WindowState,
};
pub use decision::{LayoutDecision, PerformanceStrategy, layout_decision, layout_decision_for};
pub use form::{
    FieldLayout, FormContainer, FormLayoutDecision, FormParameters, FormSpacing,
    ValidationStrategy, form_layout_decision,
};
pub use hints::{HintWarning, LayoutHints};
pub use screen::ScreenSize;
pub use strategy::{
    CardExpansionStrategy, ContentDensity, ExpansionStrategy, GridKind, GridStrategy,
    InteractionStyle, ResponsiveBehavior, ResponsiveType, card_expansion_strategy, grid_strategy,
    responsive_behavior,
};
