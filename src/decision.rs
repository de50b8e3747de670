//! Generic layout decisions for plain item collections.
//!
//! Only the item count matters. Complexity is always derived from the
//! count; a complexity declared in [`LayoutHints`] is advisory and, when it
//! disagrees, is only mentioned in the reasoning.

#[cfg(not(feature = "std"))]
use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::calculator::{self, DataTypeHint};
use crate::complexity::{ContentComplexity, LayoutApproach};
use crate::context::LayoutContext;
use crate::hints::LayoutHints;

/// How aggressively the renderer should optimize, ordered from least.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerformanceStrategy {
    /// No special handling.
    Standard,
    /// Light optimizations such as view reuse.
    Optimized,
    /// Lazy loading and view recycling.
    HighPerformance,
    /// Everything, including virtualization of off-screen content.
    MaximumPerformance,
}

impl PerformanceStrategy {
    /// Every strategy, least aggressive first.
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::Optimized,
        Self::HighPerformance,
        Self::MaximumPerformance,
    ];

    /// Strategy for a complexity tier. Monotonic in complexity.
    pub const fn for_complexity(complexity: ContentComplexity) -> Self {
        match complexity {
            ContentComplexity::Simple => Self::Standard,
            ContentComplexity::Moderate => Self::Optimized,
            ContentComplexity::Complex => Self::HighPerformance,
            ContentComplexity::VeryComplex => Self::MaximumPerformance,
        }
    }

    /// Lowercase name used in reasoning text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Optimized => "optimized",
            Self::HighPerformance => "high",
            Self::MaximumPerformance => "maximum",
        }
    }
}

/// Layout decision for a plain item collection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutDecision {
    /// How the layout adapts to its content.
    pub approach: LayoutApproach,
    /// Column count, at least 1.
    pub columns: u32,
    /// Gap between items in points, non-negative.
    pub spacing: f64,
    /// Rendering optimization level.
    pub performance: PerformanceStrategy,
    /// Count-derived complexity the decision was made for.
    pub complexity: ContentComplexity,
    /// Item edge length in points, for count-based data types.
    pub item_size: Option<f64>,
    /// Human-readable justification. Never empty.
    pub reasoning: String,
}

/// Decide the layout for `item_count` same-shaped items.
///
/// With no context, falls back to [`LayoutContext::detect`].
///
/// ```
/// use zenarrange::{DeviceType, LayoutApproach, LayoutContext, LayoutHints, PerformanceStrategy};
///
/// let ctx = LayoutContext::new(DeviceType::Mac, 1440.0);
/// let decision = zenarrange::layout_decision(40, &LayoutHints::new(), Some(&ctx));
///
/// assert_eq!(decision.approach, LayoutApproach::Dynamic);
/// assert_eq!(decision.columns, 6);
/// assert_eq!(decision.performance, PerformanceStrategy::MaximumPerformance);
/// ```
pub fn layout_decision(
    item_count: usize,
    hints: &LayoutHints,
    ctx: Option<&LayoutContext>,
) -> LayoutDecision {
    let ctx = ctx.copied().unwrap_or_else(LayoutContext::detect);
    let complexity = ContentComplexity::from_item_count(item_count);
    let approach = complexity.approach();
    let layout = calculator::calculate(item_count, complexity, hints.data_type, &ctx);
    let performance = PerformanceStrategy::for_complexity(complexity);

    let reasoning = reasoning(
        item_count,
        complexity,
        approach,
        layout.columns,
        layout.spacing,
        layout.item_size,
        performance,
        hints,
        &ctx,
    );

    debug_decision!(
        item_count = item_count,
        device = ?ctx.device_type,
        width = ctx.effective_viewport_width(),
        window = ?ctx.window_state,
        approach = ?approach,
        columns = layout.columns,
        spacing = layout.spacing,
        "layout decision"
    );

    LayoutDecision {
        approach,
        columns: layout.columns,
        spacing: layout.spacing,
        performance,
        complexity,
        item_size: layout.item_size,
        reasoning,
    }
}

/// [`layout_decision`] for a slice of items. Only its length is read.
pub fn layout_decision_for<T>(
    items: &[T],
    hints: &LayoutHints,
    ctx: Option<&LayoutContext>,
) -> LayoutDecision {
    layout_decision(items.len(), hints, ctx)
}

#[allow(clippy::too_many_arguments)]
fn reasoning(
    item_count: usize,
    complexity: ContentComplexity,
    approach: LayoutApproach,
    columns: u32,
    spacing: f64,
    item_size: Option<f64>,
    performance: PerformanceStrategy,
    hints: &LayoutHints,
    ctx: &LayoutContext,
) -> String {
    let mut text = format!(
        "{} grid layout with {} columns for {} {} items ({} content) on a {} {} viewport, \
         {}pt spacing, {} performance",
        approach.name(),
        columns,
        item_count,
        hints.data_type.name(),
        complexity.name(),
        ctx.screen_size().label(),
        ctx.device_type.name(),
        spacing,
        performance.name(),
    );
    if let Some(size) = item_size {
        let _ = write!(text, ", {size}pt items");
    }
    if ctx.is_external_display() {
        text.push_str(", sized for external display");
    }
    if let Some(declared) = hints.complexity
        && declared != complexity
    {
        let _ = write!(
            text,
            "; declared {} complexity superseded by item count",
            declared.name()
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DeviceType, WindowState};

    fn phone() -> LayoutContext {
        LayoutContext::new(DeviceType::Phone, 375.0)
    }

    #[test]
    fn approach_follows_count() {
        let ctx = phone();
        let hints = LayoutHints::new();
        for (n, approach) in [
            (0, LayoutApproach::Uniform),
            (5, LayoutApproach::Uniform),
            (6, LayoutApproach::Adaptive),
            (9, LayoutApproach::Adaptive),
            (10, LayoutApproach::Responsive),
            (25, LayoutApproach::Responsive),
            (26, LayoutApproach::Dynamic),
        ] {
            assert_eq!(layout_decision(n, &hints, Some(&ctx)).approach, approach, "{n}");
        }
    }

    #[test]
    fn zero_items_is_smallest_legal_decision() {
        let d = layout_decision(0, &LayoutHints::new(), Some(&phone()));
        assert_eq!(d.columns, 1);
        assert!(d.spacing > 0.0);
        assert_eq!(d.complexity, ContentComplexity::Simple);
        assert_eq!(d.performance, PerformanceStrategy::Standard);
        assert!(!d.reasoning.is_empty());
    }

    #[test]
    fn performance_is_monotonic() {
        for w in ContentComplexity::ALL.windows(2) {
            assert!(
                PerformanceStrategy::for_complexity(w[0])
                    < PerformanceStrategy::for_complexity(w[1])
            );
        }
    }

    #[test]
    fn declared_complexity_does_not_override_count() {
        let hints = LayoutHints::new().complexity(ContentComplexity::VeryComplex);
        let d = layout_decision(3, &hints, Some(&phone()));
        assert_eq!(d.complexity, ContentComplexity::Simple);
        assert_eq!(d.approach, LayoutApproach::Uniform);
        assert_eq!(d.performance, PerformanceStrategy::Standard);
        assert!(d.reasoning.contains("declared very complex complexity superseded"));
    }

    #[test]
    fn matching_declared_complexity_not_mentioned() {
        let hints = LayoutHints::new().complexity(ContentComplexity::Simple);
        let d = layout_decision(3, &hints, Some(&phone()));
        assert!(!d.reasoning.contains("declared"));
    }

    #[test]
    fn reasoning_names_grid_and_columns() {
        let d = layout_decision(20, &LayoutHints::new(), Some(&phone()));
        assert_eq!(d.columns, 2);
        assert!(d.reasoning.contains("grid"));
        assert!(d.reasoning.contains("2 columns"));
        assert!(d.reasoning.starts_with("Responsive"));
        assert!(d.reasoning.contains("12pt spacing"));
    }

    #[test]
    fn media_reports_item_size() {
        let ctx = LayoutContext::new(DeviceType::Mac, 1440.0);
        let hints = LayoutHints::new().data_type(DataTypeHint::Media);
        let d = layout_decision(30, &hints, Some(&ctx));
        assert_eq!(d.item_size, Some(170.0));
        assert!(d.reasoning.contains("170pt items"));
        assert!(d.reasoning.contains("media"));
    }

    #[test]
    fn missing_context_uses_detected_default() {
        let hints = LayoutHints::new();
        let detected = LayoutContext::detect();
        assert_eq!(
            layout_decision(12, &hints, None),
            layout_decision(12, &hints, Some(&detected))
        );
    }

    #[test]
    fn slice_entry_point_reads_len() {
        let items = [(); 14];
        let ctx = phone().window_state(WindowState::SlideOver);
        assert_eq!(
            layout_decision_for(&items, &LayoutHints::new(), Some(&ctx)),
            layout_decision(14, &LayoutHints::new(), Some(&ctx))
        );
    }
}
