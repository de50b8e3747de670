//! Card and intelligent card layouts.
//!
//! Columns and spacing come from the calculator exactly as for a generic
//! collection; intelligent layouts add card geometry and expansion motion.
//!
//! ```
//! use zenarrange::{ContentDensity, DeviceType, LayoutContext, intelligent_card_layout};
//!
//! let ctx = LayoutContext::new(DeviceType::Pad, 1024.0);
//! let cards = intelligent_card_layout(12, ContentDensity::Balanced, &ctx);
//!
//! assert_eq!(cards.columns, 4);
//! assert_eq!(cards.card_width, 236.0);
//! assert!(cards.card_height > cards.card_width);
//! ```

use num_traits::Float;

use crate::calculator::{self, DataTypeHint};
use crate::complexity::ContentComplexity;
use crate::context::LayoutContext;
use crate::strategy::ContentDensity;

/// Narrowest card, in points.
pub const MIN_CARD_WIDTH: f64 = 44.0;
/// Widest card, in points.
pub const MAX_CARD_WIDTH: f64 = 480.0;
/// Card height as a multiple of its width.
pub const CARD_ASPECT_RATIO: f64 = 1.25;

/// Column and spacing choice for cards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardLayoutDecision {
    /// Column count, at least 1.
    pub columns: u32,
    /// Gap between cards in points.
    pub spacing: f64,
    /// Count-derived complexity.
    pub complexity: ContentComplexity,
}

/// Card layout with geometry and expansion motion.
///
/// Every dimension is strictly positive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntelligentCardLayoutDecision {
    pub columns: u32,
    pub spacing: f64,
    /// Whole points, clamped to [`MIN_CARD_WIDTH`]..=[`MAX_CARD_WIDTH`].
    pub card_width: f64,
    /// Whole points.
    pub card_height: f64,
    /// Inner padding in points.
    pub padding: f64,
    /// Scale of an expanded card.
    pub expansion_scale: f64,
    /// Expansion animation length in seconds.
    pub animation_duration: f64,
    pub complexity: ContentComplexity,
}

/// Columns and spacing for `item_count` cards.
pub fn card_layout(item_count: usize, ctx: &LayoutContext) -> CardLayoutDecision {
    let complexity = ContentComplexity::from_item_count(item_count);
    let layout = calculator::calculate(item_count, complexity, DataTypeHint::Generic, ctx);
    CardLayoutDecision {
        columns: layout.columns,
        spacing: layout.spacing,
        complexity,
    }
}

/// Full card geometry for `item_count` cards.
///
/// Cards share the viewport evenly after spacing between and around them.
pub fn intelligent_card_layout(
    item_count: usize,
    density: ContentDensity,
    ctx: &LayoutContext,
) -> IntelligentCardLayoutDecision {
    let base = card_layout(item_count, ctx);
    let columns = f64::from(base.columns);
    let gutters = base.spacing * (columns + 1.0);

    let available = ctx.effective_viewport_width() - gutters;
    let card_width = Float::floor(available / columns).clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
    let card_height = Float::round(card_width * CARD_ASPECT_RATIO);

    let decision = IntelligentCardLayoutDecision {
        columns: base.columns,
        spacing: base.spacing,
        card_width,
        card_height,
        padding: padding(density),
        expansion_scale: density.expansion_scale(),
        animation_duration: density.animation_duration(),
        complexity: base.complexity,
    };

    debug_decision!(
        item_count = item_count,
        columns = decision.columns,
        card_width = decision.card_width,
        card_height = decision.card_height,
        "intelligent card layout"
    );
    decision
}

const fn padding(density: ContentDensity) -> f64 {
    match density {
        ContentDensity::Dense => 8.0,
        ContentDensity::Balanced => 16.0,
        ContentDensity::Spacious => 24.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DeviceType, WindowState};

    #[test]
    fn card_columns_match_generic_calculator() {
        for device in DeviceType::ALL {
            for width in [320.0, 800.0, 1440.0] {
                let ctx = LayoutContext::new(device, width);
                for n in [0, 3, 8, 20, 100] {
                    let card = card_layout(n, &ctx);
                    let complexity = ContentComplexity::from_item_count(n);
                    assert_eq!(
                        card.columns,
                        calculator::generic_columns(n, complexity, &ctx)
                    );
                    assert_eq!(card.complexity, complexity);
                }
            }
        }
    }

    #[test]
    fn geometry_is_strictly_positive() {
        for device in DeviceType::ALL {
            for width in [1.0, 200.0, 375.0, 1024.0, 3840.0, 7680.0] {
                for state in WindowState::ALL {
                    let ctx = LayoutContext::new(device, width).window_state(state);
                    for density in ContentDensity::ALL {
                        for n in [0, 1, 12, 500] {
                            let c = intelligent_card_layout(n, density, &ctx);
                            assert!(c.columns >= 1);
                            assert!(c.spacing > 0.0);
                            assert!(c.card_width > 0.0);
                            assert!(c.card_height > 0.0);
                            assert!(c.padding > 0.0);
                            assert!(c.expansion_scale > 0.0);
                            assert!(c.animation_duration > 0.0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn width_shares_viewport() {
        // 1440 wide, 6 columns, 20pt spacing → (1440 - 140) / 6 = 216.67
        let ctx = LayoutContext::new(DeviceType::Mac, 1440.0);
        let c = intelligent_card_layout(30, ContentDensity::Balanced, &ctx);
        assert_eq!(c.columns, 6);
        assert_eq!(c.card_width, 216.0);
        assert_eq!(c.card_height, 270.0);
    }

    #[test]
    fn width_is_clamped() {
        let tiny = LayoutContext::new(DeviceType::Phone, 10.0);
        assert_eq!(
            intelligent_card_layout(1, ContentDensity::Dense, &tiny).card_width,
            MIN_CARD_WIDTH
        );
        let wide = LayoutContext::new(DeviceType::Mac, 7680.0);
        assert_eq!(
            intelligent_card_layout(2, ContentDensity::Dense, &wide).card_width,
            MAX_CARD_WIDTH
        );
    }

    #[test]
    fn density_drives_padding_and_motion() {
        let ctx = LayoutContext::new(DeviceType::Pad, 1024.0);
        let dense = intelligent_card_layout(12, ContentDensity::Dense, &ctx);
        let spacious = intelligent_card_layout(12, ContentDensity::Spacious, &ctx);
        assert!(dense.padding < spacious.padding);
        assert!(dense.expansion_scale < spacious.expansion_scale);
        assert!(dense.animation_duration < spacious.animation_duration);
        assert_eq!(dense.columns, spacious.columns);
    }
}
