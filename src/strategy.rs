//! Grid, responsive behavior, and card expansion selectors.

use crate::calculator::base_spacing;
use crate::complexity::ContentComplexity;
use crate::context::DeviceType;

/// Largest item count laid out as a fixed grid, one column per item.
pub const FIXED_GRID_MAX_ITEMS: usize = 4;
/// Largest item count laid out as an adaptive grid.
pub const ADAPTIVE_GRID_MAX_ITEMS: usize = 20;

const NO_BREAKPOINTS: &[f64] = &[];
const ADAPTIVE_GRID_BREAKPOINTS: &[f64] = &[320.0, 768.0, 1024.0];
const LAZY_GRID_BREAKPOINTS: &[f64] = &[320.0, 768.0, 1024.0, 1440.0, 2560.0];

const ADAPTIVE_BREAKPOINTS: &[f64] = &[768.0, 1024.0];
const FLUID_BREAKPOINTS: &[f64] = &[320.0, 768.0, 1024.0, 1366.0];
const BREAKPOINT_BREAKPOINTS: &[f64] = &[768.0, 1024.0, 1440.0, 2560.0, 3840.0];

/// Expansion scale for [`ContentDensity::Dense`] content.
pub const DENSE_EXPANSION_SCALE: f64 = 1.05;
/// Expansion scale for [`ContentDensity::Balanced`] content.
pub const BALANCED_EXPANSION_SCALE: f64 = 1.15;
/// Expansion scale for [`ContentDensity::Spacious`] content.
pub const SPACIOUS_EXPANSION_SCALE: f64 = 1.25;

// ── Grid strategy ───────────────────────────────────────────────────────

/// Kind of grid container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridKind {
    /// One column per item, no breakpoints.
    Fixed,
    /// Columns adapt at a few breakpoints.
    Adaptive,
    /// Lazily instantiated cells, many breakpoints.
    Lazy,
}

/// Grid container choice.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridStrategy {
    pub kind: GridKind,
    /// Column count, at least 1.
    pub columns: u32,
    /// Gap between cells in points.
    pub spacing: f64,
    /// Ascending width thresholds. Empty only for [`GridKind::Fixed`].
    pub breakpoints: &'static [f64],
}

/// Choose a grid strategy for `item_count` items on a device.
///
/// ```
/// use zenarrange::{DeviceType, GridKind, grid_strategy};
///
/// assert_eq!(grid_strategy(3, DeviceType::Mac).columns, 3);
/// assert_eq!(grid_strategy(100, DeviceType::Mac).kind, GridKind::Lazy);
/// ```
pub fn grid_strategy(item_count: usize, device: DeviceType) -> GridStrategy {
    let spacing = base_spacing(device);

    let strategy = if item_count <= FIXED_GRID_MAX_ITEMS {
        GridStrategy {
            kind: GridKind::Fixed,
            // Bounded by FIXED_GRID_MAX_ITEMS.
            columns: (item_count as u32).max(1),
            spacing,
            breakpoints: NO_BREAKPOINTS,
        }
    } else if item_count <= ADAPTIVE_GRID_MAX_ITEMS {
        GridStrategy {
            kind: GridKind::Adaptive,
            columns: adaptive_grid_columns(device),
            spacing,
            breakpoints: ADAPTIVE_GRID_BREAKPOINTS,
        }
    } else {
        GridStrategy {
            kind: GridKind::Lazy,
            columns: lazy_grid_columns(device),
            spacing,
            breakpoints: LAZY_GRID_BREAKPOINTS,
        }
    };

    debug_decision!(
        item_count = item_count,
        device = ?device,
        kind = ?strategy.kind,
        columns = strategy.columns,
        "grid strategy"
    );
    strategy
}

const fn adaptive_grid_columns(device: DeviceType) -> u32 {
    match device {
        DeviceType::Watch => 1,
        DeviceType::Phone | DeviceType::Car => 2,
        DeviceType::Pad | DeviceType::Vision => 3,
        DeviceType::Mac | DeviceType::Tv => 4,
    }
}

const fn lazy_grid_columns(device: DeviceType) -> u32 {
    match device {
        DeviceType::Watch => 1,
        DeviceType::Phone => 2,
        DeviceType::Car => 3,
        DeviceType::Pad | DeviceType::Vision => 4,
        DeviceType::Tv => 5,
        DeviceType::Mac => 6,
    }
}

// ── Responsive behavior ─────────────────────────────────────────────────

/// Class of adaptivity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponsiveType {
    /// Does not respond to width changes.
    Fixed,
    /// Adapts at a couple of size-class boundaries.
    Adaptive,
    /// Resizes continuously.
    Fluid,
    /// Reflows at a full set of width breakpoints.
    Breakpoint,
}

/// Responsive behavior for a layout.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResponsiveBehavior {
    pub kind: ResponsiveType,
    /// False only for [`ResponsiveType::Fixed`].
    pub adaptive: bool,
    /// Ascending width thresholds. Non-empty unless fixed.
    pub breakpoints: &'static [f64],
}

/// Choose the responsive behavior for a device and content complexity.
///
/// Phones, watches, and car displays are always fixed. Larger devices adapt
/// for simple content and switch to fluid (pad, vision) or breakpoint (mac,
/// tv) behavior once content is complex.
pub fn responsive_behavior(
    device: DeviceType,
    complexity: ContentComplexity,
) -> ResponsiveBehavior {
    let complex = match complexity {
        ContentComplexity::Simple | ContentComplexity::Moderate => false,
        ContentComplexity::Complex | ContentComplexity::VeryComplex => true,
    };

    let kind = match device {
        DeviceType::Phone | DeviceType::Watch | DeviceType::Car => ResponsiveType::Fixed,
        DeviceType::Pad | DeviceType::Vision if complex => ResponsiveType::Fluid,
        DeviceType::Mac | DeviceType::Tv if complex => ResponsiveType::Breakpoint,
        DeviceType::Pad | DeviceType::Vision | DeviceType::Mac | DeviceType::Tv => {
            ResponsiveType::Adaptive
        }
    };

    let breakpoints = match kind {
        ResponsiveType::Fixed => NO_BREAKPOINTS,
        ResponsiveType::Adaptive => ADAPTIVE_BREAKPOINTS,
        ResponsiveType::Fluid => FLUID_BREAKPOINTS,
        ResponsiveType::Breakpoint => BREAKPOINT_BREAKPOINTS,
    };

    ResponsiveBehavior {
        kind,
        adaptive: kind != ResponsiveType::Fixed,
        breakpoints,
    }
}

// ── Card expansion ──────────────────────────────────────────────────────

/// How the user can interact with a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionStyle {
    /// Display only.
    Static,
    /// Tappable.
    Interactive,
    /// Tappable and meant to grow in place.
    Expandable,
    /// Pointer hover is available.
    HoverCapable,
}

impl InteractionStyle {
    /// Every interaction style.
    pub const ALL: [Self; 4] = [
        Self::Static,
        Self::Interactive,
        Self::Expandable,
        Self::HoverCapable,
    ];
}

/// How tightly content is packed, densest first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentDensity {
    Dense,
    #[default]
    Balanced,
    Spacious,
}

impl ContentDensity {
    /// Every density, densest first.
    pub const ALL: [Self; 3] = [Self::Dense, Self::Balanced, Self::Spacious];

    /// Scale applied to an expanded card. Grows toward spacious.
    pub const fn expansion_scale(self) -> f64 {
        match self {
            Self::Dense => DENSE_EXPANSION_SCALE,
            Self::Balanced => BALANCED_EXPANSION_SCALE,
            Self::Spacious => SPACIOUS_EXPANSION_SCALE,
        }
    }

    /// Expansion animation length in seconds. Grows toward spacious.
    pub const fn animation_duration(self) -> f64 {
        match self {
            Self::Dense => 0.2,
            Self::Balanced => 0.3,
            Self::Spacious => 0.4,
        }
    }
}

/// Card expansion interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionStrategy {
    None,
    HoverExpand,
    ContentReveal,
    GridReorganize,
    FocusMode,
}

/// Which expansion strategies apply, and how they animate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardExpansionStrategy {
    /// Non-empty. `[None]` exactly when expansion is disabled.
    pub supported_strategies: &'static [ExpansionStrategy],
    /// First entry of `supported_strategies`.
    pub primary_strategy: ExpansionStrategy,
    /// Scale of an expanded card, `1.0` when disabled.
    pub expansion_scale: f64,
    /// Animation length in seconds, `0.0` when disabled.
    pub animation_duration: f64,
}

/// Choose card expansion behavior.
///
/// Static cards cannot expand at all, whatever the density.
///
/// ```
/// use zenarrange::{ContentDensity, ExpansionStrategy, InteractionStyle, card_expansion_strategy};
///
/// let s = card_expansion_strategy(InteractionStyle::Static, ContentDensity::Spacious);
/// assert_eq!(s.supported_strategies, &[ExpansionStrategy::None]);
/// assert_eq!(s.expansion_scale, 1.0);
/// assert_eq!(s.animation_duration, 0.0);
/// ```
pub fn card_expansion_strategy(
    style: InteractionStyle,
    density: ContentDensity,
) -> CardExpansionStrategy {
    let supported: &'static [ExpansionStrategy] = match style {
        InteractionStyle::Static => {
            return CardExpansionStrategy {
                supported_strategies: &[ExpansionStrategy::None],
                primary_strategy: ExpansionStrategy::None,
                expansion_scale: 1.0,
                animation_duration: 0.0,
            };
        }
        InteractionStyle::Interactive => {
            &[ExpansionStrategy::ContentReveal, ExpansionStrategy::FocusMode]
        }
        InteractionStyle::Expandable => &[
            ExpansionStrategy::GridReorganize,
            ExpansionStrategy::ContentReveal,
            ExpansionStrategy::FocusMode,
        ],
        InteractionStyle::HoverCapable => &[
            ExpansionStrategy::HoverExpand,
            ExpansionStrategy::ContentReveal,
            ExpansionStrategy::FocusMode,
        ],
    };

    CardExpansionStrategy {
        supported_strategies: supported,
        primary_strategy: supported[0],
        expansion_scale: density.expansion_scale(),
        animation_duration: density.animation_duration(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── grid ────────────────────────────────────────────────────────────

    #[test]
    fn small_counts_get_fixed_grid() {
        for n in 0..=FIXED_GRID_MAX_ITEMS {
            let g = grid_strategy(n, DeviceType::Pad);
            assert_eq!(g.kind, GridKind::Fixed);
            assert_eq!(g.columns, (n as u32).max(1));
            assert!(g.breakpoints.is_empty());
        }
    }

    #[test]
    fn moderate_counts_get_adaptive_grid() {
        let g = grid_strategy(12, DeviceType::Mac);
        assert_eq!(g.kind, GridKind::Adaptive);
        assert!(!g.breakpoints.is_empty());
    }

    #[test]
    fn grid_kind_boundaries() {
        for device in DeviceType::ALL {
            assert_eq!(grid_strategy(4, device).kind, GridKind::Fixed);
            assert_eq!(grid_strategy(5, device).kind, GridKind::Adaptive);
            assert_eq!(grid_strategy(20, device).kind, GridKind::Adaptive);
            assert_eq!(grid_strategy(21, device).kind, GridKind::Lazy);
        }
    }

    #[test]
    fn large_counts_get_lazy_grid() {
        let g = grid_strategy(500, DeviceType::Pad);
        assert_eq!(g.kind, GridKind::Lazy);
        assert!(!g.breakpoints.is_empty());
    }

    #[test]
    fn grid_columns_scale_with_device() {
        for n in [12, 500] {
            let phone = grid_strategy(n, DeviceType::Phone).columns;
            let pad = grid_strategy(n, DeviceType::Pad).columns;
            let mac = grid_strategy(n, DeviceType::Mac).columns;
            assert!(phone < pad && pad < mac, "{n}: {phone} {pad} {mac}");
        }
    }

    #[test]
    fn breakpoint_lists_ascend() {
        for list in [
            ADAPTIVE_GRID_BREAKPOINTS,
            LAZY_GRID_BREAKPOINTS,
            ADAPTIVE_BREAKPOINTS,
            FLUID_BREAKPOINTS,
            BREAKPOINT_BREAKPOINTS,
        ] {
            for w in list.windows(2) {
                assert!(w[0] < w[1]);
            }
        }
    }

    // ── responsive ──────────────────────────────────────────────────────

    #[test]
    fn phone_is_always_fixed() {
        for c in ContentComplexity::ALL {
            let r = responsive_behavior(DeviceType::Phone, c);
            assert_eq!(r.kind, ResponsiveType::Fixed);
            assert!(!r.adaptive);
        }
    }

    #[test]
    fn pad_adaptive_then_fluid() {
        assert_eq!(
            responsive_behavior(DeviceType::Pad, ContentComplexity::Simple).kind,
            ResponsiveType::Adaptive
        );
        assert_eq!(
            responsive_behavior(DeviceType::Pad, ContentComplexity::Complex).kind,
            ResponsiveType::Fluid
        );
    }

    #[test]
    fn mac_adaptive_then_breakpoint() {
        let simple = responsive_behavior(DeviceType::Mac, ContentComplexity::Simple);
        assert_eq!(simple.kind, ResponsiveType::Adaptive);
        assert!(simple.adaptive);
        assert_eq!(
            responsive_behavior(DeviceType::Mac, ContentComplexity::Complex).kind,
            ResponsiveType::Breakpoint
        );
    }

    #[test]
    fn non_fixed_behaviors_have_breakpoints() {
        for device in DeviceType::ALL {
            for c in ContentComplexity::ALL {
                let r = responsive_behavior(device, c);
                assert_eq!(r.adaptive, r.kind != ResponsiveType::Fixed);
                assert_eq!(r.breakpoints.is_empty(), !r.adaptive, "{device:?} {c:?}");
            }
        }
    }

    // ── expansion ───────────────────────────────────────────────────────

    #[test]
    fn static_disables_expansion_for_every_density() {
        for density in ContentDensity::ALL {
            let s = card_expansion_strategy(InteractionStyle::Static, density);
            assert_eq!(s.supported_strategies, &[ExpansionStrategy::None]);
            assert_eq!(s.primary_strategy, ExpansionStrategy::None);
            assert_eq!(s.expansion_scale, 1.0);
            assert_eq!(s.animation_duration, 0.0);
        }
    }

    #[test]
    fn interactive_styles_enable_expansion() {
        for style in InteractionStyle::ALL {
            if style == InteractionStyle::Static {
                continue;
            }
            for density in ContentDensity::ALL {
                let s = card_expansion_strategy(style, density);
                assert!(!s.supported_strategies.is_empty());
                assert!(!s.supported_strategies.contains(&ExpansionStrategy::None));
                assert_ne!(s.primary_strategy, ExpansionStrategy::None);
                assert_eq!(s.primary_strategy, s.supported_strategies[0]);
                assert!(s.expansion_scale > 1.0);
                assert!(s.animation_duration > 0.0);
            }
        }
    }

    #[test]
    fn hover_prefers_hover_expand() {
        let s = card_expansion_strategy(InteractionStyle::HoverCapable, ContentDensity::Balanced);
        assert_eq!(s.primary_strategy, ExpansionStrategy::HoverExpand);
    }

    #[test]
    fn expansion_grows_toward_spacious() {
        for w in ContentDensity::ALL.windows(2) {
            assert!(w[0].expansion_scale() < w[1].expansion_scale());
            assert!(w[0].animation_duration() < w[1].animation_duration());
        }
    }
}
