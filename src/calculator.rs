//! Column, spacing, and item size calculation.
//!
//! The single source of truth for how many columns a collection gets. Caps
//! are layered, each one only ever lowering the count:
//!
//! ```text
//!     content cap      item_count / 3, at least 1
//!          │
//!     complexity cap   simple 3 · moderate 4 · complex 5 · very complex 6
//!          │
//!     context cap      width < 768 → 2 · < 1024 → 4 · else 6
//!          │           (external display: ceiling grows with monitor size)
//!     window cap       vision → 4 · slide over → 3
//!          │
//!     floor            ≥ 1
//! ```
//!
//! Media collections skip the first three layers and use a count-tiered
//! table keyed by screen size, which may reach [`ABSOLUTE_MAX_COLUMNS`] on
//! 8K viewports.
//!
//! # Example
//!
//! ```
//! use zenarrange::{calculator, ContentComplexity, DataTypeHint, DeviceType, LayoutContext};
//!
//! let ctx = LayoutContext::new(DeviceType::Phone, 375.0);
//! let layout = calculator::calculate(20, ContentComplexity::Complex, DataTypeHint::Generic, &ctx);
//!
//! assert_eq!(layout.columns, 2);
//! assert_eq!(layout.spacing, 12.0);
//! assert_eq!(layout.item_size, None);
//! ```

use crate::complexity::ContentComplexity;
use crate::context::{DeviceType, LayoutContext, WindowState};
use crate::screen::ScreenSize;

/// Items per column used for the content cap.
pub const ITEMS_PER_COLUMN: usize = 3;
/// Widths below this are mobile-class.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
/// Widths below this (and at least [`MOBILE_MAX_WIDTH`]) are tablet-class.
pub const TABLET_MAX_WIDTH: f64 = 1024.0;
/// Column ceiling for mobile-class widths.
pub const MOBILE_MAX_COLUMNS: u32 = 2;
/// Column ceiling for tablet-class widths.
pub const TABLET_MAX_COLUMNS: u32 = 4;
/// Column ceiling for desktop-class widths on the generic path.
pub const DESKTOP_MAX_COLUMNS: u32 = 6;
/// Hard column ceiling on any path.
pub const ABSOLUTE_MAX_COLUMNS: u32 = 16;
/// Column ceiling for head-mounted displays, at any width.
pub const VISION_MAX_COLUMNS: u32 = 4;
/// Column ceiling inside a slide-over panel, at any width.
pub const SLIDE_OVER_MAX_COLUMNS: u32 = 3;
/// Spacing multiplier in split view.
pub const SPLIT_VIEW_SPACING_FACTOR: f64 = 0.75;
/// Spacing multiplier in a slide-over panel.
pub const SLIDE_OVER_SPACING_FACTOR: f64 = 0.5;
/// Largest media collection treated as a small album.
pub const SMALL_ALBUM_MAX_ITEMS: usize = 10;
/// Largest media collection treated as a medium album.
pub const MEDIUM_ALBUM_MAX_ITEMS: usize = 50;

/// Generic desktop ceiling on an external display, per [`ScreenSize`].
/// Widths below 1024 never reach this table.
const EXTERNAL_DISPLAY_MAX_COLUMNS: [u32; 6] = [6, 6, 8, 10, 12, 12];

/// Media columns: rows are album tiers, columns are [`ScreenSize`].
/// Small screens stay within [`MOBILE_MAX_COLUMNS`] at every tier.
const MEDIA_COLUMNS: [[u32; 6]; 3] = [
    [2, 3, 4, 4, 5, 6],
    [2, 4, 5, 6, 8, 10],
    [2, 5, 6, 8, 12, 16],
];

/// Media thumbnail edge in points: rows are album tiers, columns are
/// [`ScreenSize`]. Non-decreasing along each row; the medium tier never
/// drops below 80% of the small tier.
const MEDIA_ITEM_SIZE: [[f64; 6]; 3] = [
    [150.0, 180.0, 200.0, 220.0, 260.0, 300.0],
    [120.0, 150.0, 170.0, 190.0, 220.0, 260.0],
    [100.0, 120.0, 140.0, 160.0, 200.0, 240.0],
];

/// Category of the content being arranged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataTypeHint {
    #[default]
    Generic,
    Text,
    Numeric,
    Temporal,
    /// Photos and video. Sized by count, see [`AlbumTier`].
    Media,
    Form,
    Collection,
    Hierarchical,
    Chart,
}

impl DataTypeHint {
    /// Every data type.
    pub const ALL: [Self; 9] = [
        Self::Generic,
        Self::Text,
        Self::Numeric,
        Self::Temporal,
        Self::Media,
        Self::Form,
        Self::Collection,
        Self::Hierarchical,
        Self::Chart,
    ];

    /// Whether columns and item size are driven by item count.
    pub const fn uses_count_based_sizing(self) -> bool {
        match self {
            Self::Media => true,
            Self::Generic
            | Self::Text
            | Self::Numeric
            | Self::Temporal
            | Self::Form
            | Self::Collection
            | Self::Hierarchical
            | Self::Chart => false,
        }
    }

    /// Lowercase name used in reasoning text and hint strings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Text => "text",
            Self::Numeric => "numeric",
            Self::Temporal => "temporal",
            Self::Media => "media",
            Self::Form => "form",
            Self::Collection => "collection",
            Self::Hierarchical => "hierarchical",
            Self::Chart => "chart",
        }
    }
}

/// Size tier of a media collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlbumTier {
    /// Up to 10 items.
    Small,
    /// 11 to 50 items.
    Medium,
    /// 51 items or more.
    Large,
}

impl AlbumTier {
    /// Tier for a media item count.
    pub fn from_item_count(count: usize) -> Self {
        if count <= SMALL_ALBUM_MAX_ITEMS {
            Self::Small
        } else if count <= MEDIUM_ALBUM_MAX_ITEMS {
            Self::Medium
        } else {
            Self::Large
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }
}

/// Columns, spacing, and (for media) item size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnLayout {
    /// Column count, at least 1.
    pub columns: u32,
    /// Gap between items in points, non-negative.
    pub spacing: f64,
    /// Item edge length in points. `Some` only for count-based sizing.
    pub item_size: Option<f64>,
}

/// Compute columns, spacing, and item size.
///
/// `complexity` is the count-derived tier; it is taken as an argument so the
/// caller decides which tier governs.
pub fn calculate(
    item_count: usize,
    complexity: ContentComplexity,
    data_type: DataTypeHint,
    ctx: &LayoutContext,
) -> ColumnLayout {
    let (columns, item_size) = if data_type.uses_count_based_sizing() {
        (
            media_columns(item_count, ctx),
            Some(media_item_size(item_count, ctx.screen_size())),
        )
    } else {
        (generic_columns(item_count, complexity, ctx), None)
    };

    ColumnLayout {
        columns,
        spacing: spacing(ctx),
        item_size,
    }
}

/// Column count for non-media content.
pub fn generic_columns(
    item_count: usize,
    complexity: ContentComplexity,
    ctx: &LayoutContext,
) -> u32 {
    let context_cap = context_ceiling(ctx);
    let content_max = DESKTOP_MAX_COLUMNS.max(context_cap);

    let per_column = item_count / ITEMS_PER_COLUMN;
    let content = u32::try_from(per_column)
        .unwrap_or(u32::MAX)
        .clamp(1, content_max);
    let complexity_cap = complexity_ceiling(complexity, context_cap);

    let columns = content.min(complexity_cap).min(context_cap);
    trace_layer!(
        content = content,
        complexity_cap = complexity_cap,
        context_cap = context_cap,
        columns = columns,
        "generic column caps"
    );
    apply_window_caps(columns, ctx)
}

/// Column count for media content.
pub fn media_columns(item_count: usize, ctx: &LayoutContext) -> u32 {
    let tier = AlbumTier::from_item_count(item_count);
    let columns =
        MEDIA_COLUMNS[tier.index()][ctx.screen_size().index()].min(ABSOLUTE_MAX_COLUMNS);
    trace_layer!(tier = ?tier, columns = columns, "media column table");
    apply_window_caps(columns, ctx)
}

/// Media thumbnail edge length for a count and screen size.
pub fn media_item_size(item_count: usize, screen: ScreenSize) -> f64 {
    MEDIA_ITEM_SIZE[AlbumTier::from_item_count(item_count).index()][screen.index()]
}

/// Ceiling a complexity tier places on the column count.
///
/// Very complex content may use every column the context allows.
pub fn complexity_ceiling(complexity: ContentComplexity, context_cap: u32) -> u32 {
    match complexity {
        ContentComplexity::Simple => 3,
        ContentComplexity::Moderate => 4,
        ContentComplexity::Complex => 5,
        ContentComplexity::VeryComplex => DESKTOP_MAX_COLUMNS.max(context_cap),
    }
}

/// Ceiling the effective viewport places on the generic column count.
///
/// On an external display the monitor's width governs: there is no mobile
/// cap, and desktop-class monitors lift the ceiling with their size.
pub fn context_ceiling(ctx: &LayoutContext) -> u32 {
    let width = ctx.effective_viewport_width();
    let external = ctx.is_external_display();

    if width < MOBILE_MAX_WIDTH && !external {
        MOBILE_MAX_COLUMNS
    } else if width < TABLET_MAX_WIDTH {
        TABLET_MAX_COLUMNS
    } else if external {
        EXTERNAL_DISPLAY_MAX_COLUMNS[ctx.screen_size().index()]
    } else {
        DESKTOP_MAX_COLUMNS
    }
}

/// Device and windowing overrides, applied last.
///
/// Split view and Stage Manager need no override here: their narrower width
/// is already the effective viewport the earlier ceilings were computed from.
fn apply_window_caps(columns: u32, ctx: &LayoutContext) -> u32 {
    let mut columns = columns.min(ABSOLUTE_MAX_COLUMNS);

    match ctx.device_type {
        DeviceType::Vision => columns = columns.min(VISION_MAX_COLUMNS),
        DeviceType::Phone
        | DeviceType::Pad
        | DeviceType::Mac
        | DeviceType::Tv
        | DeviceType::Watch
        | DeviceType::Car => {}
    }

    match ctx.window_state {
        WindowState::SlideOver => columns = columns.min(SLIDE_OVER_MAX_COLUMNS),
        WindowState::None | WindowState::SplitView | WindowState::StageManager => {}
    }

    columns.max(1)
}

/// Unconstrained spacing for a device type, in points.
pub const fn base_spacing(device: DeviceType) -> f64 {
    match device {
        DeviceType::Mac => 20.0,
        DeviceType::Pad => 16.0,
        DeviceType::Phone => 12.0,
        DeviceType::Tv => 20.0,
        DeviceType::Vision => 20.0,
        DeviceType::Car => 16.0,
        DeviceType::Watch => 12.0,
    }
}

/// Spacing for a context: the device's base spacing, reduced in split view
/// and slide over.
pub fn spacing(ctx: &LayoutContext) -> f64 {
    let base = base_spacing(ctx.device_type);
    match ctx.window_state {
        WindowState::SplitView => base * SPLIT_VIEW_SPACING_FACTOR,
        WindowState::SlideOver => base * SLIDE_OVER_SPACING_FACTOR,
        WindowState::None | WindowState::StageManager => base,
    }
}
