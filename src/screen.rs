//! Screen size classification from the effective viewport width.
//!
//! Driven by the width actually available for layout, never by the device's
//! nominal screen. A phone mirrored to a 4K monitor classifies as
//! [`ScreenSize::XXLarge`].

/// Lower bound of [`ScreenSize::Medium`], in points.
pub const MEDIUM_MIN_WIDTH: f64 = 768.0;
/// Lower bound of [`ScreenSize::Large`], in points.
pub const LARGE_MIN_WIDTH: f64 = 1440.0;
/// Lower bound of [`ScreenSize::XLarge`] (2K), in points.
pub const XLARGE_MIN_WIDTH: f64 = 2560.0;
/// Lower bound of [`ScreenSize::XXLarge`] (4K), in points.
pub const XXLARGE_MIN_WIDTH: f64 = 3840.0;
/// Lower bound of [`ScreenSize::XXXLarge`] (8K), in points.
pub const XXXLARGE_MIN_WIDTH: f64 = 7680.0;

/// Ordered screen size category.
///
/// ```text
///     small    medium    large     xlarge    xxlarge   xxxlarge
///     ├────────┼─────────┼─────────┼─────────┼─────────┼─────────▶ width
///     0       768      1440      2560      3840      7680
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScreenSize {
    /// Phone-class width, below 768.
    Small,
    /// Tablet and compact laptop, 768 to 1439.
    Medium,
    /// Desktop, 1440 to 2559.
    Large,
    /// 2K displays, 2560 to 3839.
    XLarge,
    /// 4K displays, 3840 to 7679.
    XXLarge,
    /// 8K displays, 7680 and above.
    XXXLarge,
}

impl ScreenSize {
    /// Every category, smallest first.
    pub const ALL: [Self; 6] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::XXLarge,
        Self::XXXLarge,
    ];

    /// Classify a viewport width. Lower bounds are inclusive.
    ///
    /// NaN classifies as [`Small`](Self::Small).
    pub fn classify(width: f64) -> Self {
        if width >= XXXLARGE_MIN_WIDTH {
            Self::XXXLarge
        } else if width >= XXLARGE_MIN_WIDTH {
            Self::XXLarge
        } else if width >= XLARGE_MIN_WIDTH {
            Self::XLarge
        } else if width >= LARGE_MIN_WIDTH {
            Self::Large
        } else if width >= MEDIUM_MIN_WIDTH {
            Self::Medium
        } else {
            Self::Small
        }
    }

    /// Position in [`ALL`](Self::ALL), for indexing per-size rule tables.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
            Self::XLarge => 3,
            Self::XXLarge => 4,
            Self::XXXLarge => 5,
        }
    }

    /// Short human-readable label used in reasoning text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "2K",
            Self::XXLarge => "4K",
            Self::XXXLarge => "8K",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representative_widths() {
        assert_eq!(ScreenSize::classify(500.0), ScreenSize::Small);
        assert_eq!(ScreenSize::classify(1024.0), ScreenSize::Medium);
        assert_eq!(ScreenSize::classify(2000.0), ScreenSize::Large);
        assert_eq!(ScreenSize::classify(3000.0), ScreenSize::XLarge);
        assert_eq!(ScreenSize::classify(5000.0), ScreenSize::XXLarge);
        assert_eq!(ScreenSize::classify(10000.0), ScreenSize::XXXLarge);
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(ScreenSize::classify(767.9), ScreenSize::Small);
        assert_eq!(ScreenSize::classify(768.0), ScreenSize::Medium);
        assert_eq!(ScreenSize::classify(1439.0), ScreenSize::Medium);
        assert_eq!(ScreenSize::classify(1440.0), ScreenSize::Large);
        assert_eq!(ScreenSize::classify(2560.0), ScreenSize::XLarge);
        assert_eq!(ScreenSize::classify(3840.0), ScreenSize::XXLarge);
        assert_eq!(ScreenSize::classify(7680.0), ScreenSize::XXXLarge);
    }

    #[test]
    fn degenerate_widths_are_small() {
        assert_eq!(ScreenSize::classify(0.0), ScreenSize::Small);
        assert_eq!(ScreenSize::classify(-5.0), ScreenSize::Small);
        assert_eq!(ScreenSize::classify(f64::NAN), ScreenSize::Small);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, size) in ScreenSize::ALL.iter().enumerate() {
            assert_eq!(size.index(), i);
        }
        for w in ScreenSize::ALL.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn labels_are_distinct() {
        for a in ScreenSize::ALL {
            for b in ScreenSize::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
