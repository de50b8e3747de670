//! Content complexity classification from item count.

/// Highest item count classified as [`ContentComplexity::Simple`].
pub const SIMPLE_MAX_ITEMS: usize = 5;
/// Highest item count classified as [`ContentComplexity::Moderate`].
pub const MODERATE_MAX_ITEMS: usize = 9;
/// Highest item count classified as [`ContentComplexity::Complex`].
pub const COMPLEX_MAX_ITEMS: usize = 25;

/// Four-tier content complexity, ordered from simplest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentComplexity {
    /// 0 to 5 items.
    Simple,
    /// 6 to 9 items.
    Moderate,
    /// 10 to 25 items.
    Complex,
    /// 26 items or more.
    VeryComplex,
}

/// How a layout adapts to its content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutApproach {
    /// Same-sized cells, no adaptation.
    Uniform,
    /// Cells adapt to the available width.
    Adaptive,
    /// Column count responds to width breakpoints.
    Responsive,
    /// Columns and sizing recomputed continuously.
    Dynamic,
}

impl ContentComplexity {
    /// Every tier, simplest first.
    pub const ALL: [Self; 4] = [
        Self::Simple,
        Self::Moderate,
        Self::Complex,
        Self::VeryComplex,
    ];

    /// Classify an item count. Zero items is [`Simple`](Self::Simple).
    pub fn from_item_count(count: usize) -> Self {
        if count <= SIMPLE_MAX_ITEMS {
            Self::Simple
        } else if count <= MODERATE_MAX_ITEMS {
            Self::Moderate
        } else if count <= COMPLEX_MAX_ITEMS {
            Self::Complex
        } else {
            Self::VeryComplex
        }
    }

    /// Layout approach paired with this tier.
    pub const fn approach(self) -> LayoutApproach {
        match self {
            Self::Simple => LayoutApproach::Uniform,
            Self::Moderate => LayoutApproach::Adaptive,
            Self::Complex => LayoutApproach::Responsive,
            Self::VeryComplex => LayoutApproach::Dynamic,
        }
    }

    /// Lowercase name used in reasoning text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::VeryComplex => "very complex",
        }
    }
}

impl LayoutApproach {
    /// Every approach.
    pub const ALL: [Self; 4] = [
        Self::Uniform,
        Self::Adaptive,
        Self::Responsive,
        Self::Dynamic,
    ];

    /// Capitalized name used at the start of reasoning text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::Adaptive => "Adaptive",
            Self::Responsive => "Responsive",
            Self::Dynamic => "Dynamic",
        }
    }
}

/// Classify an item count into its complexity tier and layout approach.
pub fn classify(count: usize) -> (ContentComplexity, LayoutApproach) {
    let complexity = ContentComplexity::from_item_count(count);
    (complexity, complexity.approach())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        for n in 0..=5 {
            assert_eq!(classify(n), (ContentComplexity::Simple, LayoutApproach::Uniform));
        }
        for n in 6..=9 {
            assert_eq!(
                classify(n),
                (ContentComplexity::Moderate, LayoutApproach::Adaptive)
            );
        }
        for n in 10..=25 {
            assert_eq!(
                classify(n),
                (ContentComplexity::Complex, LayoutApproach::Responsive)
            );
        }
        for n in [26, 27, 100, 10_000, usize::MAX] {
            assert_eq!(
                classify(n),
                (ContentComplexity::VeryComplex, LayoutApproach::Dynamic)
            );
        }
    }

    #[test]
    fn tiers_are_ordered() {
        for w in ContentComplexity::ALL.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn each_tier_has_distinct_approach() {
        for a in ContentComplexity::ALL {
            for b in ContentComplexity::ALL {
                if a != b {
                    assert_ne!(a.approach(), b.approach());
                }
            }
        }
        for approach in LayoutApproach::ALL {
            assert!(
                ContentComplexity::ALL
                    .iter()
                    .any(|c| c.approach() == approach),
                "{approach:?} unreachable"
            );
        }
    }
}
