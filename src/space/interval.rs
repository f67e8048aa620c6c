//! Closed integer interval, the atomic unit of every box.

use std::fmt::Display;

/// Closed range `[min, max]` of integer ratings on one axis.
///
/// An `Interval` is never empty: the empty set is represented by the absence
/// of an interval (`None` from [`Interval::try_new`] and the clipping helpers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    min: i64,
    max: i64,
}

impl Interval {
    /// Creates interval `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub const fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "Interval min must be <= max");
        Self { min, max }
    }

    /// Creates interval `[min, max]`, or `None` when the range is empty.
    pub const fn try_new(min: i64, max: i64) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Number of integer points in the interval.
    pub const fn count(&self) -> u128 {
        self.max.abs_diff(self.min) as u128 + 1
    }

    /// Returns true if `value` ∈ `[min, max]`.
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true if `other` lies entirely inside this interval.
    pub const fn covers(&self, other: &Interval) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Checks if this interval overlaps with another interval.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        Self::try_new(self.min.max(other.min), self.max.min(other.max))
    }

    /// The part of this interval strictly below `threshold`.
    pub fn below(&self, threshold: i64) -> Option<Interval> {
        let last = threshold.checked_sub(1)?;
        Self::try_new(self.min, self.max.min(last))
    }

    /// The part of this interval at or above `threshold`.
    pub fn at_or_above(&self, threshold: i64) -> Option<Interval> {
        Self::try_new(self.min.max(threshold), self.max)
    }

    /// The part of this interval strictly above `threshold`.
    pub fn above(&self, threshold: i64) -> Option<Interval> {
        let first = threshold.checked_add(1)?;
        Self::try_new(self.min.max(first), self.max)
    }

    /// The part of this interval at or below `threshold`.
    pub fn at_or_below(&self, threshold: i64) -> Option<Interval> {
        Self::try_new(self.min, self.max.min(threshold))
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("min", &self.min)?;
        s.serialize_field("max", &self.max)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            min: i64,
            max: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::try_new(raw.min, raw.max).ok_or_else(|| {
            serde::de::Error::custom(format!("empty interval [{}, {}]", raw.min, raw.max))
        })
    }
}
