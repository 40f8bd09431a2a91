//! Cumulative route distance with an explicit "unreachable" sentinel.
//!
//! # Design
//!
//! Distances are finite non-negative `f64` sums of edge weights.  An
//! unreached node carries [`Distance::INFINITE`], which sorts after every
//! finite value.  Ordering uses `f64::total_cmp`, so `Distance` is `Ord` and
//! can key a `BinaryHeap` directly.
//!
//! Edge weights are validated strictly positive and bounded at graph
//! construction, so no `NaN` reaches this type through the routing path and
//! no finite path length overflows into the sentinel.

use std::cmp::Ordering;
use std::fmt;

/// Minimum cumulative weight from the routing source to a node.
///
/// With the `serde` feature it serializes as an optional number: `null` for
/// [`Distance::INFINITE`], since JSON has no infinity.
#[derive(Copy, Clone, Debug)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Sentinel for nodes with no path from the source.
    pub const INFINITE: Distance = Distance(f64::INFINITY);

    /// Wrap a finite distance.  Returns `None` for `NaN` and infinities.
    #[inline]
    pub fn finite(value: f64) -> Option<Distance> {
        value.is_finite().then_some(Distance(value))
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        self.0.is_finite()
    }

    /// The finite value, or `None` for [`Distance::INFINITE`].
    #[inline]
    pub fn value(self) -> Option<f64> {
        self.is_reachable().then_some(self.0)
    }

    /// Extend by one edge.  `INFINITE` stays infinite.
    #[inline]
    pub fn extend(self, weight: f64) -> Distance {
        Distance(self.0 + weight)
    }
}

impl Default for Distance {
    /// Unreached until proven otherwise.
    fn default() -> Self {
        Self::INFINITE
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(d) => write!(f, "{d:.2}"),
            None => f.write_str("Unreachable"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Distance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Distance {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            None => Ok(Distance::INFINITE),
            Some(v) if v >= 0.0 => Distance::finite(v)
                .ok_or_else(|| serde::de::Error::custom("distance must be finite")),
            Some(v) => Err(serde::de::Error::custom(format!("negative distance {v}"))),
        }
    }
}
