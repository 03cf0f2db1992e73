// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thresholds and the standard breakpoint table.
//!
//! The six standard breakpoints have fixed lower bounds which are part of the
//! public contract:
//!
//! | name  | bound |
//! |-------|-------|
//! | `xs`  | −∞    |
//! | `sm`  | 576   |
//! | `md`  | 768   |
//! | `lg`  | 992   |
//! | `xl`  | 1200  |
//! | `xxl` | 1400  |

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Lower bound of [`Breakpoint::Xs`]; always eligible.
pub const XS: f64 = f64::NEG_INFINITY;
/// Lower bound of [`Breakpoint::Sm`].
pub const SM: f64 = 576.0;
/// Lower bound of [`Breakpoint::Md`].
pub const MD: f64 = 768.0;
/// Lower bound of [`Breakpoint::Lg`].
pub const LG: f64 = 992.0;
/// Lower bound of [`Breakpoint::Xl`].
pub const XL: f64 = 1200.0;
/// Lower bound of [`Breakpoint::Xxl`].
pub const XXL: f64 = 1400.0;

/// An inclusive lower bound at which a slot becomes eligible.
///
/// `Threshold` is totally ordered so it can key an ordered map.
/// `-0.0` is normalized to `0.0` so both spellings name the same slot.
///
/// This type assumes no NaNs. Debug builds assert.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Threshold(f64);

impl Threshold {
    /// Create a threshold from a raw bound.
    #[inline]
    pub fn new(value: f64) -> Self {
        debug_assert!(!value.is_nan(), "breakpoint threshold must not be NaN");
        // Adding zero folds -0.0 into 0.0 and leaves everything else unchanged.
        Self(value + 0.0)
    }

    /// The raw bound.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Whether a scalar `x` satisfies this bound (`self <= x`).
    ///
    /// A NaN scalar satisfies no bound.
    #[inline]
    pub fn admits(self, x: f64) -> bool {
        self.0 <= x
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Breakpoint> for Threshold {
    fn from(bp: Breakpoint) -> Self {
        bp.threshold()
    }
}

impl PartialEq for Threshold {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Threshold {}

impl Ord for Threshold {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Threshold {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Threshold {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Thresholds key maps in configuration files, where formats like JSON spell
// keys as strings, so both numbers and numeric strings are accepted.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Threshold {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ThresholdVisitor;

        impl serde::de::Visitor<'_> for ThresholdVisitor {
            type Value = Threshold;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or numeric string that is not NaN")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Threshold, E> {
                if v.is_nan() {
                    return Err(E::custom("breakpoint threshold must not be NaN"));
                }
                Ok(Threshold::new(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Threshold, E> {
                self.visit_f64(v as f64)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Threshold, E> {
                self.visit_f64(v as f64)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Threshold, E> {
                let parsed = v
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))?;
                self.visit_f64(parsed)
            }
        }

        deserializer.deserialize_any(ThresholdVisitor)
    }
}

/// The standard named breakpoints, in ascending threshold order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    /// Extra small; no finite lower bound.
    Xs,
    /// Small, from 576.
    Sm,
    /// Medium, from 768.
    Md,
    /// Large, from 992.
    Lg,
    /// Extra large, from 1200.
    Xl,
    /// Extra extra large, from 1400.
    Xxl,
}

impl Breakpoint {
    /// All standard breakpoints in ascending threshold order.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// The fixed lower bound of this breakpoint.
    #[inline]
    pub fn threshold(self) -> Threshold {
        Threshold(self.bound())
    }

    /// The fixed lower bound as a raw scalar.
    #[inline]
    pub const fn bound(self) -> f64 {
        match self {
            Self::Xs => XS,
            Self::Sm => SM,
            Self::Md => MD,
            Self::Lg => LG,
            Self::Xl => XL,
            Self::Xxl => XXL,
        }
    }

    /// Lowercase short name (`"xs"`, `"sm"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_fixed() {
        assert_eq!(Breakpoint::Xs.bound(), f64::NEG_INFINITY);
        assert_eq!(Breakpoint::Sm.bound(), 576.0);
        assert_eq!(Breakpoint::Md.bound(), 768.0);
        assert_eq!(Breakpoint::Lg.bound(), 992.0);
        assert_eq!(Breakpoint::Xl.bound(), 1200.0);
        assert_eq!(Breakpoint::Xxl.bound(), 1400.0);
    }

    #[test]
    fn all_is_ascending() {
        let mut prev = None;
        for bp in Breakpoint::ALL {
            if let Some(p) = prev {
                assert!(bp.threshold() > p);
            }
            prev = Some(bp.threshold());
        }
        for (i, bp) in Breakpoint::ALL.iter().enumerate() {
            assert_eq!(bp.index(), i);
        }
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(Threshold::new(-0.0), Threshold::new(0.0));
        assert!(Threshold::new(-0.0).get().is_sign_positive());
    }

    #[test]
    fn admits_is_inclusive() {
        let t = Threshold::new(768.0);
        assert!(t.admits(768.0));
        assert!(t.admits(769.0));
        assert!(!t.admits(767.9));
        assert!(!t.admits(f64::NAN));
        assert!(Breakpoint::Xs.threshold().admits(f64::MIN));
    }

    #[test]
    fn names() {
        assert_eq!(Breakpoint::Xxl.name(), "xxl");
        assert_eq!(alloc::format!("{}", Breakpoint::Md), "md");
    }
}
