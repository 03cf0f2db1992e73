// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint sets: standard named slots plus custom thresholds.
//!
//! ## Overview
//!
//! A [`BreakpointSet`] stores an optional payload for each of the six
//! [standard breakpoints](crate::threshold::Breakpoint) and an ordered map of
//! custom thresholds to payloads.
//! Standard thresholds are fixed; only their payload is settable.
//!
//! ## Ordering
//!
//! [`BreakpointSet::entries`] merges both sources into one ascending sequence
//! of populated slots. When a custom threshold equals a standard bound, the
//! custom entry shadows the standard one.
//!
//! ## Transforming payloads
//!
//! [`BreakpointSet::map`] rewrites every populated payload and keeps the
//! threshold structure. [`BreakpointSet::into_lazy`] is the common case of
//! wrapping each value in a trivial [`Lazy`] producer.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::Peekable;

use crate::lazy::Lazy;
use crate::threshold::{Breakpoint, Threshold};

/// Optional payloads for the six standard breakpoints.
///
/// This is the construction input for the standard part of a
/// [`BreakpointSet`]; missing fields mean "no payload".
///
/// ```
/// use understory_breakpoints::{BreakpointSet, StandardSlots};
///
/// let set = BreakpointSet::new(
///     StandardSlots { sm: Some("A"), md: Some("B"), ..Default::default() },
///     [(1600.0, "D")],
/// );
/// assert_eq!(set.choose(1700.0), Ok(&"D"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardSlots<T> {
    /// Payload from −∞.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub xs: Option<T>,
    /// Payload from 576.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sm: Option<T>,
    /// Payload from 768.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub md: Option<T>,
    /// Payload from 992.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lg: Option<T>,
    /// Payload from 1200.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub xl: Option<T>,
    /// Payload from 1400.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub xxl: Option<T>,
}

impl<T> Default for StandardSlots<T> {
    fn default() -> Self {
        Self {
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }
}

impl<T> StandardSlots<T> {
    /// The payload slot for a breakpoint.
    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        match bp {
            Breakpoint::Xs => self.xs.as_ref(),
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
            Breakpoint::Xxl => self.xxl.as_ref(),
        }
    }

    fn slot_mut(&mut self, bp: Breakpoint) -> &mut Option<T> {
        match bp {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        }
    }

    fn map<U>(self, f: &mut impl FnMut(T) -> U) -> StandardSlots<U> {
        StandardSlots {
            xs: self.xs.map(&mut *f),
            sm: self.sm.map(&mut *f),
            md: self.md.map(&mut *f),
            lg: self.lg.map(&mut *f),
            xl: self.xl.map(&mut *f),
            xxl: self.xxl.map(&mut *f),
        }
    }

    fn as_ref(&self) -> StandardSlots<&T> {
        StandardSlots {
            xs: self.xs.as_ref(),
            sm: self.sm.as_ref(),
            md: self.md.as_ref(),
            lg: self.lg.as_ref(),
            xl: self.xl.as_ref(),
            xxl: self.xxl.as_ref(),
        }
    }
}

bitflags::bitflags! {
    /// Which standard slots of a set are populated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BreakpointMask: u8 {
        /// `xs` has a payload.
        const XS  = 0b0000_0001;
        /// `sm` has a payload.
        const SM  = 0b0000_0010;
        /// `md` has a payload.
        const MD  = 0b0000_0100;
        /// `lg` has a payload.
        const LG  = 0b0000_1000;
        /// `xl` has a payload.
        const XL  = 0b0001_0000;
        /// `xxl` has a payload.
        const XXL = 0b0010_0000;
    }
}

impl BreakpointMask {
    /// The flag for a single standard breakpoint.
    pub const fn of(bp: Breakpoint) -> Self {
        Self::from_bits_retain(1 << bp.index())
    }
}

/// Identifies a populated slot: a standard breakpoint or a custom threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// One of the six standard breakpoints.
    Standard(Breakpoint),
    /// A custom threshold.
    Custom(Threshold),
}

impl Key {
    /// The threshold at which this slot becomes eligible.
    pub fn threshold(self) -> Threshold {
        match self {
            Self::Standard(bp) => bp.threshold(),
            Self::Custom(t) => t,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(bp) => write!(f, "{bp}"),
            Self::Custom(t) => write!(f, "custom({t})"),
        }
    }
}

/// A populated slot yielded by [`BreakpointSet::entries`] and returned by selection.
#[derive(Debug)]
pub struct Entry<'a, T> {
    /// Which slot this is.
    pub key: Key,
    /// The slot's payload.
    pub value: &'a T,
}

impl<T> Clone for Entry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<'_, T> {}

impl<T> Entry<'_, T> {
    /// The slot's threshold.
    #[inline]
    pub fn threshold(&self) -> Threshold {
        self.key.threshold()
    }
}

/// Standard breakpoints with optional payloads plus custom thresholds.
///
/// Build one with [`BreakpointSet::new`] or the `with*` builder methods,
/// query it with [`choose`](BreakpointSet::choose).
/// Queries take `&self` and never write, so a set can be shared freely.
///
/// ```
/// use understory_breakpoints::{Breakpoint, BreakpointSet};
///
/// let set = BreakpointSet::empty()
///     .with(Breakpoint::Sm, "A")
///     .with(Breakpoint::Md, "B")
///     .with(Breakpoint::Xl, "C");
///
/// assert_eq!(set.choose(800.0), Ok(&"B"));
/// assert_eq!(set.choose(1150.0), Ok(&"B"));
/// // Below every populated bound: the smallest populated slot is used.
/// assert_eq!(set.choose(50.0), Ok(&"A"));
/// ```
///
/// With the `serde` feature, a set is a flat map of slot names
/// (`xs` .. `xxl`) plus an optional `custom` map keyed by threshold:
/// `{"sm": .., "md": .., "custom": {"1600": ..}}`.
/// Unknown keys are rejected, and custom thresholds must be finite to be
/// serialized or loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointSet<T> {
    standard: StandardSlots<T>,
    custom: BTreeMap<Threshold, T>,
}

impl<T> Default for BreakpointSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> BreakpointSet<T> {
    /// Create a set from standard slots and custom `(threshold, payload)` pairs.
    ///
    /// If the same custom threshold appears more than once, the last payload wins.
    pub fn new<K: Into<Threshold>>(
        standard: StandardSlots<T>,
        custom: impl IntoIterator<Item = (K, T)>,
    ) -> Self {
        Self {
            standard,
            custom: custom.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Create a set with nothing populated.
    pub const fn empty() -> Self {
        Self {
            standard: StandardSlots {
                xs: None,
                sm: None,
                md: None,
                lg: None,
                xl: None,
                xxl: None,
            },
            custom: BTreeMap::new(),
        }
    }

    /// Builder: set the payload of a standard breakpoint.
    #[must_use]
    pub fn with(mut self, bp: Breakpoint, value: T) -> Self {
        self.set(bp, Some(value));
        self
    }

    /// Builder: set the payload of a custom threshold.
    ///
    /// Any non-NaN threshold is accepted, but a set holding an infinite custom
    /// threshold cannot be serialized.
    #[must_use]
    pub fn with_custom(mut self, threshold: impl Into<Threshold>, value: T) -> Self {
        self.set_custom(threshold, Some(value));
        self
    }

    /// Set or clear a standard slot, returning the previous payload.
    pub fn set(&mut self, bp: Breakpoint, value: Option<T>) -> Option<T> {
        core::mem::replace(self.standard.slot_mut(bp), value)
    }

    /// Set or clear a custom slot, returning the previous payload.
    pub fn set_custom(&mut self, threshold: impl Into<Threshold>, value: Option<T>) -> Option<T> {
        let threshold = threshold.into();
        match value {
            Some(v) => self.custom.insert(threshold, v),
            None => self.custom.remove(&threshold),
        }
    }

    /// The payload of a standard breakpoint, if populated.
    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        self.standard.get(bp)
    }

    /// The payload of a custom threshold, if populated.
    pub fn get_custom(&self, threshold: impl Into<Threshold>) -> Option<&T> {
        self.custom.get(&threshold.into())
    }

    /// The standard slots.
    pub fn standard(&self) -> &StandardSlots<T> {
        &self.standard
    }

    /// Custom entries in ascending threshold order.
    pub fn custom(&self) -> impl DoubleEndedIterator<Item = (Threshold, &T)> + '_ {
        self.custom.iter().map(|(k, v)| (*k, v))
    }

    /// Which standard slots are populated.
    pub fn populated(&self) -> BreakpointMask {
        Breakpoint::ALL
            .into_iter()
            .filter(|bp| self.standard.get(*bp).is_some())
            .fold(BreakpointMask::empty(), |m, bp| m | BreakpointMask::of(bp))
    }

    /// Number of effective slots, after custom entries shadow equal standard ones.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// True if nothing is populated, standard or custom.
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.populated().is_empty()
    }

    /// Borrow every payload, keeping the threshold structure.
    pub fn as_ref(&self) -> BreakpointSet<&T> {
        BreakpointSet {
            standard: self.standard.as_ref(),
            custom: self.custom.iter().map(|(k, v)| (*k, v)).collect(),
        }
    }

    /// Apply `f` to every populated payload, keeping the threshold structure.
    ///
    /// Unpopulated slots stay unpopulated and `f` never sees a threshold.
    /// Standard slots are visited `xs` through `xxl`, then custom slots in
    /// ascending order.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BreakpointSet<U> {
        let standard = self.standard.map(&mut f);
        let custom = self.custom.into_iter().map(|(k, v)| (k, f(v))).collect();
        BreakpointSet { standard, custom }
    }

    /// Wrap every payload in a trivial [`Lazy`] producer that returns it unchanged.
    pub fn into_lazy<'a, E: ?Sized>(self) -> BreakpointSet<Lazy<'a, E, T>>
    where
        T: Clone + 'a,
    {
        self.map(Lazy::ready)
    }

    /// Populated slots merged into one ascending sequence.
    ///
    /// A custom entry shadows a standard entry with the same threshold.
    /// This iterator does not allocate.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            standard: &self.standard,
            next_standard: 0,
            custom: self.custom.iter().peekable(),
        }
    }

    /// Collect [`entries`](Self::entries) into a vector.
    pub fn enumerate(&self) -> Vec<Entry<'_, T>> {
        self.entries().collect()
    }
}

/// Ascending iterator over the populated slots of a [`BreakpointSet`].
///
/// Returned by [`BreakpointSet::entries`].
pub struct Entries<'a, T> {
    standard: &'a StandardSlots<T>,
    next_standard: usize,
    custom: Peekable<btree_map::Iter<'a, Threshold, T>>,
}

impl<T> fmt::Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("next_standard", &self.next_standard)
            .finish_non_exhaustive()
    }
}

impl<'a, T> Entries<'a, T> {
    // Skip unpopulated standard slots and peek at the next populated one.
    fn peek_standard(&mut self) -> Option<(Breakpoint, &'a T)> {
        let standard = self.standard;
        while let Some(&bp) = Breakpoint::ALL.get(self.next_standard) {
            if let Some(v) = standard.get(bp) {
                return Some((bp, v));
            }
            self.next_standard += 1;
        }
        None
    }

    fn take_custom(&mut self) -> Option<Entry<'a, T>> {
        let (k, v) = self.custom.next()?;
        Some(Entry {
            key: Key::Custom(*k),
            value: v,
        })
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = Entry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let standard = self.peek_standard();
        let custom = self.custom.peek().map(|&(k, _)| *k);
        match (standard, custom) {
            (None, None) => None,
            (None, Some(_)) => self.take_custom(),
            (Some((bp, value)), None) => {
                self.next_standard += 1;
                Some(Entry {
                    key: Key::Standard(bp),
                    value,
                })
            }
            (Some((bp, value)), Some(t)) => match bp.threshold().cmp(&t) {
                Ordering::Less => {
                    self.next_standard += 1;
                    Some(Entry {
                        key: Key::Standard(bp),
                        value,
                    })
                }
                Ordering::Equal => {
                    // Shadowed by the custom entry.
                    self.next_standard += 1;
                    self.take_custom()
                }
                Ordering::Greater => self.take_custom(),
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let standard_left = Breakpoint::ALL.len().saturating_sub(self.next_standard);
        let custom_left = self.custom.len();
        (0, Some(standard_left + custom_left))
    }
}

impl<T> core::iter::FusedIterator for Entries<'_, T> {}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;
    use core::marker::PhantomData;

    use alloc::collections::BTreeMap;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::{self, SerializeMap};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{BreakpointMask, BreakpointSet};
    use crate::threshold::{Breakpoint, Threshold};

    const FIELDS: &[&str] = &["xs", "sm", "md", "lg", "xl", "xxl", "custom"];
    const CUSTOM: &str = "custom";

    fn non_finite(custom: &BTreeMap<Threshold, impl Sized>) -> Option<Threshold> {
        custom.keys().copied().find(|t| !t.get().is_finite())
    }

    impl<T: Serialize> Serialize for BreakpointSet<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if let Some(t) = non_finite(&self.custom) {
                return Err(ser::Error::custom(format_args!(
                    "custom breakpoint threshold must be finite, got {t}"
                )));
            }
            let slots = Breakpoint::ALL
                .into_iter()
                .filter_map(|bp| self.standard.get(bp).map(|v| (bp, v)));
            let len = slots.clone().count() + usize::from(!self.custom.is_empty());
            let mut map = serializer.serialize_map(Some(len))?;
            for (bp, v) in slots {
                map.serialize_entry(bp.name(), v)?;
            }
            if !self.custom.is_empty() {
                map.serialize_entry(CUSTOM, &self.custom)?;
            }
            map.end()
        }
    }

    enum Field {
        Slot(Breakpoint),
        Custom,
    }

    impl<'de> Deserialize<'de> for Field {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct FieldVisitor;

            impl Visitor<'_> for FieldVisitor {
                type Value = Field;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a breakpoint name or `custom`")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
                    if v == CUSTOM {
                        return Ok(Field::Custom);
                    }
                    Breakpoint::ALL
                        .into_iter()
                        .find(|bp| bp.name() == v)
                        .map(Field::Slot)
                        .ok_or_else(|| E::unknown_field(v, FIELDS))
                }
            }

            deserializer.deserialize_identifier(FieldVisitor)
        }
    }

    struct SetVisitor<T>(PhantomData<fn() -> T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for SetVisitor<T> {
        type Value = BreakpointSet<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of breakpoint names to payloads")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut set = BreakpointSet::empty();
            let mut seen = BreakpointMask::empty();
            let mut seen_custom = false;
            while let Some(field) = map.next_key::<Field>()? {
                match field {
                    Field::Slot(bp) => {
                        if seen.contains(BreakpointMask::of(bp)) {
                            return Err(de::Error::duplicate_field(bp.name()));
                        }
                        seen |= BreakpointMask::of(bp);
                        set.set(bp, map.next_value::<Option<T>>()?);
                    }
                    Field::Custom => {
                        if seen_custom {
                            return Err(de::Error::duplicate_field(CUSTOM));
                        }
                        seen_custom = true;
                        let custom: BTreeMap<Threshold, T> = map.next_value()?;
                        if let Some(t) = non_finite(&custom) {
                            return Err(de::Error::custom(format_args!(
                                "custom breakpoint threshold must be finite, got {t}"
                            )));
                        }
                        set.custom = custom;
                    }
                }
            }
            Ok(set)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for BreakpointSet<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(SetVisitor(PhantomData))
        }
    }
}
