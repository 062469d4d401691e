use crate::common::*;
use crate::error::{Error, Result};
use std::collections::{btree_map::Entry, BTreeMap};

/// A mathematical function known through a set of integer-positioned samples.
/// Values between two samples are linearly interpolated.
///
/// A `SampledFunc` never changes after construction: [cumulative](Self::cumulative)
/// and [inverse](Self::inverse) build new functions.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledFunc {
    samples: BTreeMap<Pos, Val>,
    min_position: Pos,
    max_position: Pos,
    min_value: Val,
    max_value: Val,
}

impl SampledFunc {
    /// Creates a function from its samples.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `samples` is empty.
    pub fn new(samples: BTreeMap<Pos, Val>) -> Result<Self> {
        let (min_position, max_position) = min_max(samples.keys().copied())
            .ok_or_else(|| Error::invalid_input("a sampled function needs at least one sample"))?;
        let (min_value, max_value) = min_max(samples.values().copied())
            .ok_or_else(|| Error::invalid_input("a sampled function needs at least one sample"))?;
        Ok(Self {
            samples,
            min_position,
            max_position,
            min_value,
            max_value,
        })
    }

    /// Creates a function from an unordered list of samples.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the list is empty or names a position twice.
    pub fn from_samples(samples: impl IntoIterator<Item = (Pos, Val)>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (pos, val) in samples {
            match map.entry(pos) {
                Entry::Vacant(e) => {
                    e.insert(val);
                }
                Entry::Occupied(_) => {
                    return Err(Error::invalid_input(format!("duplicate sample at position {}", pos)))
                }
            }
        }
        Self::new(map)
    }

    pub fn samples_count(&self) -> usize {
        self.samples.len()
    }

    pub fn min_position(&self) -> Pos {
        self.min_position
    }

    pub fn max_position(&self) -> Pos {
        self.max_position
    }

    pub fn min_value(&self) -> Val {
        self.min_value
    }

    pub fn max_value(&self) -> Val {
        self.max_value
    }

    /// The stored value at `pos`, without interpolation.
    pub fn get(&self, pos: Pos) -> Option<Val> {
        self.samples.get(&pos).copied()
    }

    /// Iterates over the samples in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Val)> + '_ {
        self.samples.iter().map(|(&pos, &val)| (pos, val))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.samples.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = Val> + '_ {
        self.samples.values().copied()
    }

    fn value_at(&self, pos: i64) -> Result<Val> {
        Pos::try_from(pos)
            .ok()
            .and_then(|p| self.get(p))
            .ok_or(Error::KeyNotFound(pos))
    }

    /// Evaluates the function at `x`, interpolating between the two
    /// surrounding samples.
    ///
    /// When the upper neighbour of `x` exceeds the number of samples, the
    /// value at `floor(x)` is returned as is. The comparison is against the
    /// sample *count*, not the largest position.
    ///
    /// # Errors
    /// Returns [`Error::KeyNotFound`] if a position needed for the lookup has
    /// no sample, and [`Error::InvalidInput`] if `x` is not finite.
    ///
    /// # Examples
    /// ```
    /// # use dice_func::SampledFunc;
    /// let f = SampledFunc::from_samples([(1, 2.0), (2, 4.0), (3, 8.0)]).unwrap();
    /// assert_eq!(f.sample(1.5).unwrap(), 3.0);
    /// assert_eq!(f.sample(3.0).unwrap(), 8.0);
    /// ```
    pub fn sample(&self, x: Val) -> Result<Val> {
        if !x.is_finite() {
            return Err(Error::invalid_input(format!("cannot sample at {}", x)));
        }
        let a = x.floor() as i64;
        let mut b = x.ceil() as i64;
        if a == b {
            b = a.saturating_add(1);
        }

        if b > self.samples_count() as i64 {
            return self.value_at(a);
        }
        Ok(lerp(self.value_at(a)?, self.value_at(b)?, x - a as Val))
    }

    /// The running sum of this function's values, in ascending position order.
    pub fn cumulative(&self) -> Self {
        log::trace!("cumulative of {} samples", self.samples_count());
        let mut total = 0.0;
        let samples = self
            .iter()
            .map(|(pos, val)| {
                total += val;
                (pos, total)
            })
            .collect();
        self.derived(samples)
    }

    /// Rescales every position by this function's largest position:
    /// the value at `k` is `k / max_position`. The original values are
    /// discarded.
    pub fn inverse(&self) -> Self {
        log::trace!("inverse of {} samples", self.samples_count());
        let max = self.max_position as Val;
        let samples = self
            .positions()
            .map(|pos| (pos, pos as Val / max))
            .collect();
        self.derived(samples)
    }

    // The position set of a derived function is the receiver's, so only the
    // value extrema need a new scan.
    fn derived(&self, samples: BTreeMap<Pos, Val>) -> Self {
        let (min_value, max_value) =
            min_max(samples.values().copied()).unwrap_or((self.min_value, self.max_value));
        Self {
            samples,
            min_position: self.min_position,
            max_position: self.max_position,
            min_value,
            max_value,
        }
    }
}
