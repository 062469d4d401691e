use crate::common::*;
use crate::error::{Error, Result};
use crate::parse::{self, ParseError};
use crate::sampled::SampledFunc;
use std::collections::BTreeMap;
use std::fmt;

/// A number of identical dice, as written in `"<count>d<faces>"` notation.
///
/// The fields are not validated on construction; the distribution builders
/// reject non-positive values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub count: Int,
    pub faces: Int,
}

impl Dice {
    pub const fn new(count: Int, faces: Int) -> Self {
        Self { count, faces }
    }

    fn validate(&self) -> Result<()> {
        if self.count < 1 {
            Err(Error::invalid_input(format!(
                "dice count must be positive, got {}",
                self.count
            )))
        } else if self.faces < 1 {
            Err(Error::invalid_input(format!(
                "dice faces must be positive, got {}",
                self.faces
            )))
        } else {
            Ok(())
        }
    }

    /// The triangular probability distribution of these dice.
    ///
    /// Positions run from `count` to `count + 2*faces - 2`, rising linearly
    /// up to `count + faces - 1` and falling back down, with a total mass of
    /// one. This is the exact distribution of the sum only for two dice; for
    /// other counts the shape is kept as is. Use
    /// [convolved_func](Self::convolved_func) for the exact sum.
    ///
    /// Values are scaled by `1/faces^2` for every count, so they sum to one;
    /// a `1/faces^count` scale would only agree with it for two dice.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `count` or `faces` is not positive,
    /// or if a position would overflow.
    ///
    /// # Examples
    /// ```
    /// # use dice_func::Dice;
    /// let f = Dice::new(2, 6).prob_func().unwrap();
    /// assert_eq!(f.min_position(), 2);
    /// assert_eq!(f.max_position(), 12);
    /// assert!((f.get(7).unwrap() - 6.0 / 36.0).abs() < 1e-9);
    /// ```
    pub fn prob_func(&self) -> Result<SampledFunc> {
        self.validate()?;
        let Self { count, faces } = *self;
        if faces.checked_mul(2).and_then(|x| x.checked_add(count)).is_none() {
            return Err(Error::invalid_input(format!("{} is too large", self)));
        }

        // the ramps weigh faces^2 in total
        let p = 1.0 / (faces as Val * faces as Val);
        let mut probs = BTreeMap::new();
        let mut add = |pos: Pos, weight: Int| {
            *probs.entry(pos).or_insert(0.0) += p * weight as Val;
        };

        for i in 0..faces {
            add(i + count, i + 1);
        }
        // empty for a single face, so position `count` is written once
        for i in 0..faces - 1 {
            add(i + faces + count, faces - i - 1);
        }

        log::debug!("{}: triangular distribution over {} positions", self, probs.len());
        SampledFunc::new(probs)
    }

    /// The exact probability distribution of the sum of these dice, computed
    /// by convolving one uniform die at a time.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `count` or `faces` is not positive,
    /// or if `count * faces` would overflow.
    pub fn convolved_func(&self) -> Result<SampledFunc> {
        self.validate()?;
        let Self { count, faces } = *self;
        let max = count
            .checked_mul(faces)
            .ok_or_else(|| Error::invalid_input(format!("{} is too large", self)))?;

        let face_prob = 1.0 / faces as Val;
        // probs[k] is the probability of the dice rolled so far summing to k + rolled
        let mut probs: Vec<Val> = vec![1.0];
        for _ in 0..count {
            let mut next = vec![0.0; probs.len() + faces as usize - 1];
            for (k, &prob) in probs.iter().enumerate() {
                for slot in &mut next[k..k + faces as usize] {
                    *slot += prob * face_prob;
                }
            }
            probs = next;
        }
        debug_assert_eq!(probs.len(), (max - count + 1) as usize);

        log::debug!("{}: convolved distribution over {} positions", self, probs.len());
        SampledFunc::new((count..=max).zip(probs).collect())
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}

impl std::str::FromStr for Dice {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse::parse(s)
    }
}

/// The triangular probability distribution of `count` dice with `faces`
/// faces. See [`Dice::prob_func`].
pub fn dice_prob_func(count: Int, faces: Int) -> Result<SampledFunc> {
    Dice::new(count, faces).prob_func()
}

/// The exact probability distribution of the sum of `count` dice with
/// `faces` faces. See [`Dice::convolved_func`].
pub fn dice_conv_func(count: Int, faces: Int) -> Result<SampledFunc> {
    Dice::new(count, faces).convolved_func()
}
