use crate::common::*;
use crate::dice::Dice;
use crate::error::{Error, Result};
use crate::sampled::SampledFunc;
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// Rolls `num` dice, each uniformly in `1..=faces`.
    fn roll_iter(&mut self, num: usize, faces: NonZeroUInt) -> Self::RollIter<'_>;

    /// A uniform number in `[0, total)`.
    fn unit(&mut self, total: Val) -> Val;

    /// Rolls `dice` and sums the results.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the count or faces are not positive.
    fn roll_dice(&mut self, dice: &Dice) -> Result<i64> {
        let (num, faces) = match (usize::try_from(dice.count), UInt::try_from(dice.faces)) {
            (Ok(num), Ok(faces)) if num > 0 => (num, NonZeroUInt::new(faces)),
            _ => (0, None),
        };
        let faces = faces.ok_or_else(|| Error::invalid_input(format!("cannot roll {}", dice)))?;
        Ok(self.roll_iter(num, faces).map(i64::from).sum())
    }

    /// Draws a position of `func` with probability proportional to its value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if a value is negative or the values
    /// do not sum to a positive total.
    fn draw(&mut self, func: &SampledFunc) -> Result<Pos> {
        if func.min_value() < 0.0 {
            return Err(Error::invalid_input("cannot draw from negative weights"));
        }
        let total: Val = func.values().sum();
        if !(total > 0.0 && total.is_finite()) {
            return Err(Error::invalid_input(format!(
                "cannot draw from weights summing to {}",
                total
            )));
        }

        let target = self.unit(total);
        let mut running = 0.0;
        for (pos, val) in func.iter() {
            running += val;
            if target < running {
                return Ok(pos);
            }
        }
        // rounding can leave `running` just under `target`
        Ok(func
            .iter()
            .filter(|&(_, val)| val > 0.0)
            .map(|(pos, _)| pos)
            .last()
            .unwrap_or_else(|| func.max_position()))
    }
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll_iter(&mut self, num: usize, faces: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, faces.get())
            .sample_iter(self)
            .take(num)
    }

    fn unit(&mut self, total: Val) -> Val {
        self.gen_range(0.0..total)
    }
}
