use std::num::NonZeroU32;

pub use vec1::vec1;

/// The type used for the position of a sample.
pub type Pos = i32;
/// The type used for the value of a sample.
pub type Val = f64;

/// The type used for dice counts and faces before validation.
pub type Int = i32;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Linearly interpolates between `lo` and `hi` at rate `t`.
#[inline]
pub fn lerp(lo: Val, hi: Val, t: Val) -> Val {
    lo * (1.0 - t) + hi * t
}

/// Returns the smallest and largest items of `values` in one pass, or `None`
/// if there are none. On ties the first extremal item is kept.
pub fn min_max<T, I>(values: I) -> Option<(T, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), t| {
        (if t < min { t } else { min }, if t > max { t } else { max })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(4.0, 2.0, 0.25), 3.5);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(Vec::<i32>::new()), None);
        assert_eq!(min_max([7]), Some((7, 7)));
        assert_eq!(min_max([3, -1, 8, 8, 0]), Some((-1, 8)));
        assert_eq!(min_max([0.5, 0.25, 0.75]), Some((0.25, 0.75)));
    }
}
