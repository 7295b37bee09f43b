use std::fmt;

use crate::IdError;

/// Validated ID length, always in `2..=255`.
///
/// Constructors accept any primitive integer and convert it through [`TryFrom`],
/// which is where the bounds are checked.
///
/// ```
/// # use shortid::{Length, IdError};
/// assert_eq!(Length::try_from(21_u32).unwrap().get(), 21);
/// assert!(matches!(Length::try_from(-5_i64), Err(IdError::InvalidLength(-5))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(u8);

impl Length {
    /// Shortest allowed length.
    pub const MIN: usize = 2;

    /// Longest allowed length.
    pub const MAX: usize = 255;

    fn checked(v: i128) -> Result<Self, IdError> {
        if v < Self::MIN as i128 || v > Self::MAX as i128 {
            return Err(IdError::InvalidLength(v));
        }
        Ok(Length(v as u8))
    }

    /// The length as number of symbols.
    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

macro_rules! length_from {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Length {
                type Error = IdError;

                fn try_from(v: $t) -> Result<Self, Self::Error> {
                    Length::checked(v as i128)
                }
            }
        )*
    };
}

length_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rejected<T>(v: T) -> i128
    where
        T: TryInto<Length, Error = IdError>,
    {
        match v.try_into() {
            Err(IdError::InvalidLength(n)) => n,
            r => panic!("expected InvalidLength, got {:?}", r),
        }
    }

    #[test]
    fn bounds() {
        assert_eq!(Length::try_from(2).unwrap().get(), 2);
        assert_eq!(Length::try_from(255).unwrap().get(), 255);

        assert_eq!(rejected(0), 0);
        assert_eq!(rejected(1), 1);
        assert_eq!(rejected(256), 256);
        assert_eq!(rejected(-1), -1);
    }

    #[test]
    fn all_integer_types() {
        assert_eq!(Length::try_from(21_u8).unwrap().get(), 21);
        assert_eq!(Length::try_from(21_u16).unwrap().get(), 21);
        assert_eq!(Length::try_from(21_usize).unwrap().get(), 21);
        assert_eq!(Length::try_from(21_isize).unwrap().get(), 21);
        assert_eq!(Length::try_from(21_i8).unwrap().get(), 21);

        assert_eq!(rejected(i64::MIN), i64::MIN as i128);
        assert_eq!(rejected(u64::MAX), u64::MAX as i128);
        assert_eq!(rejected(usize::MAX), usize::MAX as i128);
    }
}
