pub mod decibel;
pub mod physical;

pub use decibel::*;
pub use physical::*;

pub(crate) type Base = f64;

macro_rules! unit {
    ($me:ident, $abbrev:literal) => {
        impl $me {
            pub const fn new(base: $crate::units::Base) -> Self {
                $me(base)
            }

            /// Raw value expressed in this unit.
            pub const fn value(&self) -> $crate::units::Base {
                self.0
            }

            pub fn is_finite(&self) -> bool {
                self.0.is_finite()
            }

            pub fn abs(self) -> Self {
                $me(self.0.abs())
            }

            pub fn max(self, other: Self) -> Self {
                $me(self.0.max(other.0))
            }

            pub fn min(self, other: Self) -> Self {
                $me(self.0.min(other.0))
            }
        }

        impl ::std::fmt::Debug for $me {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::result::Result<(), ::std::fmt::Error> {
                ::std::write!(f, "{}({})", ::std::stringify!($me), self.0)
            }
        }

        impl ::std::fmt::Display for $me {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::result::Result<(), ::std::fmt::Error> {
                ::std::fmt::Display::fmt(&self.0, f)?;
                ::std::write!(f, " {}", $abbrev)
            }
        }

        impl ::std::ops::Neg for $me {
            type Output = Self;

            fn neg(self) -> Self::Output {
                $me(-self.0)
            }
        }

        impl ::std::ops::Mul<$crate::units::Base> for $me {
            type Output = Self;

            fn mul(self, rhs: $crate::units::Base) -> Self::Output {
                $me(self.0 * rhs)
            }
        }

        impl ::std::ops::Div<$crate::units::Base> for $me {
            type Output = Self;

            fn div(self, rhs: $crate::units::Base) -> Self::Output {
                $me(self.0 / rhs)
            }
        }

        impl ::approx::AbsDiffEq for $me {
            type Epsilon = $crate::units::Base;

            fn default_epsilon() -> Self::Epsilon {
                f64::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                ::approx::AbsDiffEq::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl ::approx::RelativeEq for $me {
            fn default_max_relative() -> Self::Epsilon {
                f64::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                ::approx::RelativeEq::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }
    };
}

/// Same-unit addition and subtraction.
macro_rules! additive {
    ($me:ident) => {
        impl ::std::ops::Add for $me {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                $me(self.0 + rhs.0)
            }
        }

        impl ::std::ops::AddAssign for $me {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl ::std::ops::Sub for $me {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                $me(self.0 - rhs.0)
            }
        }

        impl ::std::ops::SubAssign for $me {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl ::std::iter::Sum for $me {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                $me(iter.map(|item| item.0).sum())
            }
        }
    };
}

/// A logarithmic level `$me` shifted by a relative level `$by` stays a `$me`.
macro_rules! offset {
    ($me:ident, $by:ident) => {
        impl ::std::ops::Add<$by> for $me {
            type Output = Self;

            fn add(self, rhs: $by) -> Self::Output {
                $me(self.0 + rhs.value())
            }
        }

        impl ::std::ops::AddAssign<$by> for $me {
            fn add_assign(&mut self, rhs: $by) {
                self.0 += rhs.value();
            }
        }

        impl ::std::ops::Sub<$by> for $me {
            type Output = Self;

            fn sub(self, rhs: $by) -> Self::Output {
                $me(self.0 - rhs.value())
            }
        }

        impl ::std::ops::SubAssign<$by> for $me {
            fn sub_assign(&mut self, rhs: $by) {
                self.0 -= rhs.value();
            }
        }
    };
}

macro_rules! linear_conversion {
    ($factor:expr, $from:ident, $into:ident) => {
        impl std::convert::From<$from> for $into {
            fn from(value: $from) -> Self {
                let converted = $factor * value.value();
                $into::new(converted)
            }
        }

        impl ::std::ops::Add<$from> for $into {
            type Output = Self;

            fn add(self, rhs: $from) -> Self::Output {
                let rhs: $into = rhs.into();
                self + rhs
            }
        }

        impl ::std::ops::Sub<$from> for $into {
            type Output = Self;

            fn sub(self, rhs: $from) -> Self::Output {
                let rhs: $into = rhs.into();
                self - rhs
            }
        }
    };
}

pub(crate) use additive;
pub(crate) use linear_conversion;
pub(crate) use offset;
pub(crate) use unit;
