//! Different units for angles.

use crate::consts::f32::{FRAC_1_PI, PI};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32;
}

// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Degrees {
    fn value(self) -> f32 {
        self.0
    }
}

impl Radians {
    fn value(self) -> f32 {
        self.0
    }
}

impl Angle for Degrees {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians::from(self)
    }

    fn degrees(self) -> f32 {
        self.value()
    }

    fn radians(self) -> f32 {
        Radians::from(self).value()
    }
}

impl Angle for Radians {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f32 {
        Degrees::from(self).value()
    }

    fn radians(self) -> f32 {
        self.value()
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(radians_to_degrees(rad.value()))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(degrees_to_radians(deg.value()))
    }
}

impl Add for Degrees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Add for Radians {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Add<Radians> for Degrees {
    type Output = Self;
    fn add(self, rhs: Radians) -> Self {
        Self(self.value() + Self::from(rhs).value())
    }
}

impl Add<Degrees> for Radians {
    type Output = Self;
    fn add(self, rhs: Degrees) -> Self {
        Self(self.value() + Self::from(rhs).value())
    }
}

impl Sub for Degrees {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Sub for Radians {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Sub<Radians> for Degrees {
    type Output = Self;
    fn sub(self, rhs: Radians) -> Self {
        Self(self.value() - Self::from(rhs).value())
    }
}

impl Sub<Degrees> for Radians {
    type Output = Self;
    fn sub(self, rhs: Degrees) -> Self {
        Self(self.value() - Self::from(rhs).value())
    }
}

impl Mul<f32> for Degrees {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.value() * rhs)
    }
}

impl Mul<f32> for Radians {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.value() * rhs)
    }
}

impl Div<f32> for Degrees {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.value() / rhs)
    }
}

impl Div<f32> for Radians {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.value() / rhs)
    }
}

impl PartialEq<Radians> for Degrees {
    fn eq(&self, rhs: &Radians) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl PartialEq<Degrees> for Radians {
    fn eq(&self, rhs: &Degrees) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl PartialOrd<Radians> for Degrees {
    fn partial_cmp(&self, rhs: &Radians) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl PartialOrd<Degrees> for Radians {
    fn partial_cmp(&self, rhs: &Degrees) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl_abs_diff_eq!(Degrees, |a, b, epsilon| {
    f32::abs_diff_eq(&a.value(), &b.value(), epsilon)
});

impl_relative_eq!(Degrees, |a, b, epsilon, max_relative| {
    f32::relative_eq(&a.value(), &b.value(), epsilon, max_relative)
});

impl_abs_diff_eq!(Radians, |a, b, epsilon| {
    f32::abs_diff_eq(&a.value(), &b.value(), epsilon)
});

impl_relative_eq!(Radians, |a, b, epsilon, max_relative| {
    f32::relative_eq(&a.value(), &b.value(), epsilon, max_relative)
});

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 * FRAC_1_PI)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}
