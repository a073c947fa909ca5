//! Numeric `f32` constants.

pub use std::f32::consts::*;

pub const TWO_PI: f32 = TAU;
pub const EPSILON: f32 = ::std::primitive::f32::EPSILON;
pub const INFINITY: f32 = ::std::primitive::f32::INFINITY;
