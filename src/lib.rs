//! Math primitives for the Ember engine.

#[macro_use]
mod macros;

pub mod angle;
pub mod consts;
pub mod matrix;
pub mod quaternion;
pub mod vector;
