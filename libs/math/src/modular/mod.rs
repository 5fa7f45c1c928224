//! Modular arithmetic over arbitrary precision integers.

pub mod gcd;
pub mod power;
pub mod reduce;

pub use gcd::*;
pub use power::*;
pub use reduce::*;
