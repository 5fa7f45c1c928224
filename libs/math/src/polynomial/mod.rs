//! Polynomial operations

pub mod lagrange;
pub mod ops;
pub mod point;
pub mod polynomial;

pub use lagrange::*;
#[allow(unused_imports)]
pub use ops::*;
pub use point::*;
pub use polynomial::*;
