//! Cryptographically secure random sampling.

pub mod entropy;
pub mod sampler;

pub use entropy::*;
pub use sampler::*;
