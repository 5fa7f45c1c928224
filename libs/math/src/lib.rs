//! Math library for prime field arithmetic over big integers, secure sampling, and polynomials.
//!
//! Every operation takes the field modulus explicitly; there is no global field context. The
//! modulus is expected to be prime but this is never checked.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod errors;
pub mod modular;
pub mod polynomial;
pub mod random;
