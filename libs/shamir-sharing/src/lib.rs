//! Shamir's secret sharing over a prime field.
//!
//! A secret is hidden as the constant term of a random polynomial of degree `threshold - 1`. Each
//! share is a point of that polynomial taken at a random abscissa, so any `threshold` shares
//! determine the polynomial, and its constant term, while fewer reveal nothing about it.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod protocol;
pub mod secret_sharer;
