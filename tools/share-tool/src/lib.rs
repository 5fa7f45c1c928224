//! Operator tool to split secrets into shares and reconstruct them from YAML configs.

pub mod config;
pub mod runner;
