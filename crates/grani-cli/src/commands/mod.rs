//! CLI command implementations.

pub mod classify;
pub mod common;
pub mod gradient;
pub mod vqe;
