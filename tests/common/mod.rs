//! Shared test utilities for fbhub integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All builders anchor timestamps relative to a caller
//! supplied `now` so tests stay deterministic.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
