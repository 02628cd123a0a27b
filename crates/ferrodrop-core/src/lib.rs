//! Ferrodrop Core
//!
//! Shared building blocks for the Ferrodrop crates: fast hash collections,
//! 2D math, rectangles, logging setup and profiling scopes.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
