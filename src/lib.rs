//! # spline_path
//!
//! A small library for planning quintic spline paths in Rust.
//!
//! Given an ordered sequence of 2D knots and the tangent (and optionally
//! curvature) direction at each one, the library solves one quintic
//! segment per adjacent knot pair, chains the segments into a single
//! twice-differentiable curve and exposes that curve through a uniform
//! "distance traveled" coordinate instead of per-segment parameters.
//!
//! This library provides the following modules:
//! - `polynomial` for degree-5 polynomials with closed-form differentiation.
//! - `knot` for the points the path passes through and their boundary data.
//! - `segment` for the quintic curve piece spanning two adjacent knots.
//! - `path` for chaining segments and dispatching distance-traveled queries.
//! - `path_builder` for accumulating knots and emitting a validated path.
//! - `error` for everything the above reports to the caller.

pub mod error;
pub mod knot;
pub mod path;
pub mod path_builder;
pub mod polynomial;
pub mod segment;
mod arc_length;

// Re-export main structs for convenience:
pub use error::*;
pub use knot::*;
pub use path::*;
pub use path_builder::*;
pub use polynomial::*;
pub use segment::*;
