//! Shift engine.
//!
//! Inserting the floating tile slides one movable row or column by a single
//! cell. The engine is stateless: a [`ShiftDescriptor`] is derived from the
//! insertion cell and the forbidden origin, then applied in place to any
//! collection of [`Positioned`](crate::board::Positioned) pieces.
//!
//! - Tiles use [`EdgeRule::Evict`]: the tile pushed off the far end lands on
//!   the border and becomes the next floating tile.
//! - Tokens and goals use [`EdgeRule::Wrap`]: they re-enter on the opposite
//!   edge.

pub mod descriptor;

pub use descriptor::{Axis, Displacement, Displacements, EdgeRule, ShiftDescriptor};
