//! Connectivity engine.
//!
//! Answers "can a token walk from A to B" for the current tile layout. Cheap
//! enough (at most 25 cells) that routes are recomputed on demand and never
//! cached.

pub mod search;

pub use search::{find_path, Route};
