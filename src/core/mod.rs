//! Core geometry primitives.
//!
//! Small, dependency-free building blocks shared by the whole game core.

pub mod vec2;

pub use vec2::{Rect, Vec2};
