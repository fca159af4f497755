//! # TeamTown Core
//!
//! Simulation core for TeamTown, a top-down neighborhood where a team logs
//! weekly activities by walking up to each other's houses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TEAMTOWN CORE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Geometry primitives                       │
//! │  └── vec2.rs     - 2D points and axis-aligned rectangles     │
//! │                                                              │
//! │  game/           - Simulation and stores (deterministic)     │
//! │  ├── world.rs    - Map geometry, obstacles, houses           │
//! │  ├── collision.rs- Axis-aligned collision queries            │
//! │  ├── input.rs    - Key tracking and movement resolution      │
//! │  ├── avatar.rs   - Avatar catalog and sprite metadata        │
//! │  ├── state.rs    - Player state, overlays, calendar          │
//! │  ├── activity.rs - Activity board store                      │
//! │  ├── roster.rs   - Teammates, houses, leaderboard            │
//! │  ├── tick.rs     - Per-tick movement and prompt detection    │
//! │  ├── dispatch.rs - Action keys to overlay transitions        │
//! │  └── events.rs   - Announcements for the presentation layer  │
//! │                                                              │
//! │  session.rs      - Tick loop lifecycle and input routing     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Everything under `game/` is pure: given the same key state and roster,
//! a tick commits the same position and prompt on any platform. Timing
//! lives entirely in [`session`], which drives [`game::tick::step`] at
//! [`TICK_RATE`] Hz from a background task.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

use std::time::Duration;

pub mod core;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::vec2::{Rect, Vec2};
pub use game::input::{ActionKey, InputTracker, MovementKeys};
pub use game::state::{GameState, PromptTarget};
pub use game::tick::TickResult;
pub use session::{GameSession, SessionConfig, SessionError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 30;

/// Interval between ticks (33ms, rounded down from 1000/30)
pub const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Distance moved along one axis per tick, in world pixels
pub const MOVE_SPEED: f32 = 5.0;
