//! Game Logic Module
//!
//! All simulation and store code. Pure and deterministic given inputs.
//!
//! ## Module Structure
//!
//! - `world`: Static map geometry, obstacles, house footprints
//! - `collision`: Axis-aligned collision queries against the world
//! - `input`: Key normalization, press/held tracking, movement resolution
//! - `avatar`: Avatar catalog and sprite sheet metadata
//! - `state`: Player state, overlays, calendar
//! - `activity`: Activity board store
//! - `roster`: Teammates, house progression, leaderboard
//! - `tick`: Per-tick movement, collision, prompt detection
//! - `dispatch`: Action keys to overlay transitions
//! - `events`: Announcements emitted by the session

use thiserror::Error;
use uuid::Uuid;

pub mod activity;
pub mod avatar;
pub mod collision;
pub mod dispatch;
pub mod events;
pub mod input;
pub mod roster;
pub mod state;
pub mod tick;
pub mod world;

// Re-export key types
pub use activity::{Activity, ActivityCategory, ActivityStore, Milestone, NewActivity};
pub use avatar::{AvatarKind, Direction};
pub use events::{GameEvent, OverlayKind};
pub use input::{ActionKey, InputTracker, KeyPress, MovementKeys};
pub use roster::{Roster, Teammate, TeammateId};
pub use state::{GameState, InteractionPrompt, PromptTarget};
pub use tick::TickResult;

/// Errors from the activity and roster stores.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No activity with this id exists in the store.
    #[error("activity {0} not found")]
    ActivityNotFound(Uuid),

    /// No teammate with this id exists in the roster.
    #[error("teammate {0} not found")]
    TeammateNotFound(TeammateId),

    /// Activity text must be non-empty after trimming.
    #[error("activity text cannot be empty")]
    EmptyActivityText,
}
