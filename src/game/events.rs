//! Game Events
//!
//! Events produced for the presentation layer when overlay state changes or
//! activities are logged. Movement and prompt updates travel on the per-tick
//! [`TickResult`](crate::game::tick::TickResult) instead.

use serde::{Serialize, Deserialize};

use crate::game::roster::TeammateId;

/// The overlays the dispatcher manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    /// A teammate's board viewer
    TeammateBoard,
    /// The player's own board editor
    ActivityForm,
    /// The team leaderboard
    Leaderboard,
}

/// State change announced to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A teammate's board viewer was opened
    BoardViewerOpened {
        /// Whose board
        teammate: TeammateId,
    },

    /// The player's own board editor was opened
    FormOpened,

    /// An overlay was closed
    OverlayClosed {
        /// Which overlay
        overlay: OverlayKind,
    },

    /// The leaderboard was toggled
    LeaderboardToggled {
        /// New open state
        open: bool,
    },

    /// The player submitted activities for the week
    ActivitiesLogged {
        /// Week label the entries were stamped with
        week: String,
        /// How many entries were logged
        count: usize,
    },
}
