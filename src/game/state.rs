//! Shared Game State
//!
//! The single mutable state a session owns: the actor's committed position,
//! overlay flags, the week calendar, and the current interaction prompt.
//! The tick loop is the sole writer of position and prompt; the interaction
//! dispatcher is the sole writer of the overlay flags.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::avatar::Direction;
use crate::game::roster::TeammateId;

/// Where the actor starts a fresh session.
pub const SPAWN_POSITION: Vec2 = Vec2::new(650.0, 300.0);

/// Maximum house level.
pub const MAX_HOUSE_LEVEL: u8 = 3;

/// Working days per week (Monday..Friday).
pub const DAYS_PER_WEEK: u8 = 5;

/// What a live interaction prompt points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptTarget {
    /// The player's own activity board
    OwnBoard,
    /// A teammate's board
    Teammate(TeammateId),
}

/// Proximity prompt shown above a house, recomputed every tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionPrompt {
    /// What pressing interact would open
    pub target: PromptTarget,
    /// Prompt text, e.g. "Press E to view Alex's board"
    pub message: String,
    /// Where the prompt bubble renders (40 px above the house anchor)
    pub anchor: Vec2,
}

/// Mutable session state shared between the tick loop and the dispatcher.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Committed actor position
    pub position: Vec2,
    /// Facing direction, for sprite selection
    pub direction: Direction,
    /// Whether any movement key was held last tick
    pub is_moving: bool,
    /// Active proximity prompt, if any
    pub prompt: Option<InteractionPrompt>,
    /// Own activity board editor open
    pub is_form_open: bool,
    /// Leaderboard overlay open
    pub is_leaderboard_open: bool,
    /// Teammate whose board viewer is open
    pub viewing_teammate: Option<TeammateId>,
    /// Current week label, stamped verbatim onto logged activities
    pub current_week: String,
    /// Day of week, 1..=5 (Monday..Friday)
    pub day_of_week: u8,
    /// Player house level, 1..=3
    pub player_house_level: u8,
}

impl GameState {
    /// Fresh state at the spawn point, week 1, Friday (log day).
    pub fn new() -> Self {
        Self {
            position: SPAWN_POSITION,
            direction: Direction::Down,
            is_moving: false,
            prompt: None,
            is_form_open: false,
            is_leaderboard_open: false,
            viewing_teammate: None,
            current_week: "Week 1".to_string(),
            day_of_week: DAYS_PER_WEEK,
            player_house_level: 1,
        }
    }

    /// Advance one working day, rolling the week label past Friday.
    pub fn advance_day(&mut self) {
        if self.day_of_week < DAYS_PER_WEEK {
            self.day_of_week += 1;
        } else {
            self.day_of_week = 1;
            let next = self
                .current_week
                .rsplit(' ')
                .next()
                .and_then(|n| n.parse::<u32>().ok())
                .map(|n| n + 1)
                .unwrap_or(1);
            self.current_week = format!("Week {}", next);
        }
    }

    /// Name of the current working day.
    pub fn day_name(&self) -> &'static str {
        match self.day_of_week {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            _ => "Friday",
        }
    }

    /// Raise the player's house level, capped at [`MAX_HOUSE_LEVEL`].
    pub fn upgrade_house(&mut self) {
        if self.player_house_level < MAX_HOUSE_LEVEL {
            self.player_house_level += 1;
        }
    }

    /// True if any overlay (viewer, editor, leaderboard) is open.
    pub fn any_overlay_open(&self) -> bool {
        self.viewing_teammate.is_some() || self.is_form_open || self.is_leaderboard_open
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::new();
        assert_eq!(state.position, SPAWN_POSITION);
        assert_eq!(state.current_week, "Week 1");
        assert_eq!(state.day_of_week, 5);
        assert!(!state.any_overlay_open());
        assert!(state.prompt.is_none());
    }

    #[test]
    fn test_week_rollover() {
        let mut state = GameState::new();
        assert_eq!(state.day_name(), "Friday");

        state.advance_day();
        assert_eq!(state.day_of_week, 1);
        assert_eq!(state.current_week, "Week 2");
        assert_eq!(state.day_name(), "Monday");

        for _ in 0..4 {
            state.advance_day();
        }
        assert_eq!(state.day_of_week, 5);
        assert_eq!(state.current_week, "Week 2");

        state.advance_day();
        assert_eq!(state.current_week, "Week 3");
    }

    #[test]
    fn test_house_level_cap() {
        let mut state = GameState::new();
        state.upgrade_house();
        state.upgrade_house();
        state.upgrade_house();
        state.upgrade_house();
        assert_eq!(state.player_house_level, MAX_HOUSE_LEVEL);
    }
}
