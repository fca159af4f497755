//! Movement/Interaction Tick
//!
//! One fixed-rate step of the playable map: axis-separated movement against
//! the collision set, then the proximity-prompt recompute. Every branch is
//! total; the step cannot fail.

use crate::core::vec2::Vec2;
use crate::game::collision::collides;
use crate::game::input::MovementKeys;
use crate::game::avatar::Direction;
use crate::game::roster::Roster;
use crate::game::state::{GameState, InteractionPrompt, PromptTarget};
use crate::game::world::house_center;
use crate::MOVE_SPEED;

/// Per-axis proximity threshold for interaction prompts (strict `<`).
pub const PROMPT_RANGE: f32 = 48.0;

/// How far above the house anchor the prompt bubble renders.
const PROMPT_LIFT: f32 = 40.0;

/// What one tick produced for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct TickResult {
    /// Committed position after this tick
    pub position: Vec2,
    /// Whether the position changed this tick
    pub moved: bool,
    /// Whether any movement key was held
    pub is_moving: bool,
    /// Facing direction for sprite selection
    pub direction: Direction,
    /// Active proximity prompt, if any
    pub prompt: Option<InteractionPrompt>,
}

/// Run one movement/interaction tick.
///
/// Each axis resolves to a single candidate step, Y before X, so a diagonal
/// move blocked on one axis still slides along the other. Opposite keys held
/// together resolve to the higher-precedence key (up over down, left over
/// right) instead of cancelling. Perpendicular keys move both axes by the
/// full [`MOVE_SPEED`] step; diagonal movement is intentionally faster than
/// single-axis movement.
pub fn step(
    state: &mut GameState,
    keys: MovementKeys,
    roster: &Roster,
    player_house_anchor: Vec2,
) -> TickResult {
    // House set is re-derived every tick; the roster is small and this
    // avoids staleness when placements change.
    let mut anchors = roster.anchors();
    anchors.push(player_house_anchor);

    let mut position = state.position;

    // 1. Axis-separated movement, one candidate per axis. Key precedence
    //    within an axis matches MovementKeys::direction: up over down,
    //    left over right.
    if keys.up || keys.down {
        let dy = if keys.up { -MOVE_SPEED } else { MOVE_SPEED };
        let candidate = Vec2::new(position.x, position.y + dy);
        if !collides(candidate, &anchors) {
            position.y = candidate.y;
        }
    }
    if keys.left || keys.right {
        let dx = if keys.left { -MOVE_SPEED } else { MOVE_SPEED };
        let candidate = Vec2::new(position.x + dx, position.y);
        if !collides(candidate, &anchors) {
            position.x = candidate.x;
        }
    }

    // 2. Commit only on change.
    let moved = position != state.position;
    if moved {
        state.position = position;
    }

    // 3. Movement state for sprite selection.
    state.is_moving = keys.any();
    state.direction = keys.direction();

    // 4. Prompt recompute from the committed position.
    state.prompt = compute_prompt(position, roster, player_house_anchor);

    TickResult {
        position,
        moved,
        is_moving: state.is_moving,
        direction: state.direction,
        prompt: state.prompt.clone(),
    }
}

/// Find the interaction prompt for the actor at `position`, if any.
///
/// The player's own board wins when simultaneously in range of it and a
/// teammate's; otherwise the first in-range teammate in roster order wins.
fn compute_prompt(
    position: Vec2,
    roster: &Roster,
    player_house_anchor: Vec2,
) -> Option<InteractionPrompt> {
    if in_prompt_range(position, player_house_anchor) {
        return Some(InteractionPrompt {
            target: PromptTarget::OwnBoard,
            message: "Press E to update your board".to_string(),
            anchor: prompt_anchor(player_house_anchor),
        });
    }

    for teammate in roster.iter() {
        if in_prompt_range(position, teammate.house_anchor) {
            return Some(InteractionPrompt {
                target: PromptTarget::Teammate(teammate.id),
                message: format!("Press E to view {}'s board", teammate.name),
                anchor: prompt_anchor(teammate.house_anchor),
            });
        }
    }

    None
}

/// Strict per-axis range test against the house's visual center.
#[inline]
fn in_prompt_range(position: Vec2, anchor: Vec2) -> bool {
    let (dx, dy) = position.axis_delta(house_center(anchor));
    dx < PROMPT_RANGE && dy < PROMPT_RANGE
}

#[inline]
fn prompt_anchor(anchor: Vec2) -> Vec2 {
    Vec2::new(anchor.x, anchor.y - PROMPT_LIFT)
}
