//! Interaction Dispatch
//!
//! Turns edge-triggered action keys into overlay state changes. Interact
//! acts on the prompt target the tick loop computed; it never re-scans the
//! roster, so the own-board priority decided there carries through.

use tracing::debug;

use crate::game::events::{GameEvent, OverlayKind};
use crate::game::input::ActionKey;
use crate::game::state::{GameState, PromptTarget};

/// Apply one fresh action-key press to the overlay state.
///
/// Returns the event to announce, or `None` when nothing changed (no prompt
/// active, nothing to close, overlay already in the requested state).
pub fn handle_action(state: &mut GameState, action: ActionKey) -> Option<GameEvent> {
    match action {
        ActionKey::Interact => handle_interact(state),
        ActionKey::Close => handle_close(state),
        ActionKey::Leaderboard => {
            state.is_leaderboard_open = !state.is_leaderboard_open;
            debug!(open = state.is_leaderboard_open, "leaderboard toggled");
            Some(GameEvent::LeaderboardToggled {
                open: state.is_leaderboard_open,
            })
        }
    }
}

/// Open the overlay the active prompt points at. One overlay per press.
fn handle_interact(state: &mut GameState) -> Option<GameEvent> {
    let prompt = state.prompt.as_ref()?;

    match prompt.target {
        PromptTarget::Teammate(id) => {
            if state.viewing_teammate == Some(id) {
                return None;
            }
            state.viewing_teammate = Some(id);
            debug!(teammate = %id, "board viewer opened");
            Some(GameEvent::BoardViewerOpened { teammate: id })
        }
        PromptTarget::OwnBoard => {
            if state.is_form_open {
                return None;
            }
            state.is_form_open = true;
            debug!("activity form opened");
            Some(GameEvent::FormOpened)
        }
    }
}

/// Close exactly one overlay: viewer first, then editor, then leaderboard.
fn handle_close(state: &mut GameState) -> Option<GameEvent> {
    if state.viewing_teammate.is_some() {
        state.viewing_teammate = None;
        return Some(GameEvent::OverlayClosed {
            overlay: OverlayKind::TeammateBoard,
        });
    }
    if state.is_form_open {
        state.is_form_open = false;
        return Some(GameEvent::OverlayClosed {
            overlay: OverlayKind::ActivityForm,
        });
    }
    if state.is_leaderboard_open {
        state.is_leaderboard_open = false;
        return Some(GameEvent::OverlayClosed {
            overlay: OverlayKind::Leaderboard,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::game::roster::TeammateId;
    use crate::game::state::InteractionPrompt;

    fn prompt_for(target: PromptTarget) -> InteractionPrompt {
        InteractionPrompt {
            target,
            message: String::new(),
            anchor: Vec2::ZERO,
        }
    }

    #[test]
    fn test_interact_without_prompt_is_noop() {
        let mut state = GameState::new();
        assert_eq!(handle_action(&mut state, ActionKey::Interact), None);
        assert!(!state.any_overlay_open());
    }

    #[test]
    fn test_interact_opens_teammate_viewer() {
        let id = TeammateId::generate();
        let mut state = GameState::new();
        state.prompt = Some(prompt_for(PromptTarget::Teammate(id)));

        let event = handle_action(&mut state, ActionKey::Interact);
        assert_eq!(event, Some(GameEvent::BoardViewerOpened { teammate: id }));
        assert_eq!(state.viewing_teammate, Some(id));
        assert!(!state.is_form_open, "must not open the editor as well");

        // Second press while already viewing: no new event
        assert_eq!(handle_action(&mut state, ActionKey::Interact), None);
    }

    #[test]
    fn test_interact_opens_own_editor() {
        let mut state = GameState::new();
        state.prompt = Some(prompt_for(PromptTarget::OwnBoard));

        let event = handle_action(&mut state, ActionKey::Interact);
        assert_eq!(event, Some(GameEvent::FormOpened));
        assert!(state.is_form_open);
        assert_eq!(state.viewing_teammate, None);
    }

    #[test]
    fn test_close_priority_order() {
        let id = TeammateId::generate();
        let mut state = GameState::new();
        state.viewing_teammate = Some(id);
        state.is_form_open = true;
        state.is_leaderboard_open = true;

        // Viewer first
        let event = handle_action(&mut state, ActionKey::Close);
        assert_eq!(
            event,
            Some(GameEvent::OverlayClosed { overlay: OverlayKind::TeammateBoard })
        );
        assert_eq!(state.viewing_teammate, None);
        assert!(state.is_form_open, "lower-priority overlays stay open");
        assert!(state.is_leaderboard_open);

        // Then the editor
        let event = handle_action(&mut state, ActionKey::Close);
        assert_eq!(
            event,
            Some(GameEvent::OverlayClosed { overlay: OverlayKind::ActivityForm })
        );
        assert!(!state.is_form_open);
        assert!(state.is_leaderboard_open);

        // Then the leaderboard
        let event = handle_action(&mut state, ActionKey::Close);
        assert_eq!(
            event,
            Some(GameEvent::OverlayClosed { overlay: OverlayKind::Leaderboard })
        );
        assert!(!state.any_overlay_open());

        // Nothing left to close
        assert_eq!(handle_action(&mut state, ActionKey::Close), None);
    }

    #[test]
    fn test_leaderboard_toggles_unconditionally() {
        let mut state = GameState::new();
        state.is_form_open = true;

        let event = handle_action(&mut state, ActionKey::Leaderboard);
        assert_eq!(event, Some(GameEvent::LeaderboardToggled { open: true }));
        assert!(state.is_leaderboard_open);
        assert!(state.is_form_open, "coexists with other overlays");

        let event = handle_action(&mut state, ActionKey::Leaderboard);
        assert_eq!(event, Some(GameEvent::LeaderboardToggled { open: false }));
        assert!(!state.is_leaderboard_open);
    }
}
