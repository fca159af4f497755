//! Game Session Management
//!
//! Owns the shared simulation state and drives a fixed 30Hz tick loop on a
//! background task. Key events and activity submissions arrive between ticks;
//! the loop only ever reads the tracker snapshot, so input and simulation
//! never race.

use std::sync::Arc;
use tokio::sync::{broadcast, watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::core::vec2::Vec2;
use crate::game::activity::{ActivityStore, NewActivity};
use crate::game::avatar::AvatarKind;
use crate::game::dispatch::handle_action;
use crate::game::events::{GameEvent, OverlayKind};
use crate::game::input::{ActionKey, InputTracker, KeyPress};
use crate::game::roster::Roster;
use crate::game::state::{GameState, SPAWN_POSITION};
use crate::game::world::PLAYER_HOUSE_ANCHOR;
use crate::game::{tick, StoreError};
use crate::TICK_INTERVAL;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Display name, stamped onto logged activities.
    pub player_name: String,
    /// Player avatar.
    pub avatar: AvatarKind,
    /// Where the actor starts.
    pub spawn: Vec2,
    /// Anchor of the player's own house.
    pub player_house_anchor: Vec2,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            avatar: AvatarKind::Villager,
            spawn: SPAWN_POSITION,
            player_house_anchor: PLAYER_HOUSE_ANCHOR,
        }
    }
}

/// Session errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    /// The tick loop is already running.
    #[error("Session already running")]
    AlreadyRunning,

    /// The tick loop is not running.
    #[error("Session not running")]
    NotRunning,
}

/// Handle to the running tick loop task.
struct LoopHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// A running game session for one player.
pub struct GameSession {
    /// Session configuration.
    pub config: SessionConfig,
    state: Arc<RwLock<GameState>>,
    input: Arc<RwLock<InputTracker>>,
    roster: Arc<RwLock<Roster>>,
    activities: Arc<RwLock<ActivityStore>>,
    event_tx: broadcast::Sender<GameEvent>,
    loop_handle: Option<LoopHandle>,
}

impl GameSession {
    /// Create a session with the seeded roster and board history.
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self::with_roster(config, Roster::seeded());
        session.activities = Arc::new(RwLock::new(ActivityStore::seeded()));
        session
    }

    /// Create a session over an explicit roster, with an empty board store.
    pub fn with_roster(config: SessionConfig, roster: Roster) -> Self {
        let (event_tx, _) = broadcast::channel(256);

        let mut state = GameState::new();
        state.position = config.spawn;

        Self {
            config,
            state: Arc::new(RwLock::new(state)),
            input: Arc::new(RwLock::new(InputTracker::new())),
            roster: Arc::new(RwLock::new(roster)),
            activities: Arc::new(RwLock::new(ActivityStore::new())),
            event_tx,
            loop_handle: None,
        }
    }

    /// Start the 30Hz tick loop on a background task.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.loop_handle.is_some() {
            return Err(SessionError::AlreadyRunning);
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let state = self.state.clone();
        let input = self.input.clone();
        let roster = self.roster.clone();
        let house_anchor = self.config.player_house_anchor;

        let task = tokio::spawn(async move {
            let mut tick_interval = interval(TICK_INTERVAL);
            tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = tick_interval.tick() => {
                        let keys = input.read().await.movement();
                        let roster_guard = roster.read().await;
                        let mut state_guard = state.write().await;
                        tick::step(&mut state_guard, keys, &roster_guard, house_anchor);
                    }
                }
            }
            debug!("tick loop stopped");
        });

        info!(player = %self.config.player_name, "session started");
        self.loop_handle = Some(LoopHandle { shutdown_tx, task });
        Ok(())
    }

    /// Stop the tick loop. No tick commits after this returns.
    pub async fn stop(&mut self) -> Result<(), SessionError> {
        let handle = self.loop_handle.take().ok_or(SessionError::NotRunning)?;
        let _ = handle.shutdown_tx.send(true);
        let _ = handle.task.await;
        info!(player = %self.config.player_name, "session stopped");
        Ok(())
    }

    /// Whether the tick loop is running.
    pub fn is_running(&self) -> bool {
        self.loop_handle.is_some()
    }

    /// Feed a key-down event.
    ///
    /// Movement keys are picked up by the next tick. Action keys fire here,
    /// on the fresh press only; the resulting event (if any) is broadcast and
    /// returned.
    pub async fn key_down(&self, key: &str) -> Option<GameEvent> {
        let press = self.input.write().await.key_down(key);
        if press != KeyPress::Pressed {
            return None;
        }

        let action = ActionKey::from_key(&key.to_ascii_lowercase())?;
        let mut state = self.state.write().await;
        let event = handle_action(&mut state, action)?;
        let _ = self.event_tx.send(event.clone());
        Some(event)
    }

    /// Feed a key-up event.
    pub async fn key_up(&self, key: &str) {
        self.input.write().await.key_up(key);
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    /// Log a batch of activities from the board editor.
    ///
    /// Entries are stamped with the current week and the player's name. On
    /// success the editor closes and the count is returned; on the first bad
    /// entry nothing before it is rolled back, matching store-per-entry
    /// semantics.
    pub async fn submit_activities(
        &self,
        entries: Vec<NewActivity>,
    ) -> Result<usize, StoreError> {
        let week = self.state.read().await.current_week.clone();
        let count = entries.len();

        let (before, after) = {
            let mut store = self.activities.write().await;
            let before = store.count_by(&self.config.player_name);
            for entry in entries {
                store.add(entry, &week, &self.config.player_name)?;
            }
            (before, store.count_by(&self.config.player_name))
        };

        let mut state = self.state.write().await;
        // Every 10th logged activity upgrades the player's house, cap 3
        for _ in (before / 10)..(after / 10) {
            state.upgrade_house();
        }
        if state.is_form_open {
            state.is_form_open = false;
            let _ = self.event_tx.send(GameEvent::OverlayClosed {
                overlay: OverlayKind::ActivityForm,
            });
        }
        drop(state);

        info!(week = %week, count, "activities logged");
        let _ = self.event_tx.send(GameEvent::ActivitiesLogged { week, count });
        Ok(count)
    }

    /// Clone of the current game state.
    pub async fn snapshot(&self) -> GameState {
        self.state.read().await.clone()
    }

    /// Current actor position.
    pub async fn position(&self) -> Vec2 {
        self.state.read().await.position
    }

    /// Clone of the current roster.
    pub async fn roster(&self) -> Roster {
        self.roster.read().await.clone()
    }

    /// Clone of the activity store.
    pub async fn activities(&self) -> ActivityStore {
        self.activities.read().await.clone()
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(handle) = self.loop_handle.take() {
            handle.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::activity::ActivityCategory;
    use crate::MOVE_SPEED;
    use std::time::Duration;

    fn test_session() -> GameSession {
        GameSession::new(SessionConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_held_key_moves_actor() {
        let mut session = test_session();
        let start = session.position().await;

        session.start().unwrap();
        session.key_down("d").await;
        tokio::time::sleep(TICK_INTERVAL * 10).await;
        session.key_up("d").await;
        session.stop().await.unwrap();

        let end = session.position().await;
        assert!(end.x > start.x, "actor should have moved right");
        assert_eq!(end.y, start.y);
        // Each tick advances one full step
        assert_eq!((end.x - start.x) % MOVE_SPEED, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_simulation() {
        let mut session = test_session();
        session.start().unwrap();
        session.key_down("d").await;
        tokio::time::sleep(TICK_INTERVAL * 5).await;
        session.stop().await.unwrap();

        let frozen = session.position().await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(session.position().await, frozen);
    }

    #[tokio::test]
    async fn test_double_start_rejected() {
        let mut session = test_session();
        session.start().unwrap();
        assert!(matches!(session.start(), Err(SessionError::AlreadyRunning)));
        session.stop().await.unwrap();
        assert!(matches!(session.stop().await, Err(SessionError::NotRunning)));
    }

    #[tokio::test]
    async fn test_leaderboard_key_toggles() {
        let session = test_session();

        let event = session.key_down("l").await;
        assert_eq!(event, Some(GameEvent::LeaderboardToggled { open: true }));
        assert!(session.snapshot().await.is_leaderboard_open);

        // Auto-repeat does not re-fire
        assert_eq!(session.key_down("l").await, None);

        session.key_up("l").await;
        let event = session.key_down("l").await;
        assert_eq!(event, Some(GameEvent::LeaderboardToggled { open: false }));
    }

    #[tokio::test]
    async fn test_escape_with_nothing_open_is_silent() {
        let session = test_session();
        let mut events = session.subscribe_events();

        assert_eq!(session.key_down("Escape").await, None);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_activities_stamps_and_closes_form() {
        let session = test_session();
        {
            let mut state = session.state.write().await;
            state.is_form_open = true;
        }
        let mut events = session.subscribe_events();

        let entries = vec![
            NewActivity {
                text: "Ship the importer".to_string(),
                category: ActivityCategory::Project,
                milestone: None,
                priority: 1,
            },
            NewActivity {
                text: "Pair with Taylor".to_string(),
                category: ActivityCategory::AdHoc,
                milestone: None,
                priority: 2,
            },
        ];
        let count = session.submit_activities(entries).await.unwrap();
        assert_eq!(count, 2);

        let state = session.snapshot().await;
        assert!(!state.is_form_open);

        let store = session.activities().await;
        assert_eq!(store.count_by("Player"), 2);
        for activity in store.board_for("Player", "Week 1") {
            assert_eq!(activity.week, "Week 1");
            assert_eq!(activity.created_by, "Player");
        }

        assert_eq!(
            events.recv().await.unwrap(),
            GameEvent::OverlayClosed { overlay: OverlayKind::ActivityForm }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            GameEvent::ActivitiesLogged { week: "Week 1".to_string(), count: 2 }
        );
    }

    #[tokio::test]
    async fn test_tenth_activity_upgrades_player_house() {
        let session = test_session();
        let entry = |n: usize| NewActivity {
            text: format!("Task {}", n),
            category: ActivityCategory::Routine,
            milestone: None,
            priority: n as u32,
        };

        session.submit_activities((0..9).map(entry).collect()).await.unwrap();
        assert_eq!(session.snapshot().await.player_house_level, 1);

        session.submit_activities(vec![entry(9)]).await.unwrap();
        assert_eq!(session.snapshot().await.player_house_level, 2);

        // A large batch crossing two thresholds upgrades to the cap and stays
        session.submit_activities((10..35).map(entry).collect()).await.unwrap();
        assert_eq!(session.snapshot().await.player_house_level, 3);
    }

    #[tokio::test]
    async fn test_submit_empty_text_rejected() {
        let session = test_session();
        let entries = vec![NewActivity {
            text: "   ".to_string(),
            category: ActivityCategory::Routine,
            milestone: None,
            priority: 1,
        }];
        let result = session.submit_activities(entries).await;
        assert_eq!(result, Err(StoreError::EmptyActivityText));
    }
}
