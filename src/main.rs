//! TeamTown Demo
//!
//! Drives a short scripted session: walk around the neighborhood, toggle the
//! leaderboard, open the board editor, and log a week of activities.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use teamtown::game::activity::{ActivityCategory, Milestone, NewActivity};
use teamtown::game::world::PLAYER_HOUSE_ANCHOR;
use teamtown::{GameSession, SessionConfig, TICK_INTERVAL, TICK_RATE, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("TeamTown Core v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    demo_session().await
}

/// Scripted walkthrough of a session.
async fn demo_session() -> Result<()> {
    info!("=== Starting Demo Session ===");

    let mut session = GameSession::new(SessionConfig::default());
    let mut events = session.subscribe_events();

    let roster = session.roster().await;
    for teammate in roster.iter() {
        info!(
            "Teammate {} lives at ({:.0}, {:.0}), house level {}",
            teammate.name, teammate.house_anchor.x, teammate.house_anchor.y, teammate.house_level
        );
    }

    session.start()?;
    let start = session.position().await;
    info!("Spawned at ({:.0}, {:.0})", start.x, start.y);

    // Walk right for a second, then up toward the player's own house
    session.key_down("d").await;
    tokio::time::sleep(TICK_INTERVAL * 30).await;
    session.key_up("d").await;

    session.key_down("w").await;
    tokio::time::sleep(TICK_INTERVAL * 15).await;
    session.key_up("w").await;

    let here = session.position().await;
    info!(
        "Walked to ({:.0}, {:.0}), own house anchor at ({:.0}, {:.0})",
        here.x, here.y, PLAYER_HOUSE_ANCHOR.x, PLAYER_HOUSE_ANCHOR.y
    );

    // Peek at the leaderboard
    session.key_down("l").await;
    session.key_up("l").await;
    let leaderboard = session.roster().await;
    for (rank, teammate) in leaderboard.leaderboard().iter().enumerate() {
        info!(
            "#{}: {} - {} activities",
            rank + 1,
            teammate.name,
            teammate.stats.total_activities
        );
    }
    session.key_down("Escape").await;
    session.key_up("Escape").await;

    // Log this week's activities
    let entries = vec![
        NewActivity {
            text: "Kick off the billing migration".to_string(),
            category: ActivityCategory::Project,
            milestone: Some(Milestone::Initiation),
            priority: 1,
        },
        NewActivity {
            text: "Unblock Jordan on the deploy pipeline".to_string(),
            category: ActivityCategory::AdHoc,
            milestone: None,
            priority: 2,
        },
        NewActivity {
            text: "Weekly triage rotation".to_string(),
            category: ActivityCategory::Routine,
            milestone: None,
            priority: 3,
        },
    ];
    let count = session.submit_activities(entries).await?;
    info!("Logged {} activities", count);

    session.stop().await?;

    // Drain and report the event stream
    let mut event_count = 0;
    while let Ok(event) = events.try_recv() {
        info!("Event: {}", serde_json::to_string(&event)?);
        event_count += 1;
    }

    let state = session.snapshot().await;
    info!("=== Session Summary ===");
    info!("Final position: ({:.0}, {:.0})", state.position.x, state.position.y);
    info!("{}, day {} ({})", state.current_week, state.day_of_week, state.day_name());
    info!("Events observed: {}", event_count);

    let board = session.activities().await;
    for activity in board.board_for("Player", &state.current_week) {
        info!("  [{}] {:?}: {}", activity.priority, activity.category, activity.text);
    }

    Ok(())
}
