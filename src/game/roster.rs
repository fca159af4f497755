//! Teammate Roster
//!
//! Ordered roster of teammates, their house placements, and activity stats.
//! Roster order is meaningful: proximity prompts scan it front to back.

use std::fmt;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::core::vec2::Vec2;
use crate::game::avatar::AvatarKind;
use crate::game::activity::ActivityCategory;
use crate::game::state::MAX_HOUSE_LEVEL;
use crate::game::StoreError;

/// Activities needed per house level upgrade.
const ACTIVITIES_PER_UPGRADE: u32 = 10;

/// Unique teammate identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeammateId(Uuid);

impl TeammateId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TeammateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-category activity counters for one teammate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeammateStats {
    /// Project activities logged
    pub project_count: u32,
    /// Ad hoc activities logged
    pub adhoc_count: u32,
    /// Routine activities logged
    pub routine_count: u32,
    /// All activities logged
    pub total_activities: u32,
}

/// One teammate and their house on the map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Teammate {
    /// Unique identifier
    pub id: TeammateId,
    /// Display name
    pub name: String,
    /// Avatar sprite
    pub avatar: AvatarKind,
    /// House level, 1..=3
    pub house_level: u8,
    /// House anchor (top-left corner of the 64x64 footprint)
    pub house_anchor: Vec2,
    /// House sprite variant
    pub house_kind: u8,
    /// Activity counters
    pub stats: TeammateStats,
}

/// The teammate roster, in display/scan order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    teammates: Vec<Teammate>,
}

impl Roster {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo neighborhood: four teammates at their fixed house anchors,
    /// carrying their prior activity history.
    pub fn seeded() -> Self {
        let seeds = [
            ("Alex", AvatarKind::Villager, 2, Vec2::new(375.0, 180.0), 1, (12, 5, 3)),
            ("Taylor", AvatarKind::Suit, 1, Vec2::new(1000.0, 300.0), 2, (8, 6, 4)),
            ("Jordan", AvatarKind::Orc, 3, Vec2::new(220.0, 520.0), 3, (15, 3, 2)),
            ("Morgan", AvatarKind::Vampire, 2, Vec2::new(1210.0, 550.0), 4, (10, 7, 5)),
        ];

        let mut roster = Self::new();
        for (name, avatar, level, anchor, kind, (project, adhoc, routine)) in seeds {
            let id = roster.add(name, avatar, level, anchor, kind);
            if let Some(teammate) = roster.teammates.iter_mut().find(|t| t.id == id) {
                teammate.stats = TeammateStats {
                    project_count: project,
                    adhoc_count: adhoc,
                    routine_count: routine,
                    total_activities: project + adhoc + routine,
                };
            }
        }
        roster
    }

    /// Add a teammate at the end of the roster. Returns the new id.
    pub fn add(
        &mut self,
        name: &str,
        avatar: AvatarKind,
        house_level: u8,
        house_anchor: Vec2,
        house_kind: u8,
    ) -> TeammateId {
        let id = TeammateId::generate();
        self.teammates.push(Teammate {
            id,
            name: name.to_string(),
            avatar,
            house_level,
            house_anchor,
            house_kind,
            stats: TeammateStats::default(),
        });
        id
    }

    /// Look up a teammate by id.
    pub fn get(&self, id: TeammateId) -> Option<&Teammate> {
        self.teammates.iter().find(|t| t.id == id)
    }

    /// Look up a teammate by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Teammate> {
        self.teammates.iter().find(|t| t.name == name)
    }

    /// Teammates in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Teammate> {
        self.teammates.iter()
    }

    /// Number of teammates.
    pub fn len(&self) -> usize {
        self.teammates.len()
    }

    /// True if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.teammates.is_empty()
    }

    /// House anchors in roster order (collision and proximity input).
    pub fn anchors(&self) -> Vec<Vec2> {
        self.teammates.iter().map(|t| t.house_anchor).collect()
    }

    /// Record a logged activity against a teammate's stats.
    ///
    /// Every [`ACTIVITIES_PER_UPGRADE`]th activity raises their house level,
    /// capped at [`MAX_HOUSE_LEVEL`].
    pub fn record_activity(
        &mut self,
        id: TeammateId,
        category: ActivityCategory,
    ) -> Result<(), StoreError> {
        let teammate = self
            .teammates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TeammateNotFound(id))?;

        match category {
            ActivityCategory::Project => teammate.stats.project_count += 1,
            ActivityCategory::AdHoc => teammate.stats.adhoc_count += 1,
            ActivityCategory::Routine => teammate.stats.routine_count += 1,
        }
        teammate.stats.total_activities += 1;

        if teammate.stats.total_activities % ACTIVITIES_PER_UPGRADE == 0
            && teammate.house_level < MAX_HOUSE_LEVEL
        {
            teammate.house_level += 1;
        }

        Ok(())
    }

    /// Standings sorted by total activities, most active first.
    ///
    /// Ties break by name so the ordering is deterministic.
    pub fn leaderboard(&self) -> Vec<&Teammate> {
        let mut standings: Vec<&Teammate> = self.teammates.iter().collect();
        standings.sort_by(|a, b| {
            b.stats
                .total_activities
                .cmp(&a.stats.total_activities)
                .then_with(|| a.name.cmp(&b.name))
        });
        standings
    }
}
