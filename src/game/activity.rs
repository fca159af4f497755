//! Activity Log
//!
//! Weekly accomplishments logged by players, grouped per author and week.
//! Priorities are 1-based and contiguous within one author+week board.

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::StoreError;

/// What kind of work an activity was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// Needle-moving project work, tracked by milestone
    Project,
    /// One-time task outside planned projects
    AdHoc,
    /// Recurring maintenance and meetings
    Routine,
}

/// Project milestone stages, in delivery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Milestone {
    /// Scoping before the project exists
    PreProject,
    /// Preparation
    Preparation,
    /// Initiation
    Initiation,
    /// Realization
    Realization,
    /// Finished
    Finished,
    /// Go-live
    GoLive,
}

/// A single logged accomplishment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: Uuid,
    /// What was accomplished
    pub text: String,
    /// Work category
    pub category: ActivityCategory,
    /// Milestone stage; only meaningful for project activities
    pub milestone: Option<Milestone>,
    /// 1-based priority within the author's week board
    pub priority: u32,
    /// Week label the activity was logged under
    pub week: String,
    /// Author's display name
    pub created_by: String,
    /// When the entry was logged
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when logging a new activity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewActivity {
    /// What was accomplished
    pub text: String,
    /// Work category
    pub category: ActivityCategory,
    /// Milestone stage (projects only)
    pub milestone: Option<Milestone>,
    /// 1-based priority
    pub priority: u32,
}

/// In-memory store of all logged activities.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActivityStore {
    items: Vec<Activity>,
}

impl ActivityStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo board history: five Week 1 entries from Alex and Taylor.
    pub fn seeded() -> Self {
        let seeds = [
            (
                "Completed user research for new portal",
                ActivityCategory::Project,
                Some(Milestone::Preparation),
                1,
                "Alex",
            ),
            (
                "Helped CEO prepare quarterly presentation",
                ActivityCategory::AdHoc,
                None,
                2,
                "Alex",
            ),
            (
                "Weekly status meeting with stakeholders",
                ActivityCategory::Routine,
                None,
                3,
                "Alex",
            ),
            (
                "Finalized design specs for mobile app",
                ActivityCategory::Project,
                Some(Milestone::Realization),
                1,
                "Taylor",
            ),
            ("Mentored new team member", ActivityCategory::AdHoc, None, 2, "Taylor"),
        ];

        let mut store = Self::new();
        for (text, category, milestone, priority, author) in seeds {
            // Seed text is never empty, so add cannot fail here
            let _ = store.add(
                NewActivity {
                    text: text.to_string(),
                    category,
                    milestone,
                    priority,
                },
                "Week 1",
                author,
            );
        }
        store
    }

    /// Log a new activity. Assigns id and timestamp; rejects empty text.
    ///
    /// A milestone on a non-project activity is dropped rather than stored.
    pub fn add(
        &mut self,
        entry: NewActivity,
        week: &str,
        created_by: &str,
    ) -> Result<Uuid, StoreError> {
        if entry.text.trim().is_empty() {
            return Err(StoreError::EmptyActivityText);
        }

        let id = Uuid::new_v4();
        let milestone = match entry.category {
            ActivityCategory::Project => entry.milestone,
            _ => None,
        };

        self.items.push(Activity {
            id,
            text: entry.text,
            category: entry.category,
            milestone,
            priority: entry.priority,
            week: week.to_string(),
            created_by: created_by.to_string(),
            created_at: Utc::now(),
        });

        Ok(id)
    }

    /// Replace the text of an existing activity.
    pub fn update_text(&mut self, id: Uuid, text: &str) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyActivityText);
        }
        let activity = self
            .items
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::ActivityNotFound(id))?;
        activity.text = text.to_string();
        Ok(())
    }

    /// Delete an activity.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        if self.items.len() == before {
            return Err(StoreError::ActivityNotFound(id));
        }
        Ok(())
    }

    /// Rewrite priorities for one author+week board from an ordered id list.
    ///
    /// Ids not on that board are ignored; listed ids get priorities 1..n in
    /// list order.
    pub fn reorder(&mut self, created_by: &str, week: &str, ordered_ids: &[Uuid]) {
        for (index, id) in ordered_ids.iter().enumerate() {
            if let Some(activity) = self
                .items
                .iter_mut()
                .find(|a| a.id == *id && a.created_by == created_by && a.week == week)
            {
                activity.priority = (index + 1) as u32;
            }
        }
    }

    /// One author's board for one week, sorted by priority.
    pub fn board_for(&self, created_by: &str, week: &str) -> Vec<&Activity> {
        let mut board: Vec<&Activity> = self
            .items
            .iter()
            .filter(|a| a.created_by == created_by && a.week == week)
            .collect();
        board.sort_by_key(|a| a.priority);
        board
    }

    /// Total activities ever logged by one author, all weeks.
    pub fn count_by(&self, created_by: &str) -> usize {
        self.items.iter().filter(|a| a.created_by == created_by).count()
    }

    /// All activities, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.items.iter()
    }

    /// Number of logged activities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, category: ActivityCategory, priority: u32) -> NewActivity {
        NewActivity {
            text: text.to_string(),
            category,
            milestone: Some(Milestone::Preparation),
            priority,
        }
    }

    #[test]
    fn test_seeded_board_history() {
        let store = ActivityStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.count_by("Alex"), 3);
        assert_eq!(store.count_by("Taylor"), 2);

        let board = store.board_for("Alex", "Week 1");
        assert_eq!(board[0].text, "Completed user research for new portal");
        assert_eq!(board[0].milestone, Some(Milestone::Preparation));
        assert_eq!(board[2].category, ActivityCategory::Routine);
    }

    #[test]
    fn test_add_and_board() {
        let mut store = ActivityStore::new();
        store
            .add(entry("Shipped portal research", ActivityCategory::Project, 2), "Week 1", "Alex")
            .unwrap();
        store
            .add(entry("Weekly status meeting", ActivityCategory::Routine, 1), "Week 1", "Alex")
            .unwrap();
        store
            .add(entry("Mentored new joiner", ActivityCategory::AdHoc, 1), "Week 1", "Taylor")
            .unwrap();

        let board = store.board_for("Alex", "Week 1");
        assert_eq!(board.len(), 2);
        // Sorted by priority, not insertion order
        assert_eq!(board[0].text, "Weekly status meeting");
        assert_eq!(board[1].text, "Shipped portal research");
        assert!(store.board_for("Alex", "Week 2").is_empty());
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut store = ActivityStore::new();
        let result = store.add(entry("   ", ActivityCategory::AdHoc, 1), "Week 1", "Alex");
        assert!(matches!(result, Err(StoreError::EmptyActivityText)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_milestone_dropped_for_non_project() {
        let mut store = ActivityStore::new();
        let id = store
            .add(entry("Helped with slides", ActivityCategory::AdHoc, 1), "Week 1", "Alex")
            .unwrap();
        let activity = store.iter().find(|a| a.id == id).unwrap();
        assert_eq!(activity.milestone, None);

        let id = store
            .add(entry("Design specs", ActivityCategory::Project, 2), "Week 1", "Alex")
            .unwrap();
        let activity = store.iter().find(|a| a.id == id).unwrap();
        assert_eq!(activity.milestone, Some(Milestone::Preparation));
    }

    #[test]
    fn test_update_and_delete() {
        let mut store = ActivityStore::new();
        let id = store
            .add(entry("Draft", ActivityCategory::Routine, 1), "Week 1", "Alex")
            .unwrap();

        store.update_text(id, "Final").unwrap();
        assert_eq!(store.iter().next().unwrap().text, "Final");

        store.delete(id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.delete(id), Err(StoreError::ActivityNotFound(_))));
    }

    #[test]
    fn test_reorder_rewrites_priorities() {
        let mut store = ActivityStore::new();
        let a = store
            .add(entry("first", ActivityCategory::Routine, 1), "Week 1", "Alex")
            .unwrap();
        let b = store
            .add(entry("second", ActivityCategory::Routine, 2), "Week 1", "Alex")
            .unwrap();
        let c = store
            .add(entry("third", ActivityCategory::Routine, 3), "Week 1", "Alex")
            .unwrap();

        store.reorder("Alex", "Week 1", &[c, a, b]);

        let board = store.board_for("Alex", "Week 1");
        let texts: Vec<&str> = board.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["third", "first", "second"]);
        assert_eq!(board[0].priority, 1);
        assert_eq!(board[2].priority, 3);
    }

    #[test]
    fn test_reorder_scoped_to_author_and_week() {
        let mut store = ActivityStore::new();
        let alex = store
            .add(entry("mine", ActivityCategory::Routine, 1), "Week 1", "Alex")
            .unwrap();
        let taylor = store
            .add(entry("theirs", ActivityCategory::Routine, 7), "Week 1", "Taylor")
            .unwrap();

        // Taylor's id in Alex's reorder list must be ignored
        store.reorder("Alex", "Week 1", &[taylor, alex]);

        let theirs = store.iter().find(|a| a.id == taylor).unwrap();
        assert_eq!(theirs.priority, 7);
        let mine = store.iter().find(|a| a.id == alex).unwrap();
        assert_eq!(mine.priority, 2);
    }
}
