use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::clock::local_now;

/// How many days ahead of today a due date still counts as "due soon"
pub const DUE_SOON_DAYS: i64 = 7;

/// A single to-do item
///
/// The `completed` flag is the only piece of state machinery: any item can
/// flip in either direction at any time, including overdue ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    /// Unique identifier assigned at creation (e.g., "#1"), immutable
    pub id: String,
    /// Short text describing the item (1-200 characters)
    pub title: String,
    /// Optional longer free-form text (up to 1000 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the item has been completed
    pub completed: bool,
    /// Optional calendar date the item is due (no time component)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// When the item was created
    pub created_at: NaiveDateTime,
    /// When the item was last modified
    pub updated_at: NaiveDateTime,
}

impl Default for Todo {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            completed: false,
            due_date: None,
            created_at: local_now(),
            updated_at: local_now(),
        }
    }
}

impl Todo {
    /// Human-readable completion state
    pub fn status(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }

    /// True when the due date has passed and the item is still open
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && matches!(self.due_date, Some(due) if due < today)
    }

    /// True when the due date falls within the next week, today included
    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        matches!(
            self.due_date,
            Some(due) if today <= due && due <= today + Duration::days(DUE_SOON_DAYS)
        )
    }

    /// True when the due date is today
    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        self.due_date == Some(today)
    }

    /// Days from today until the due date (negative once passed)
    ///
    /// Returns None when the item has no due date.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }
}

/// Partial field set for updating a Todo
///
/// Outer `None` leaves the field untouched; for clearable fields the inner
/// `None` clears the stored value. This keeps "not supplied" and "set to
/// empty" distinct.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl Todo {
    /// Overwrite only the fields the patch supplies
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }
}
