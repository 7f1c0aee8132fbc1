//! Query methods for TodoList
//!
//! Named filters and orderings over the stored collection. Each query
//! recomputes from the live Vec on every call; there is no cursor state to
//! invalidate, so callers restart a listing simply by calling again.

use chrono::{Duration, NaiveDate};
use std::str::FromStr;

use super::item::{DUE_SOON_DAYS, Todo};
use super::list::TodoList;

/// Named list filter, parsed from the `list` tool's string parameter
///
/// Uses snake_case naming to match the wire format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFilter {
    /// Items already completed
    completed,
    /// Items still open
    pending,
    /// Items due exactly today
    due_today,
    /// Items due within the next week, today included
    due_soon,
    /// Open items whose due date has passed
    overdue,
    /// Items due after today, completed or not
    upcoming,
}

impl FromStr for TodoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(TodoFilter::completed),
            "pending" => Ok(TodoFilter::pending),
            "due_today" => Ok(TodoFilter::due_today),
            "due_soon" => Ok(TodoFilter::due_soon),
            "overdue" => Ok(TodoFilter::overdue),
            "upcoming" => Ok(TodoFilter::upcoming),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: completed, pending, due_today, due_soon, overdue, upcoming",
                s
            )),
        }
    }
}

impl TodoList {
    /// Get completed todos
    pub fn completed(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.completed).collect()
    }

    /// Get open todos
    pub fn pending(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| !t.completed).collect()
    }

    /// Get all todos, newest first
    ///
    /// Sorted by creation instant descending; equal instants keep their
    /// insertion order.
    pub fn recent(&self) -> Vec<&Todo> {
        let mut todos: Vec<&Todo> = self.todos.iter().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        todos
    }

    /// Get todos due exactly today
    pub fn due_today(&self, today: NaiveDate) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| t.due_date == Some(today))
            .collect()
    }

    /// Get todos due between today and a week from today, inclusive
    pub fn due_soon(&self, today: NaiveDate) -> Vec<&Todo> {
        let horizon = today + Duration::days(DUE_SOON_DAYS);
        self.todos
            .iter()
            .filter(|t| matches!(t.due_date, Some(due) if today <= due && due <= horizon))
            .collect()
    }

    /// Get open todos whose due date has passed
    ///
    /// Completed records never appear here, however old their due date.
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| !t.completed && matches!(t.due_date, Some(due) if due < today))
            .collect()
    }

    /// Get todos due after today
    ///
    /// Completion state is ignored here, unlike `overdue`.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| matches!(t.due_date, Some(due) if due > today))
            .collect()
    }

    /// Apply a named filter and return owned copies for display
    pub fn filtered(&self, filter: TodoFilter, today: NaiveDate) -> Vec<Todo> {
        let refs = match filter {
            TodoFilter::completed => self.completed(),
            TodoFilter::pending => self.pending(),
            TodoFilter::due_today => self.due_today(today),
            TodoFilter::due_soon => self.due_soon(today),
            TodoFilter::overdue => self.overdue(today),
            TodoFilter::upcoming => self.upcoming(today),
        };
        refs.into_iter().cloned().collect()
    }

    /// All todos in `recent` order as owned copies for display
    pub fn all_recent(&self) -> Vec<Todo> {
        self.recent().into_iter().cloned().collect()
    }
}
