//! Validation helper functions for the to-do MCP server
//!
//! Field-level validation for create/update, plus parsing helpers for the
//! string parameters the tools receive (dates, filter names, ids).

use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use thiserror::Error;

use crate::todo::{Todo, TodoFilter};

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// A single violated validation rule
///
/// Messages are worded so that several joined with "; " read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("title can't be blank")]
    TitleBlank,
    #[error("title is too long (maximum is 200 characters)")]
    TitleTooLong,
    #[error("description is too long (maximum is 1000 characters)")]
    DescriptionTooLong,
    #[error("due date can't be in the past")]
    DueDateInPast,
}

/// Check the user-settable fields of a todo against every rule
///
/// Returns all violated rules, never just the first; an empty Vec means
/// valid. Lengths are counted in characters, not bytes.
pub fn validate_fields(
    title: &str,
    description: Option<&str>,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if title.is_empty() {
        violations.push(Violation::TitleBlank);
    } else if title.chars().count() > TITLE_MAX_CHARS {
        violations.push(Violation::TitleTooLong);
    }

    if let Some(description) = description
        && description.chars().count() > DESCRIPTION_MAX_CHARS
    {
        violations.push(Violation::DescriptionTooLong);
    }

    if let Some(due) = due_date
        && due < today
    {
        violations.push(Violation::DueDateInPast);
    }

    violations
}

/// Validate a full todo record, as done before every create or update save
pub fn validate_todo(todo: &Todo, today: NaiveDate) -> Result<(), Vec<Violation>> {
    let violations = validate_fields(
        &todo.title,
        todo.description.as_deref(),
        todo.due_date,
        today,
    );
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Join violations into a single reply message
pub fn format_violations(violations: &[Violation]) -> String {
    let rules: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
    format!("Validation failed: {}", rules.join("; "))
}

/// Parse and validate a date parameter
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2026-03-15')",
                date_str
            ),
            true,
        )
    })
}

/// Parse and validate a list filter parameter
pub fn parse_filter(filter_str: &str) -> McpResult<TodoFilter> {
    filter_str.parse::<TodoFilter>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

/// Normalize a todo ID parameter by trimming surrounding whitespace
pub fn normalize_todo_id(id: &str) -> String {
    id.trim().to_string()
}
