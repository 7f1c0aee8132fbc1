//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use todo_mcp::{Clock, Todo, TodoServerHandler};

/// Create a test handler with temporary storage and the system clock
pub fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = TodoServerHandler::new(temp_file.path().to_str().unwrap(), false).unwrap();
    (handler, temp_file)
}

/// Create a test handler with temporary storage and a pinned "today"
pub fn get_test_handler_at(today: NaiveDate) -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = TodoServerHandler::with_clock(
        temp_file.path().to_str().unwrap(),
        false,
        Clock::fixed_date(today),
    )
    .unwrap();
    (handler, temp_file)
}

/// Reopen the storage behind an existing temp file at a different "today"
///
/// Simulates the passage of time between sessions: records created earlier
/// keep their stored due dates while the clock has moved on.
pub fn reopen_handler_at(temp_file: &NamedTempFile, today: NaiveDate) -> TodoServerHandler {
    TodoServerHandler::with_clock(
        temp_file.path().to_str().unwrap(),
        false,
        Clock::fixed_date(today),
    )
    .unwrap()
}

/// Extract the todo ID from a create() response message
/// Response format: "Todo created with ID: <id> (Pending)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    // Fallback: try to get last whitespace-separated token without parentheses
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

/// Shorthand for building test dates
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test todo with minimal fields
pub fn create_test_todo(id: &str, title: &str) -> Todo {
    Todo {
        id: id.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

/// Create a test todo with all fields
pub fn create_full_test_todo(
    id: &str,
    title: &str,
    description: Option<String>,
    completed: bool,
    due_date: Option<NaiveDate>,
) -> Todo {
    Todo {
        id: id.to_string(),
        title: title.to_string(),
        description,
        completed,
        due_date,
        ..Default::default()
    }
}
