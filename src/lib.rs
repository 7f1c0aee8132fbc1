//! Todo MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for managing
//! a simple to-do list: short text items with an optional description and
//! due date that can be created, listed, edited, completed, and deleted.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `todo` module - The Todo entity, validation, and queries
//! - **Persistence Layer**: `storage` module - File-based TOML storage with Git sync
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::TodoServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("todos.toml", false)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod formatting;
mod git_ops;
mod handlers;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use clock::Clock;
pub use git_ops::GitOps;
pub use storage::Storage;
pub use todo::{Todo, TodoFilter, TodoList, TodoPatch};
pub use validation::Violation;

/// MCP Server handler for the to-do list
///
/// Owns the in-memory collection, the file storage, and the clock every
/// date-dependent rule reads from. All changes are persisted to a TOML file
/// after each successful mutation and optionally committed to Git.
pub struct TodoServerHandler {
    pub(crate) data: Mutex<TodoList>,
    pub(crate) storage: Storage,
    pub(crate) clock: Clock,
}

impl TodoServerHandler {
    /// Create a new handler reading time from the system clock
    ///
    /// # Arguments
    /// * `storage_path` - Path to the data file (TOML format)
    /// * `sync_git` - Enable automatic Git synchronization
    pub fn new(storage_path: &str, sync_git: bool) -> Result<Self> {
        Self::with_clock(storage_path, sync_git, Clock::system())
    }

    /// Create a new handler with an explicit time source
    ///
    /// Tests pin the clock so due-date rules and queries are deterministic.
    pub fn with_clock(storage_path: &str, sync_git: bool, clock: Clock) -> Result<Self> {
        let storage = Storage::new(storage_path, sync_git);
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            clock,
        })
    }

    /// Save the todo list with a default message
    #[allow(dead_code)]
    fn save_data(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        self.storage.save(&data)?;
        Ok(())
    }

    /// Save the todo list with a custom commit message
    fn save_data_with_message(&self, message: &str) -> Result<()> {
        let data = self.data.lock().unwrap();
        self.storage.save_with_message(&data, message)?;
        Ok(())
    }
}

impl Drop for TodoServerHandler {
    fn drop(&mut self) {
        // Push to git on shutdown if sync is enabled
        if let Err(e) = self.storage.shutdown() {
            eprintln!("Warning: Shutdown git sync failed: {}", e);
        }
    }
}

/// To-do list manager for short text items with an optional due date.
///
/// Items carry a title (required, up to 200 characters), an optional
/// description (up to 1000 characters), an optional due date, and a
/// completed flag. Invalid input is rejected with every violated rule
/// reported together.
///
/// Key behavior:
/// - **create**: new items start Pending unless created completed
/// - **list**: no filter shows everything, newest first; filters narrow by
///   completion or due date
/// - **toggle**: flips Pending/Completed in either direction at any time
/// - due dates may not be set in the past, but items naturally become
///   overdue as time passes
///
/// Todo IDs use format: #1, #2, #3
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Create**: Add a new todo. Starts Pending unless stated otherwise.
    /// **Rules**: title 1-200 characters; description up to 1000; due date today or later.
    #[tool]
    async fn create(
        &self,
        /// Title: short text describing the item
        title: String,
        /// Description: longer free-form text (optional)
        description: Option<String>,
        /// Due date: YYYY-MM-DD, today or later (optional)
        due_date: Option<String>,
        /// Completed: create the item already done (optional, default false)
        completed: Option<bool>,
    ) -> McpResult<String> {
        self.handle_create(title, description, due_date, completed)
            .await
    }

    /// **Review**: List todos. No filter shows everything, newest first.
    /// **Filters**: completed/pending by state; due_today/due_soon/overdue/upcoming by due date.
    #[tool]
    async fn list(
        &self,
        /// Filter: completed/pending/due_today/due_soon/overdue/upcoming. Empty=all, newest first.
        filter: Option<String>,
        /// Keyword: case-insensitive match on id, title, and description (optional)
        keyword: Option<String>,
        /// Exclude descriptions from the output (optional, default false)
        exclude_descriptions: Option<bool>,
    ) -> McpResult<String> {
        self.handle_list(filter, keyword, exclude_descriptions).await
    }

    /// **Inspect**: Show one todo in full detail.
    #[tool]
    async fn show(
        &self,
        /// ID of the todo to show
        id: String,
    ) -> McpResult<String> {
        self.handle_show(id).await
    }

    /// **Edit**: Update todo details. Only supplied fields change.
    /// **Tip**: Use ""(empty string) to clear description or due_date.
    /// **Note**: The whole record is re-validated, so an item that has gone
    /// overdue needs its due date moved (or cleared) before other edits pass.
    #[tool]
    async fn update(
        &self,
        /// ID of the todo to update
        id: String,
        /// New title (optional)
        title: Option<String>,
        /// New description, ""=clear (optional)
        description: Option<String>,
        /// New due date YYYY-MM-DD, ""=clear (optional)
        due_date: Option<String>,
        /// New completed state (optional)
        completed: Option<bool>,
    ) -> McpResult<String> {
        self.handle_update(id, title, description, due_date, completed)
            .await
    }

    /// **Complete/Reopen**: Flip a todo between Pending and Completed.
    /// Works in either direction at any time, including on overdue items.
    #[tool]
    async fn toggle(
        &self,
        /// ID of the todo to toggle
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle(id).await
    }

    /// **Delete**: Remove a todo permanently. Irreversible.
    #[tool]
    async fn delete(
        &self,
        /// ID of the todo to delete
        id: String,
    ) -> McpResult<String> {
        self.handle_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Todo;
    use tempfile::NamedTempFile;

    fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let handler = TodoServerHandler::new(temp_file.path().to_str().unwrap(), false).unwrap();
        (handler, temp_file)
    }

    #[test]
    fn test_custom_file_path() {
        let temp_file = NamedTempFile::new().unwrap();
        let custom_path = temp_file.path().to_str().unwrap();

        let handler = TodoServerHandler::new(custom_path, false).unwrap();
        assert_eq!(handler.storage.file_path().to_str().unwrap(), custom_path);

        let mut data = handler.data.lock().unwrap();
        let id = data.generate_todo_id();
        data.add_todo(Todo {
            id: id.clone(),
            title: "Saved through handler".to_string(),
            ..Default::default()
        });
        drop(data);

        assert!(handler.save_data().is_ok());
        assert!(std::path::Path::new(custom_path).exists());

        // A fresh handler on the same path sees the saved record
        let handler2 = TodoServerHandler::new(custom_path, false).unwrap();
        let loaded = handler2.data.lock().unwrap();
        assert_eq!(loaded.todo_count(), 1);
        assert_eq!(loaded.find_by_id(&id).unwrap().title, "Saved through handler");
    }

    #[tokio::test]
    async fn test_create_then_show_round_trip() {
        let (handler, _file) = get_test_handler();

        let reply = handler
            .handle_create("Buy milk".to_string(), None, None, None)
            .await
            .unwrap();
        assert!(reply.contains("ID: #1"));
        assert!(reply.contains("(Pending)"));

        let shown = handler.handle_show("#1".to_string()).await.unwrap();
        assert!(shown.contains("Buy milk"));
        assert!(shown.contains("Status: Pending"));
    }
}
