//! Toggle handler for the to-do MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::TodoServerHandler;
use crate::validation;

impl TodoServerHandler {
    /// Flips the completed flag and persists immediately.
    ///
    /// Field validation is bypassed: no user-supplied fields change, so the
    /// flip goes through even for a record whose due date has since passed.
    pub async fn handle_toggle(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_todo_id(&id);

        let mut data = self.data.lock().unwrap();
        let completed = match data.toggle(&id, self.clock.now()) {
            Some(completed) => completed,
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Todo '{}' not found. Use list() to see available todos.",
                    id
                );
            }
        };
        drop(data);

        let (action, status) = if completed {
            ("Complete", "Completed")
        } else {
            ("Reopen", "Pending")
        };
        if let Err(e) = self.save_data_with_message(&format!("{} todo {}", action, id)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Todo {} marked as {}", id, status))
    }
}
