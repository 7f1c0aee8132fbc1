//! Delete handler for the to-do MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::TodoServerHandler;
use crate::validation;

impl TodoServerHandler {
    /// Removes the record permanently. There is no trash or undo.
    pub async fn handle_delete(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_todo_id(&id);

        let mut data = self.data.lock().unwrap();
        if data.remove_todo(&id).is_none() {
            drop(data);
            bail_public!(
                _,
                "Todo '{}' not found. Use list() to see available todos.",
                id
            );
        }
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Delete todo {}", id)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Todo {} deleted", id))
    }
}
