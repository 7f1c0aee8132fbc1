//! Show handler for the to-do MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;

impl TodoServerHandler {
    /// Renders a single todo in full detail.
    pub async fn handle_show(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_todo_id(&id);

        let data = self.data.lock().unwrap();
        let todo = match data.get(&id) {
            Some(t) => t,
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

        Ok(formatting::format_todo(&todo, self.clock.today()))
    }
}
