//! Update handler for the to-do MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::TodoServerHandler;
use crate::todo::TodoPatch;
use crate::validation;

impl TodoServerHandler {
    /// Applies only the supplied fields, then re-validates the full record
    /// before persisting. An empty string clears description or due_date.
    /// A record whose due date has passed since it was set fails
    /// re-validation here even when the due date itself is untouched.
    pub async fn handle_update(
        &self,
        id: String,
        title: Option<String>,
        description: Option<String>,
        due_date: Option<String>,
        completed: Option<bool>,
    ) -> McpResult<String> {
        let id = validation::normalize_todo_id(&id);

        // Empty string clears an optional field
        let due_date = match due_date {
            Some(date_str) if date_str.is_empty() => Some(None),
            Some(ref date_str) => Some(Some(validation::parse_date(date_str)?)),
            None => None,
        };
        let description = description.map(|d| if d.is_empty() { None } else { Some(d) });

        let patch = TodoPatch {
            title,
            description,
            completed,
            due_date,
        };

        let mut data = self.data.lock().unwrap();
        let mut todo = match data.get(&id) {
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

        todo.apply(patch);

        let today = self.clock.today();
        if let Err(violations) = validation::validate_todo(&todo, today) {
            drop(data);
            bail_public!(_, "{}", validation::format_violations(&violations));
        }

        todo.updated_at = self.clock.now();

        if data.update(&id, todo).is_none() {
            drop(data);
            bail_public!(_, "Failed to update todo '{}'", id);
        }
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Update todo {}", id)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Todo {} updated successfully", id))
    }
}
