//! Create handler for the to-do MCP server

use mcp_attr::{Result as McpResult, bail_public};

use crate::TodoServerHandler;
use crate::todo::Todo;
use crate::validation;

impl TodoServerHandler {
    /// Validates the supplied fields against every rule at once, then
    /// persists the new item with a generated id. Nothing is persisted and
    /// the id counter does not advance when validation fails.
    pub async fn handle_create(
        &self,
        title: String,
        description: Option<String>,
        due_date: Option<String>,
        completed: Option<bool>,
    ) -> McpResult<String> {
        let due_date = match due_date {
            Some(ref date_str) => Some(validation::parse_date(date_str)?),
            None => None,
        };

        let today = self.clock.today();
        let violations =
            validation::validate_fields(&title, description.as_deref(), due_date, today);
        if !violations.is_empty() {
            bail_public!(_, "{}", validation::format_violations(&violations));
        }

        let mut data = self.data.lock().unwrap();
        let id = data.generate_todo_id();
        let now = self.clock.now();
        let todo = Todo {
            id: id.clone(),
            title,
            description,
            completed: completed.unwrap_or(false),
            due_date,
            created_at: now,
            updated_at: now,
        };
        let status = todo.status();
        data.add_todo(todo);
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Add todo {}", id)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Todo created with ID: {} ({})", id, status))
    }
}
