//! List handler for the to-do MCP server

use mcp_attr::Result as McpResult;

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;

impl TodoServerHandler {
    /// Applies the named filter (or `recent` ordering when absent), then the
    /// keyword filter, and formats the result for display.
    pub async fn handle_list(
        &self,
        filter: Option<String>,
        keyword: Option<String>,
        exclude_descriptions: Option<bool>,
    ) -> McpResult<String> {
        let filter = match filter {
            Some(ref filter_str) => Some(validation::parse_filter(filter_str)?),
            None => None,
        };

        let today = self.clock.today();
        let data = self.data.lock().unwrap();
        let mut todos = match filter {
            Some(filter) => data.filtered(filter, today),
            None => data.all_recent(),
        };
        drop(data);

        if let Some(ref keyword) = keyword {
            formatting::apply_keyword_filter(&mut todos, keyword);
        }

        Ok(formatting::format_todos(
            todos,
            today,
            exclude_descriptions.unwrap_or(false),
        ))
    }
}
