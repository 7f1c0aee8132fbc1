//! Formatting helper functions for the to-do MCP server
//!
//! Rendering of todos into the plain-text replies the tools return.

use chrono::NaiveDate;

use crate::todo::Todo;

/// Apply keyword filtering (case-insensitive search in id, title, and description)
pub fn apply_keyword_filter(todos: &mut Vec<Todo>, keyword: &str) {
    let keyword_lower = keyword.to_lowercase();
    todos.retain(|todo| {
        let id_matches = todo.id.to_lowercase().contains(&keyword_lower);
        let title_matches = todo.title.to_lowercase().contains(&keyword_lower);
        let description_matches = todo
            .description
            .as_ref()
            .map(|d| d.to_lowercase().contains(&keyword_lower))
            .unwrap_or(false);

        id_matches || title_matches || description_matches
    });
}

/// Render the distance to a due date for display
fn due_annotation(days: i64) -> String {
    if days < 0 {
        let late = -days;
        format!("overdue by {} day{}", late, if late == 1 { "" } else { "s" })
    } else if days == 0 {
        "due today".to_string()
    } else {
        format!("in {} day{}", days, if days == 1 { "" } else { "s" })
    }
}

/// Format todos into a display string
///
/// One entry per todo: id, title, status, then indented detail lines for
/// due date, description, and timestamps.
pub fn format_todos(todos: Vec<Todo>, today: NaiveDate, exclude_descriptions: bool) -> String {
    if todos.is_empty() {
        return "No todos found".to_string();
    }

    let mut result = format!("Found {} todo(s):\n\n", todos.len());
    for todo in todos {
        result.push_str(&format!("- [{}] {} ({})\n", todo.id, todo.title, todo.status()));

        if let (Some(due), Some(days)) = (todo.due_date, todo.days_until_due(today)) {
            result.push_str(&format!("  Due: {} ({})\n", due, due_annotation(days)));
        }
        if !exclude_descriptions && let Some(ref description) = todo.description {
            result.push_str(&format!("  Description: {}\n", description));
        }
        result.push_str(&format!("  Created: {}\n", todo.created_at));
        result.push_str(&format!("  Updated: {}\n", todo.updated_at));
    }

    result
}

/// Format a single todo in full detail
pub fn format_todo(todo: &Todo, today: NaiveDate) -> String {
    let mut result = format!("[{}] {}\n", todo.id, todo.title);
    result.push_str(&format!("Status: {}\n", todo.status()));

    if let (Some(due), Some(days)) = (todo.due_date, todo.days_until_due(today)) {
        result.push_str(&format!("Due: {} ({})\n", due, due_annotation(days)));
    }
    if let Some(ref description) = todo.description {
        result.push_str(&format!("Description: {}\n", description));
    }
    result.push_str(&format!("Created: {}\n", todo.created_at));
    result.push_str(&format!("Updated: {}\n", todo.updated_at));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_todo(id: &str, title: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keyword_filter_searches_id_title_description() {
        let mut todos = vec![
            make_todo("#1", "Buy milk"),
            make_todo("#2", "Pay rent"),
            Todo {
                description: Some("milk and eggs".to_string()),
                ..make_todo("#3", "Groceries")
            },
        ];

        apply_keyword_filter(&mut todos, "MILK");

        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["#1", "#3"]);
    }

    #[test]
    fn test_due_annotation_wording() {
        assert_eq!(due_annotation(-2), "overdue by 2 days");
        assert_eq!(due_annotation(-1), "overdue by 1 day");
        assert_eq!(due_annotation(0), "due today");
        assert_eq!(due_annotation(1), "in 1 day");
        assert_eq!(due_annotation(5), "in 5 days");
    }

    #[test]
    fn test_format_todos_empty() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(format_todos(Vec::new(), today, false), "No todos found");
    }

    #[test]
    fn test_format_todos_excludes_descriptions_on_request() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let todos = vec![Todo {
            description: Some("the fine print".to_string()),
            ..make_todo("#1", "Read contract")
        }];

        let rendered = format_todos(todos.clone(), today, true);
        assert!(!rendered.contains("the fine print"));

        let rendered = format_todos(todos, today, false);
        assert!(rendered.contains("the fine print"));
    }
}
