//! Serialization and deserialization implementations for TodoList
//!
//! The on-disk form is a TOML document with a `format_version` tag, a
//! `[[todo]]` array in insertion order, and the id counter. The id index
//! (`todo_map`) is in-memory only and is rebuilt here on load.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use super::item::Todo;
use super::list::{FORMAT_VERSION, TodoList};

#[derive(Deserialize)]
#[serde(default)]
struct TodoListFile {
    format_version: u32,
    #[serde(rename = "todo")]
    todos: Vec<Todo>,
    todo_counter: u32,
}

impl Default for TodoListFile {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            todos: Vec::new(),
            todo_counter: 0,
        }
    }
}

impl<'de> Deserialize<'de> for TodoList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = TodoListFile::deserialize(deserializer)?;

        if file.format_version > FORMAT_VERSION {
            return Err(D::Error::custom(format!(
                "unsupported format_version {} (this build reads up to {})",
                file.format_version, FORMAT_VERSION
            )));
        }

        // Rebuild the id index from the stored records
        let mut todo_map = HashMap::new();
        for todo in &file.todos {
            todo_map.insert(todo.id.clone(), todo.completed);
        }

        Ok(TodoList {
            format_version: FORMAT_VERSION,
            todos: file.todos,
            todo_map,
            todo_counter: file.todo_counter,
        })
    }
}

impl Serialize for TodoList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TodoList", 3)?;
        state.serialize_field("format_version", &self.format_version)?;
        if self.todo_counter != 0 {
            state.serialize_field("todo_counter", &self.todo_counter)?;
        }
        if !self.todos.is_empty() {
            state.serialize_field("todo", &self.todos)?;
        }
        state.end()
    }
}
