use chrono::NaiveDateTime;
use std::collections::HashMap;

use super::item::Todo;

/// Current on-disk format version
pub(crate) const FORMAT_VERSION: u32 = 1;

/// The persisted collection of to-do items
#[derive(Debug)]
pub struct TodoList {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    /// All items stored in a Vec
    ///
    /// Vec is the primary storage: it keeps insertion order, which gives
    /// predictable iteration for display and stable, Git-friendly diffs
    /// when serialized to TOML.
    pub(crate) todos: Vec<Todo>,

    /// HashMap index for O(1) id lookups
    ///
    /// Maps id to the completed flag. It never holds references to the
    /// actual Todo objects and is not serialized; it is rebuilt from
    /// `todos` during deserialization and kept in sync by every mutating
    /// operation (add, update, toggle, remove).
    pub(crate) todo_map: HashMap<String, bool>,

    /// Counter backing generated ids; advanced only on successful creation
    pub todo_counter: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            todos: Vec::new(),
            todo_map: HashMap::new(),
            todo_counter: 0,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TodoList {
    /// Create a new empty TodoList
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique todo ID
    ///
    /// Ids already present are skipped, so a hand-edited data file whose
    /// counter lags behind its records cannot produce a collision.
    pub fn generate_todo_id(&mut self) -> String {
        loop {
            self.todo_counter += 1;
            let id = format!("#{}", self.todo_counter);
            if !self.todo_map.contains_key(&id) {
                return id;
            }
        }
    }

    /// Number of stored items
    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    /// Find a todo by its ID
    pub fn find_by_id(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// Find a todo by its ID and return an owned copy
    pub fn get(&self, id: &str) -> Option<Todo> {
        self.find_by_id(id).cloned()
    }

    /// Add a todo to the collection
    pub fn add_todo(&mut self, todo: Todo) {
        self.todo_map.insert(todo.id.clone(), todo.completed);
        self.todos.push(todo);
    }

    /// Replace a stored todo in place, keeping its position
    ///
    /// Returns the previous record, or None when the id is unknown.
    pub fn update(&mut self, id: &str, todo: Todo) -> Option<Todo> {
        let completed = todo.completed;
        let slot = self.find_by_id_mut(id)?;
        let old = std::mem::replace(slot, todo);
        self.todo_map.insert(id.to_string(), completed);
        Some(old)
    }

    /// Remove a todo from the collection and return it
    pub fn remove_todo(&mut self, id: &str) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == id)?;
        let todo = self.todos.remove(pos);
        self.todo_map.remove(id);
        Some(todo)
    }

    /// Flip the completed flag of a todo
    ///
    /// Stamps `updated_at` and syncs the id index. Field validation is
    /// deliberately not run here: no user-supplied fields change, so the
    /// flip persists whatever title/description/due_date the record holds.
    ///
    /// Returns the new completed state, or None when the id is unknown.
    pub fn toggle(&mut self, id: &str, now: NaiveDateTime) -> Option<bool> {
        let todo = self.find_by_id_mut(id)?;
        todo.completed = !todo.completed;
        todo.updated_at = now;
        let completed = todo.completed;
        self.todo_map.insert(id.to_string(), completed);
        Some(completed)
    }
}
