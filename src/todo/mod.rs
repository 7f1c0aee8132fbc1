//! To-do domain models and business logic
//!
//! This module contains the core data structures and their implementations,
//! split into submodules:
//! - `item`: the Todo entity, its derived predicates, and TodoPatch
//! - `list`: the TodoList container with all mutating operations
//! - `queries`: named filters and orderings over the collection
//! - `serde_impl`: serialization/deserialization implementations

mod item;
mod list;
mod queries;
mod serde_impl;

// Re-export all public types
pub use item::{DUE_SOON_DAYS, Todo, TodoPatch};
pub use list::TodoList;
pub use queries::TodoFilter;
