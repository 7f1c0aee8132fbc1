//! MCP tool handlers for the to-do server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod toggle;
pub mod update;
