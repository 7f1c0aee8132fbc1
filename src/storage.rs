use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::git_ops::GitOps;
use crate::todo::TodoList;

/// File-based TOML storage for the todo list, with optional Git sync
///
/// When `sync_git` is set and the data file lives inside a repository,
/// every save produces a commit, `load` fast-forwards from origin first,
/// and `shutdown` pushes the accumulated commits.
pub struct Storage {
    file_path: PathBuf,
    sync_git: bool,
    git: GitOps,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>, sync_git: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git = GitOps::new(&file_path);
        Self {
            file_path,
            sync_git,
            git,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the todo list, or an empty one when the file does not exist yet
    pub fn load(&self) -> Result<TodoList> {
        if self.sync_git && self.git.is_git_managed() {
            // Stale local state is worse than a failed pull; keep going
            if let Err(e) = self.git.pull() {
                eprintln!("Warning: Git pull failed: {}", e);
            }
        }

        if !self.file_path.exists() {
            return Ok(TodoList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let list: TodoList = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        Ok(list)
    }

    /// Save with a default commit message
    pub fn save(&self, list: &TodoList) -> Result<()> {
        self.save_with_message(list, "Update todo list")
    }

    /// Write the file and, when Git sync is on, commit it with the message
    pub fn save_with_message(&self, list: &TodoList, message: &str) -> Result<()> {
        let content = toml::to_string_pretty(list)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;

        if self.sync_git {
            self.git
                .commit(&self.file_path, message)
                .context("Failed to commit data file")?;
        }

        Ok(())
    }

    /// Push pending commits on shutdown when Git sync is on
    pub fn shutdown(&self) -> Result<()> {
        if self.sync_git && self.git.is_git_managed() {
            self.git.push().context("Failed to push data file")?;
        }
        Ok(())
    }
}
