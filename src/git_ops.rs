use anyhow::{Context, Result};
use git2::{Repository, Signature, Time};
use std::path::Path;
use std::sync::Mutex;

/// Git operations for keeping the data file under version control
///
/// Constructed from the data file's location; when no repository encloses
/// it, every operation is a no-op.
pub struct GitOps {
    repo: Option<Mutex<Repository>>,
}

impl GitOps {
    /// Detect the repository enclosing the data file, if any
    pub fn new(file_path: &Path) -> Self {
        let dir = if file_path.is_file() {
            file_path.parent().unwrap_or(file_path)
        } else {
            file_path
        };
        let repo = Repository::discover(dir).ok().map(Mutex::new);
        Self { repo }
    }

    /// Check if the data file is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Stage the data file and commit it with the given message
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<()> {
        let Some(repo) = &self.repo else {
            return Ok(());
        };
        let repo = repo.lock().unwrap();

        let workdir = repo
            .workdir()
            .context("Repository has no working directory")?;
        let relative_path = file_path
            .strip_prefix(workdir)
            .context("File is not in repository")?;

        let mut index = repo.index()?;
        index.add_path(relative_path)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        // HEAD is absent before the first commit
        let parent = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None,
        };
        let parents: Vec<_> = parent.iter().collect();

        let signature = Self::signature(&repo)?;
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

        Ok(())
    }

    /// Fast-forward the current branch from origin
    ///
    /// Diverged histories are not merged automatically; the caller gets an
    /// error and has to resolve by hand.
    pub fn pull(&self) -> Result<()> {
        let Some(repo) = &self.repo else {
            return Ok(());
        };
        let repo = repo.lock().unwrap();

        let head = repo.head().context("Failed to get HEAD")?;
        let branch = head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string();

        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;
        remote
            .fetch(&[&branch], None, None)
            .context("Failed to fetch from origin")?;

        let fetch_head = repo.find_reference("FETCH_HEAD")?;
        let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;
        let (analysis, _) = repo.merge_analysis(&[&fetch_commit])?;

        if analysis.is_up_to_date() {
            return Ok(());
        }
        if analysis.is_fast_forward() {
            let refname = format!("refs/heads/{}", branch);
            let mut reference = repo.find_reference(&refname)?;
            reference.set_target(fetch_commit.id(), "Fast-forward")?;
            repo.set_head(&refname)?;
            repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;
            return Ok(());
        }

        Err(anyhow::anyhow!(
            "Merge required but automatic merge is not supported. Please resolve manually."
        ))
    }

    /// Push the current branch to origin
    pub fn push(&self) -> Result<()> {
        let Some(repo) = &self.repo else {
            return Ok(());
        };
        let repo = repo.lock().unwrap();

        let head = repo.head().context("Failed to get HEAD")?;
        let branch = head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string();

        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;
        remote.push(&[&format!("refs/heads/{}", branch)], None)?;

        Ok(())
    }

    /// Commit signature from repo config, with fallbacks for bare environments
    fn signature(repo: &Repository) -> Result<Signature<'_>> {
        let config = repo.config()?;
        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "Todo MCP Server".to_string());
        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "todo-mcp@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Some CI systems reject Signature::now; fall back to a fixed time
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time).context("Failed to create signature")
            }
        }
    }
}
