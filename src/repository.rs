//! Repository initialisation for a freshly materialized project.
//!
//! Everything here is best effort: the materializer turns any error into a
//! warning, so the functions return `anyhow::Result` with context attached
//! instead of adding variants to the crate error.

use std::path::Path;

use anyhow::{Context, Result};
use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};
use log::debug;

use crate::constants::{FALLBACK_AUTHOR_EMAIL, FALLBACK_AUTHOR_NAME};

/// Outcome of the repository phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryStatus {
    /// Repository created with one commit
    Initialized { branch: String, commit: String },
    /// Disabled by the caller
    Skipped,
    /// Initialisation failed, the project itself is complete
    Failed(String),
}

fn signature(repo: &Repository) -> Result<Signature<'static>> {
    match repo.signature() {
        Ok(signature) => Ok(signature.to_owned()),
        Err(e) => {
            debug!("No git identity configured ({e}), using fallback");
            Signature::now(FALLBACK_AUTHOR_NAME, FALLBACK_AUTHOR_EMAIL)
                .context("failed to create commit signature")
        }
    }
}

/// Creates a repository in `path` on `branch`, stages every file not ignored
/// by the project's `.gitignore` and commits them with `message`.
///
/// # Returns
/// * the id of the initial commit
pub fn init_repository(path: &Path, branch: &str, message: &str) -> Result<String> {
    let mut options = RepositoryInitOptions::new();
    options.initial_head(branch);
    let repo = Repository::init_opts(path, &options)
        .with_context(|| format!("failed to initialize repository in '{}'", path.display()))?;

    let mut index = repo.index().context("failed to open index")?;
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .context("failed to stage files")?;
    index.write().context("failed to write index")?;

    let tree_id = index.write_tree().context("failed to write tree")?;
    let tree = repo.find_tree(tree_id)?;
    let signature = signature(&repo)?;

    let commit = repo
        .commit(Some("HEAD"), &signature, &signature, message, &tree, &[])
        .context("failed to create initial commit")?;
    debug!("Created commit {commit} on '{branch}'");

    Ok(commit.to_string())
}
