//! Placeholder rewriting.
//!
//! Markers are literal strings, not template syntax: `{{project_title}}`
//! inside a rewrite file is replaced byte for byte, and nothing else in the
//! file is interpreted.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::name::ProjectName;

/// Marker → replacement pairs, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    rules: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with(mut self, marker: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.rules.push((marker.into(), replacement.into()));
        self
    }

    /// The fixed marker set derived from a project name.
    pub fn for_project(name: &ProjectName) -> Self {
        let title = name.title();
        Self::new()
            .with("Your FastAPI Project", title.clone())
            .with("{{project_name}}", name.as_str())
            .with("{{project_title}}", title)
            .with("{{project_slug}}", name.lowercase())
            .with("{{database_name}}", name.snake())
    }

    pub fn apply(&self, content: &str) -> String {
        self.rules
            .iter()
            .fold(content.to_string(), |acc, (marker, replacement)| {
                acc.replace(marker.as_str(), replacement)
            })
    }

    /// Rewrites `path` in place.
    ///
    /// # Returns
    /// * `Result<bool>` - whether the file existed and its content changed
    ///
    /// A missing file or a file without markers is left alone.
    pub fn rewrite_file(&self, path: &Path) -> Result<bool> {
        if !path.is_file() {
            debug!("Nothing to rewrite, '{}' does not exist", path.display());
            return Ok(false);
        }

        let rewrite_failed =
            |source| Error::RewriteFailed { file: path.to_path_buf(), source };
        let content = fs::read_to_string(path).map_err(rewrite_failed)?;
        let rewritten = self.apply(&content);
        if rewritten == content {
            debug!("No markers in '{}'", path.display());
            return Ok(false);
        }
        fs::write(path, rewritten).map_err(rewrite_failed)?;
        debug!("Rewrote '{}'", path.display());
        Ok(true)
    }
}

impl Default for Substitutions {
    fn default() -> Self {
        Substitutions::new()
    }
}
