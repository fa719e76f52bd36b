//! Copy-phase exclusion patterns.
//! Built-in patterns cover version-control metadata, bytecode caches, OS
//! metadata, generated migrations and kiln's own files; a template can add
//! more in a `.kilnignore` file, one glob per line, like `.gitignore`.

use crate::constants::{CONFIG_FILES, IGNORE_FILE, VARIANTS_DIR};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Patterns matched against paths relative to the template root.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 5] =
    ["**/.git", "**/__pycache__", "**/*.pyc", "**/.DS_Store", "alembic/versions/*.py"];

fn add_pattern(builder: &mut GlobSetBuilder, pattern: &str) -> Result<()> {
    builder.add(
        Glob::new(pattern)
            .map_err(|e| Error::IgnoreError(format!("invalid pattern '{pattern}': {e}")))?,
    );
    Ok(())
}

/// Reads `.kilnignore` from the template root and combines it with the
/// built-in patterns.
///
/// # Notes
/// - A missing `.kilnignore` yields just the built-in patterns
/// - Blank lines and lines starting with `#` are skipped
/// - The variants directory, configuration files and the ignore file itself
///   are always excluded
pub fn parse_ignore_file<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_IGNORE_PATTERNS {
        add_pattern(&mut builder, pattern)?;
    }
    for pattern in CONFIG_FILES.into_iter().chain([IGNORE_FILE, VARIANTS_DIR]) {
        add_pattern(&mut builder, pattern)?;
    }

    let ignore_path = template_root.as_ref().join(IGNORE_FILE);
    if let Ok(contents) = read_to_string(&ignore_path) {
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            add_pattern(&mut builder, line.trim_end_matches('/'))?;
        }
    } else {
        debug!("{} does not exist", ignore_path.display());
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))
}
