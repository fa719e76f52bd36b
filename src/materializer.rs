//! The materialization pipeline.
//!
//! Phases run strictly in order: plan, create target, copy, feature-gated
//! deletions, placeholder rewrite, generated content, repository. A failure
//! in any phase between creating the target and the repository removes the
//! target again; the repository phase only ever warns.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::TemplateConfig;
use crate::constants::REWRITE_FILES;
use crate::error::{Error, Result};
use crate::features::FeatureSelection;
use crate::generate::{write_file, write_generated};
use crate::ignore::parse_ignore_file;
use crate::name::ProjectName;
use crate::plan::Plan;
use crate::renderer::{render_context, MiniJinjaRenderer, TemplateRenderer};
use crate::repository::{init_repository, RepositoryStatus};
use crate::rewrite::Substitutions;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Materialized {
    pub target: PathBuf,
    /// Generated files, relative to `target`
    pub generated: Vec<PathBuf>,
    pub repository: RepositoryStatus,
}

/// Removes the target directory on drop unless disarmed.
struct TargetGuard<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> TargetGuard<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TargetGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        debug!("Cleaning up '{}'", self.path.display());
        if let Err(e) = fs::remove_dir_all(self.path) {
            warn!("Failed to clean up '{}': {}", self.path.display(), e);
        }
    }
}

/// Creates `target` itself, refusing to reuse an existing directory.
fn create_target(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| Error::CopyFailed { path: parent.to_path_buf(), source })?;
    }
    fs::create_dir(target).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => Error::AlreadyExists { target: target.to_path_buf() },
        _ => Error::CopyFailed { path: target.to_path_buf(), source },
    })
}

/// Copies every non-ignored entry of `source` into `target`.
///
/// Symlinks are followed, so a dangling link fails the copy.
///
/// # Returns
/// * `Result<usize>` - number of files copied
pub fn copy_tree(source: &Path, target: &Path, ignored: &GlobSet) -> Result<usize> {
    let canonical = |path: &Path| {
        fs::canonicalize(path).map_err(|e| Error::CopyFailed { path: path.to_path_buf(), source: e })
    };
    let source_root = canonical(source)?;
    let target_root = canonical(target)?;

    let walker = WalkDir::new(&source_root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // The target may live inside the template.
            if entry.path().starts_with(&target_root) {
                return false;
            }
            match entry.path().strip_prefix(&source_root) {
                Ok(relative) if ignored.is_match(relative) => {
                    debug!("Skipping '{}' (ignored)", relative.display());
                    false
                }
                _ => true,
            }
        });

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|e| Error::CopyFailed {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| source_root.clone()),
            source: e.into(),
        })?;
        let Ok(relative) = entry.path().strip_prefix(&source_root) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let dest = target_root.join(relative);
        let copy_failed = |source| Error::CopyFailed { path: entry.path().to_path_buf(), source };
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(copy_failed)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(copy_failed)?;
            }
            fs::copy(entry.path(), &dest).map_err(copy_failed)?;
            debug!("Copying file: {}", dest.display());
            copied += 1;
        }
    }
    Ok(copied)
}

/// Removes a file or a whole directory. A missing path is not an error.
fn remove_path(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path).map(|_| true),
        Ok(_) => fs::remove_file(path).map(|_| true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Applies the plan's deletions and stubs to `target`.
pub fn apply_feature_rules(target: &Path, plan: &Plan) -> Result<()> {
    for relative in &plan.deletions {
        let path = target.join(relative);
        let removed = remove_path(&path)
            .map_err(|source| Error::DeleteFailed { path: path.clone(), source })?;
        if removed {
            debug!("Removed: {}", relative.display());
        }
    }
    for stub in &plan.stubs {
        write_file(&target.join(stub.path), stub.content)?;
    }
    Ok(())
}

/// Drives one materialization.
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    config: &'a TemplateConfig,
    init_repository: bool,
}

impl<'a> Materializer<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, config: &'a TemplateConfig) -> Self {
        Self { renderer, config, init_repository: true }
    }

    /// Enables or disables the repository phase.
    pub fn init_repository(mut self, enabled: bool) -> Self {
        self.init_repository = enabled;
        self
    }

    /// Materializes `source` into `target`.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExist` if `source` is not a directory
    /// * `Error::AlreadyExists` if `target` exists
    /// * `Error::TemplateMissing` if the selected variant is incomplete
    /// * `Error::CopyFailed`, `Error::DeleteFailed`, `Error::RewriteFailed`
    ///   if a filesystem phase fails; `target` is removed first
    pub fn materialize(
        &self,
        source: &Path,
        target: &Path,
        name: &ProjectName,
        features: &FeatureSelection,
    ) -> Result<Materialized> {
        if !source.is_dir() {
            return Err(Error::TemplateDoesNotExist {
                template_dir: source.display().to_string(),
            });
        }
        if target.exists() {
            return Err(Error::AlreadyExists { target: target.to_path_buf() });
        }

        let plan = Plan::build(source, features)?;
        let ignored = parse_ignore_file(source)?;
        let substitutions = Substitutions::for_project(name);
        let context = render_context(name, features);
        let commit_message = self.renderer.render(&self.config.commit_message, &context)?;

        println!("Creating project '{}' in {}", name, target.display());
        create_target(target)?;
        let guard = TargetGuard::new(target);

        println!("Copying template files...");
        let copied = copy_tree(source, target, &ignored)?;
        debug!("Copied {copied} files");

        if !plan.deletions.is_empty() {
            println!("Removing files of disabled features...");
        }
        apply_feature_rules(target, &plan)?;

        println!("Updating project configuration...");
        for file in REWRITE_FILES {
            substitutions.rewrite_file(&target.join(file))?;
        }

        println!("Writing generated files...");
        let generated =
            write_generated(target, &plan.variant, &substitutions, self.renderer, &context)?;

        guard.disarm();

        let repository = if self.init_repository {
            println!("Initializing git repository...");
            match init_repository(target, &self.config.branch, &commit_message) {
                Ok(commit) => RepositoryStatus::Initialized {
                    branch: self.config.branch.clone(),
                    commit,
                },
                Err(e) => {
                    warn!("Git initialization failed: {e:#}");
                    RepositoryStatus::Failed(format!("{e:#}"))
                }
            }
        } else {
            RepositoryStatus::Skipped
        };

        Ok(Materialized { target: target.to_path_buf(), generated, repository })
    }
}

/// Materializes with the built-in renderer and the template's configuration.
pub fn materialize(
    source: &Path,
    target: &Path,
    name: &ProjectName,
    features: &FeatureSelection,
) -> Result<Materialized> {
    let renderer = MiniJinjaRenderer::new();
    let config = crate::config::get_config(source)?;
    Materializer::new(&renderer, &config).materialize(source, target, name, features)
}
