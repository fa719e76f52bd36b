//! Error handling for kiln.
//! Defines the error taxonomy and the result type used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a materialization.
///
/// Every variant is fatal: the caller gets a non-zero exit and the target
/// directory is removed if it had already been created. Advisory problems
/// (the repository phase) never surface through this type.
#[derive(Error, Debug)]
pub enum Error {
    /// The target directory exists before the run starts.
    #[error("Directory '{}' already exists. Choose a different project name or remove it.", .target.display())]
    AlreadyExists { target: PathBuf },

    /// The project name is empty once every disallowed character is removed.
    #[error("Invalid project name '{input}': only letters, numbers, hyphens and underscores are allowed.")]
    InvalidName { input: String },

    /// Copying the template tree failed.
    #[error("Failed to copy '{}': {source}.", .path.display())]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removing a feature-gated path failed.
    #[error("Failed to remove '{}': {source}.", .path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing a rewritten or generated file failed.
    #[error("Failed to rewrite '{}': {source}.", .file.display())]
    RewriteFailed {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file required by the selected development environment is absent.
    #[error("Template variant '{variant}' is incomplete: '{}' is missing.", .path.display())]
    TemplateMissing { variant: String, path: PathBuf },

    /// The template root does not exist or is not a directory.
    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExist { template_dir: String },

    /// A feature option name that kiln does not know about.
    #[error("Unknown option '{option}'.")]
    UnknownOption { option: String },

    /// A known option with a value outside its allowed set.
    #[error("Invalid value '{value}' for option '{option}' (expected one of: {expected}).")]
    InvalidOption { option: String, value: String, expected: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in processing .kilnignore files
    #[error("KilnIgnore error: {0}.")]
    IgnoreError(String),

    /// Interactive input could not be read.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Rendering a generated file failed.
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
