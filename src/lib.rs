//! kiln materializes a CRUD web application project from a boilerplate
//! template: it copies the tree, drops the files of disabled features,
//! rewrites placeholders, writes the files of the chosen development
//! environment and commits the result to a fresh git repository.

/// Preset feature answers from stdin and the command line
pub mod answers;

/// Command-line interface module for the kiln application
pub mod cli;

/// Template configuration (kiln.json, kiln.yml, kiln.yaml)
pub mod config;

/// Template layout and fixed values
pub mod constants;

/// Error types and handling for the kiln application
pub mod error;

/// Feature options and their values
pub mod features;

/// Generated files: ignore file, README, env files, compose file
pub mod generate;

/// Copy-phase exclusion patterns, including .kilnignore
pub mod ignore;

pub mod logger;

/// The ordered materialization pipeline
pub mod materializer;

/// Project name sanitisation and derived forms
pub mod name;

/// Declarative feature → files table
pub mod plan;

/// User input and interaction handling
pub mod prompt;

/// MiniJinja rendering of generated text
pub mod renderer;

/// Best-effort git repository initialisation
pub mod repository;

/// Literal placeholder substitution
pub mod rewrite;
