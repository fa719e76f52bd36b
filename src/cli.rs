//! Command-line interface implementation for kiln.
//! Provides argument parsing and help text formatting using clap.

use crate::answers::parse_assignment;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "kiln: materialize a new web application project from a boilerplate template", long_about = None)]
pub struct Args {
    /// Name of the project to create; prompted for when omitted
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Path to the template directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub template: PathBuf,

    /// Directory the project directory is created in [default: parent of the template]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Set a feature option, e.g. `--set include_docker=no`
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Read feature answers as a JSON object from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Never prompt; use the default project name when NAME is omitted
    #[arg(long)]
    pub no_input: bool,

    /// Skip git repository initialization
    #[arg(long)]
    pub no_git: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
