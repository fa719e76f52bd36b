//! kiln's main application entry point.
//! Parses arguments, resolves the project name and features, and runs the
//! materializer.

use std::path::{Path, PathBuf};

use kiln::{
    answers::{load_from_stdin, resolve_features},
    cli::{get_args, Args},
    config::get_config,
    constants::PROJECT_NAME_PREFIX,
    error::{default_error_handler, Error, Result},
    generate::next_steps,
    logger::init_logger,
    materializer::Materializer,
    prompt::{resolve_project_name, DialoguerPrompter},
    renderer::{render_context, MiniJinjaRenderer},
    repository::RepositoryStatus,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Resolves the template root to an absolute path.
fn get_template_root(template: &Path) -> Result<PathBuf> {
    if !template.is_dir() {
        return Err(Error::TemplateDoesNotExist {
            template_dir: template.display().to_string(),
        });
    }
    Ok(std::fs::canonicalize(template)?)
}

/// Directory the project is created in: `--output-dir`, or the template's parent.
fn get_output_root(template_root: &Path, output_dir: Option<PathBuf>) -> PathBuf {
    output_dir
        .or_else(|| template_root.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template configuration
/// 2. Resolves the project name (argument, prompt or default)
/// 3. Resolves the feature selection (config, stdin, --set)
/// 4. Materializes the project
/// 5. Prints next steps and the captured project name
fn run(args: Args) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    let template_root = get_template_root(&args.template)?;
    let config = get_config(&template_root)?;

    let name = resolve_project_name(
        &prompt,
        args.name.as_deref(),
        &config.default_name,
        !args.no_input,
    )?;

    let answers = if args.stdin { load_from_stdin()? } else { serde_json::Value::Null };
    let features = resolve_features(&config.defaults, &answers, &args.set)?;

    let target = get_output_root(&template_root, args.output_dir).join(name.as_str());

    let result = Materializer::new(&renderer, &config)
        .init_repository(!args.no_git)
        .materialize(&template_root, &target, &name, &features)?;

    match &result.repository {
        RepositoryStatus::Initialized { branch, .. } => {
            println!("Git repository initialized with '{branch}' branch")
        }
        RepositoryStatus::Failed(_) => {
            println!("Git initialization failed; the project was created without a repository")
        }
        RepositoryStatus::Skipped => {}
    }

    println!("Project created successfully in {}.", result.target.display());
    print!("{}", next_steps(&renderer, &render_context(&name, &features), &result.target)?);
    println!("{PROJECT_NAME_PREFIX}{name}");
    Ok(())
}
