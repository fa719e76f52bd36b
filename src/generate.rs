//! Generated-content phase: files that are not copied verbatim from the
//! template but composed from built-in text or from the selected variant.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{
    ALEMBIC_DIR, ALEMBIC_VERSIONS_INIT, COMPOSE_FILE, DB_HELPER_FILE, ENV_EXAMPLE_FILE, ENV_FILE,
    GITIGNORE_FILE, README_FILE,
};
use crate::error::{Error, Result};
use crate::plan::VariantFiles;
use crate::renderer::TemplateRenderer;
use crate::rewrite::Substitutions;

pub const GITIGNORE_TEMPLATE: &str = r#"# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST

# Virtual environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# Database
*.db
*.sqlite3

# Logs
logs/
*.log

# OS
.DS_Store
Thumbs.db

# Alembic
alembic/versions/*.py
!alembic/versions/__init__.py
{% if features.include_docker == "yes" %}
# Docker
.docker-data/
{% endif %}{% if features.include_testing != "none" %}
# Testing
.pytest_cache/
.coverage
htmlcov/
{% endif %}
# Local development
.env.local
.env.development
.env.test
"#;

pub const NEXT_STEPS_TEMPLATE: &str = r#"Next steps:
{% if features.dev_environment == "full_docker" %}  1. cd {{ target }}
  2. docker-compose up
  3. Visit http://localhost:8000/docs
{% elif features.dev_environment == "docker_db_local_app" %}  1. cd {{ target }}
  2. python -m venv venv && source venv/bin/activate
  3. pip install -r requirements.txt
  4. docker-compose up db -d
  5. alembic revision --autogenerate -m 'Initial migration'
  6. alembic upgrade head
  7. uvicorn app.main:app --reload
  8. Visit http://localhost:8000/docs
{% else %}  1. cd {{ target }}
  2. createdb {{ database_name }}
  3. python -m venv venv && source venv/bin/activate
  4. pip install -r requirements.txt
  5. Edit .env with your database settings
  6. alembic revision --autogenerate -m 'Initial migration'
  7. alembic upgrade head
  8. uvicorn app.main:app --reload
  9. Visit http://localhost:8000/docs
{% endif %}"#;

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    let write_failed = |source| Error::RewriteFailed { file: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_failed)?;
    }
    fs::write(path, content).map_err(write_failed)?;
    debug!("Writing file: {}", path.display());
    Ok(())
}

fn read_variant(path: &Path, substitutions: &Substitutions) -> Result<String> {
    let content = fs::read_to_string(path)
        .map_err(|source| Error::RewriteFailed { file: path.to_path_buf(), source })?;
    Ok(substitutions.apply(&content))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|source| Error::RewriteFailed { file: path.to_path_buf(), source })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Writes every generated artifact into `target`.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - the files written, relative to `target`
pub fn write_generated(
    target: &Path,
    variant: &VariantFiles,
    substitutions: &Substitutions,
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut emit = |relative: &str, content: &str| -> Result<()> {
        write_file(&target.join(relative), content)?;
        written.push(PathBuf::from(relative));
        Ok(())
    };

    let gitignore = renderer.render(GITIGNORE_TEMPLATE, context)?;
    emit(GITIGNORE_FILE, &gitignore)?;

    emit(README_FILE, &read_variant(&variant.readme, substitutions)?)?;

    let env_example = read_variant(&variant.env_example, substitutions)?;
    emit(ENV_EXAMPLE_FILE, &env_example)?;
    emit(ENV_FILE, &env_example)?;

    match &variant.compose {
        Some(compose) => emit(COMPOSE_FILE, &read_variant(compose, substitutions)?)?,
        None => {
            let stale = target.join(COMPOSE_FILE);
            if stale.exists() {
                fs::remove_file(&stale)
                    .map_err(|source| Error::DeleteFailed { path: stale.clone(), source })?;
                debug!("Removed compose file '{}'", stale.display());
            }
        }
    }

    if let Some(helper) = &variant.db_helper {
        emit(DB_HELPER_FILE, &read_variant(helper, substitutions)?)?;
        make_executable(&target.join(DB_HELPER_FILE))?;
    }

    if target.join(ALEMBIC_DIR).is_dir() && !target.join(ALEMBIC_VERSIONS_INIT).exists() {
        emit(ALEMBIC_VERSIONS_INIT, "# Alembic migration versions\n")?;
    }

    Ok(written)
}

/// Instructions printed after a successful run.
pub fn next_steps(
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
    target: &Path,
) -> Result<String> {
    let mut context = context.clone();
    if let Some(object) = context.as_object_mut() {
        object.insert("target".to_string(), target.display().to_string().into());
    }
    renderer.render(NEXT_STEPS_TEMPLATE, &context)
}
