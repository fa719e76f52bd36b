//! Common constants used throughout kiln: the template file layout and the
//! fixed values a materialized project starts with.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["kiln.json", "kiln.yml", "kiln.yaml"];

/// kiln's ignore file name
pub const IGNORE_FILE: &str = ".kilnignore";

/// Directory holding the per-`dev_environment` alternates.
pub const VARIANTS_DIR: &str = "variants";

/// Project name used when none is entered.
pub const DEFAULT_PROJECT_NAME: &str = "my-fastapi-project";

pub const DEFAULT_BRANCH: &str = "main";

pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit for {{ project_title }}";

/// Identity used for the initial commit when git has none configured.
pub const FALLBACK_AUTHOR_NAME: &str = "kiln";
pub const FALLBACK_AUTHOR_EMAIL: &str = "kiln@localhost";

pub const APP_CONFIG_FILE: &str = "app/core/config.py";
pub const README_FILE: &str = "README.md";
pub const ENV_EXAMPLE_FILE: &str = "env.example";
pub const ENV_FILE: &str = ".env";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const DB_HELPER_FILE: &str = "wait-for-db.sh";

/// Files whose placeholder markers are rewritten after the copy.
pub const REWRITE_FILES: [&str; 3] = [APP_CONFIG_FILE, README_FILE, ENV_EXAMPLE_FILE];

pub const ALEMBIC_DIR: &str = "alembic";
pub const ALEMBIC_VERSIONS_INIT: &str = "alembic/versions/__init__.py";

/// Line printed last so shell callers can capture the project name.
pub const PROJECT_NAME_PREFIX: &str = "PROJECT_NAME=";
