//! Feature-gated file plan.
//!
//! Which files a feature owns is declared once in [`RULES`]. A [`Plan`] is
//! the result of evaluating that table and the selected variant against a
//! [`FeatureSelection`]; it is built before the target directory exists, so
//! a template missing a variant file fails without touching the filesystem.

use std::path::{Path, PathBuf};

use crate::constants::{
    COMPOSE_FILE, DB_HELPER_FILE, ENV_EXAMPLE_FILE, README_FILE, VARIANTS_DIR,
};
use crate::error::{Error, Result};
use crate::features::{DevEnvironment, FeatureOption, FeatureSelection};

/// A file whose content is replaced outright when a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stub {
    pub path: &'static str,
    pub content: &'static str,
}

/// Files owned by one option value.
#[derive(Debug, Clone, Copy)]
pub struct FeatureRule {
    pub option: FeatureOption,
    pub value: &'static str,
    /// Removed from the target, files or whole directories
    pub delete: &'static [&'static str],
    /// Written after the deletions
    pub stubs: &'static [Stub],
}

const MODELS_STUB: &str = r#""""
Models package
Import all models here to make them discoverable for Alembic
"""
# Import your models here
# from .your_model import YourModel

__all__ = []
"#;

const SCHEMAS_STUB: &str = r#""""
Schemas package
Import all Pydantic schemas here
"""
# Import your schemas here
# from .your_schema import YourSchema

__all__ = []
"#;

const CRUD_STUB: &str = r#""""
CRUD operations package
Import all CRUD operations here
"""
# Import your CRUD operations here
# from .your_crud import your_crud_operations

__all__ = []
"#;

const API_ROUTER_STUB: &str = r#"from fastapi import APIRouter

api_router = APIRouter()

# Add your additional routers here
# api_router.include_router(your_router.router, prefix="/your-endpoint", tags=["your-tag"])
"#;

const ENDPOINTS_STUB: &str = "# Import your endpoint routers here\n";

pub const RULES: &[FeatureRule] = &[
    FeatureRule {
        option: FeatureOption::IncludeUserModel,
        value: "no",
        delete: &[
            "app/models/user.py",
            "app/schemas/user.py",
            "app/crud/user.py",
            "app/api/v1/endpoints/users.py",
            "tests/test_users.py",
        ],
        stubs: &[
            Stub { path: "app/models/__init__.py", content: MODELS_STUB },
            Stub { path: "app/schemas/__init__.py", content: SCHEMAS_STUB },
            Stub { path: "app/crud/__init__.py", content: CRUD_STUB },
            Stub { path: "app/api/v1/api.py", content: API_ROUTER_STUB },
            Stub { path: "app/api/v1/endpoints/__init__.py", content: ENDPOINTS_STUB },
        ],
    },
    FeatureRule {
        option: FeatureOption::IncludeAdmin,
        value: "no",
        delete: &["app/admin"],
        stubs: &[],
    },
    FeatureRule {
        option: FeatureOption::IncludeDocker,
        value: "no",
        delete: &["Dockerfile", "docker-compose.yml", ".dockerignore"],
        stubs: &[],
    },
    FeatureRule {
        option: FeatureOption::IncludeTesting,
        value: "none",
        delete: &["tests", "pytest.ini", "conftest.py"],
        stubs: &[],
    },
    FeatureRule {
        option: FeatureOption::IncludeGithubActions,
        value: "no",
        delete: &[".github"],
        stubs: &[],
    },
];

/// Variant files for the selected development environment, as absolute
/// paths inside the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFiles {
    pub environment: DevEnvironment,
    pub readme: PathBuf,
    pub env_example: PathBuf,
    /// Present for the docker-based environments unless docker is disabled
    pub compose: Option<PathBuf>,
    /// Optional database-readiness helper
    pub db_helper: Option<PathBuf>,
}

impl VariantFiles {
    /// Locates the files of `environment` under `template_root`.
    ///
    /// # Errors
    /// * `Error::TemplateMissing` if the README, the env example, or (when
    ///   `with_compose` is set) the compose file is absent
    pub fn resolve(
        template_root: &Path,
        environment: DevEnvironment,
        with_compose: bool,
    ) -> Result<Self> {
        let dir = template_root.join(VARIANTS_DIR).join(environment.as_str());
        let required = |file: &str| {
            let path = dir.join(file);
            if path.is_file() {
                Ok(path)
            } else {
                Err(Error::TemplateMissing { variant: environment.to_string(), path })
            }
        };

        let readme = required(README_FILE)?;
        let env_example = required(ENV_EXAMPLE_FILE)?;
        let compose = if with_compose { Some(required(COMPOSE_FILE)?) } else { None };
        let db_helper = Some(dir.join(DB_HELPER_FILE)).filter(|p| p.is_file());

        Ok(Self { environment, readme, env_example, compose, db_helper })
    }
}

/// Everything the deletion and generation phases will do.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Paths relative to the target root
    pub deletions: Vec<PathBuf>,
    pub stubs: Vec<Stub>,
    pub variant: VariantFiles,
}

impl Plan {
    pub fn build(template_root: &Path, features: &FeatureSelection) -> Result<Self> {
        features.warn_conflicts();

        let active = || RULES.iter().filter(|rule| features.value(rule.option) == rule.value);

        let deletions = active()
            .flat_map(|rule| rule.delete.iter().copied().map(PathBuf::from))
            .collect();
        let stubs = active().flat_map(|rule| rule.stubs.iter().copied()).collect();
        let variant = VariantFiles::resolve(
            template_root,
            features.dev_environment,
            features.writes_compose(),
        )?;

        Ok(Self { deletions, stubs, variant })
    }
}
