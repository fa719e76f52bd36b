#![allow(dead_code)]

use std::fs;
use std::path::Path;

use kiln::config::TemplateConfig;
use kiln::error::Result;
use kiln::features::FeatureSelection;
use kiln::materializer::{Materialized, Materializer};
use kiln::name::ProjectName;
use kiln::renderer::MiniJinjaRenderer;

pub const FULL_DOCKER_README: &str = "# {{project_title}}\n\nRun `docker-compose up`.\n";
pub const FULL_DOCKER_COMPOSE: &str =
    "services:\n  app:\n    build: .\n  db:\n    environment:\n      POSTGRES_DB: {{database_name}}\n";
pub const DB_LOCAL_README: &str = "# {{project_title}}\n\nDatabase in docker, app on the host.\n";
pub const DB_LOCAL_COMPOSE: &str =
    "services:\n  db:\n    environment:\n      POSTGRES_DB: {{database_name}}\n";
pub const LOCAL_README: &str = "# {{project_title}}\n\nEverything runs locally.\n";

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Writes a small boilerplate tree shaped like the FastAPI template.
pub fn write_template(root: &Path) {
    write(root, "app/__init__.py", "");
    write(
        root,
        "app/main.py",
        "from fastapi import FastAPI\n\napp = FastAPI(title=\"Your FastAPI Project\")\n",
    );
    write(
        root,
        "app/core/config.py",
        "class Settings:\n    project_name: str = \"Your FastAPI Project\"\n",
    );
    write(root, "app/models/__init__.py", "from .user import User\n\n__all__ = [\"User\"]\n");
    write(root, "app/models/user.py", "class User:\n    pass\n");
    write(root, "app/schemas/__init__.py", "from .user import UserBase\n");
    write(root, "app/schemas/user.py", "class UserBase:\n    pass\n");
    write(root, "app/crud/__init__.py", "from .user import get_user\n");
    write(root, "app/crud/user.py", "def get_user():\n    pass\n");
    write(
        root,
        "app/api/v1/api.py",
        "from app.api.v1.endpoints import users\n\napi_router.include_router(users.router)\n",
    );
    write(root, "app/api/v1/endpoints/__init__.py", "");
    write(root, "app/api/v1/endpoints/users.py", "router = None\n");
    write(root, "app/admin/__init__.py", "");
    write(root, "app/admin/views.py", "views = []\n");
    write(root, "tests/conftest.py", "");
    write(root, "tests/test_users.py", "def test_users():\n    pass\n");
    write(root, "pytest.ini", "[pytest]\n");
    write(root, "Dockerfile", "FROM python:3.12\n");
    write(root, "docker-compose.yml", "services: {}\n");
    write(root, ".dockerignore", ".git\n");
    write(root, ".github/workflows/ci.yml", "name: CI\n");
    write(root, "requirements.txt", "fastapi\n");
    write(root, "README.md", "# Boilerplate {{project_title}}\n");
    write(root, "env.example", "PROJECT_NAME={{project_title}}\n");
    write(root, "alembic/env.py", "");
    write(root, "alembic/versions/0001_initial.py", "revision = '0001'\n");

    // Never copied
    write(root, ".git/HEAD", "ref: refs/heads/main\n");
    write(root, "__pycache__/main.cpython-312.pyc", "");
    write(root, "app/__pycache__/main.cpython-312.pyc", "");
    write(root, "app/stale.pyc", "");
    write(root, ".DS_Store", "");

    write(root, "variants/full_docker/README.md", FULL_DOCKER_README);
    write(root, "variants/full_docker/env.example", "DATABASE_URL=postgresql://db/{{database_name}}\n");
    write(root, "variants/full_docker/docker-compose.yml", FULL_DOCKER_COMPOSE);
    write(root, "variants/docker_db_local_app/README.md", DB_LOCAL_README);
    write(
        root,
        "variants/docker_db_local_app/env.example",
        "DATABASE_URL=postgresql://localhost/{{database_name}}\n",
    );
    write(root, "variants/docker_db_local_app/docker-compose.yml", DB_LOCAL_COMPOSE);
    write(
        root,
        "variants/docker_db_local_app/wait-for-db.sh",
        "#!/bin/sh\nuntil pg_isready -d {{database_name}}; do sleep 1; done\n",
    );
    write(root, "variants/local_development/README.md", LOCAL_README);
    write(
        root,
        "variants/local_development/env.example",
        "DATABASE_URL=postgresql://localhost/{{database_name}}\n",
    );
}

pub fn features(pairs: &[(&str, &str)]) -> FeatureSelection {
    let mut selection = FeatureSelection::default();
    for (option, value) in pairs {
        selection.set(option, value).unwrap();
    }
    selection
}

/// Runs a materialization without the repository phase.
pub fn run(
    template: &Path,
    target: &Path,
    name: &str,
    features: &FeatureSelection,
) -> Result<Materialized> {
    let renderer = MiniJinjaRenderer::new();
    let config = TemplateConfig::default();
    let name = ProjectName::parse(name)?;
    Materializer::new(&renderer, &config)
        .init_repository(false)
        .materialize(template, target, &name, features)
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}
