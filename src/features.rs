//! Feature selection for a materialized project.
//!
//! The option set is fixed. Each option has a small enumerated value set and
//! a default; values arrive as strings (config file, stdin, `--set`) and are
//! parsed here, so unknown options and values are rejected in one place.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::Serialize;

use crate::error::{Error, Result};

/// yes / no switch used by most options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Testing {
    None,
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DevEnvironment {
    FullDocker,
    DockerDbLocalApp,
    LocalDevelopment,
}

/// Names of the options a [`FeatureSelection`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureOption {
    IncludeUserModel,
    IncludeAdmin,
    IncludeDocker,
    IncludeTesting,
    IncludeGithubActions,
    DevEnvironment,
}

impl FeatureOption {
    pub const ALL: [FeatureOption; 6] = [
        FeatureOption::IncludeUserModel,
        FeatureOption::IncludeAdmin,
        FeatureOption::IncludeDocker,
        FeatureOption::IncludeTesting,
        FeatureOption::IncludeGithubActions,
        FeatureOption::DevEnvironment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureOption::IncludeUserModel => "include_user_model",
            FeatureOption::IncludeAdmin => "include_admin",
            FeatureOption::IncludeDocker => "include_docker",
            FeatureOption::IncludeTesting => "include_testing",
            FeatureOption::IncludeGithubActions => "include_github_actions",
            FeatureOption::DevEnvironment => "dev_environment",
        }
    }

    /// Values accepted for this option, in canonical spelling.
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            FeatureOption::IncludeTesting => &["none", "basic"],
            FeatureOption::DevEnvironment => {
                &["full_docker", "docker_db_local_app", "local_development"]
            }
            _ => &["yes", "no"],
        }
    }

    fn invalid(&self, value: &str) -> Error {
        Error::InvalidOption {
            option: self.as_str().to_string(),
            value: value.to_string(),
            expected: self.choices().join(", "),
        }
    }
}

impl FromStr for FeatureOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "include_user_model" => Ok(FeatureOption::IncludeUserModel),
            "include_admin" => Ok(FeatureOption::IncludeAdmin),
            "include_docker" => Ok(FeatureOption::IncludeDocker),
            "include_testing" => Ok(FeatureOption::IncludeTesting),
            "include_github_actions" => Ok(FeatureOption::IncludeGithubActions),
            "dev_environment" | "development_environment" => Ok(FeatureOption::DevEnvironment),
            other => Err(Error::UnknownOption { option: other.to_string() }),
        }
    }
}

impl fmt::Display for FeatureOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Toggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::Yes => "yes",
            Toggle::No => "no",
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self == Toggle::Yes
    }

    fn parse(option: FeatureOption, value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Toggle::Yes),
            "no" | "n" | "false" => Ok(Toggle::No),
            _ => Err(option.invalid(value)),
        }
    }
}

impl Testing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Testing::None => "none",
            Testing::Basic => "basic",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" => Ok(Testing::None),
            // Older templates called the basic suite "pytest".
            "basic" | "pytest" => Ok(Testing::Basic),
            _ => Err(FeatureOption::IncludeTesting.invalid(value)),
        }
    }
}

impl DevEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevEnvironment::FullDocker => "full_docker",
            DevEnvironment::DockerDbLocalApp => "docker_db_local_app",
            DevEnvironment::LocalDevelopment => "local_development",
        }
    }

    /// Whether the environment runs at least the database in a container.
    pub fn uses_docker(&self) -> bool {
        !matches!(self, DevEnvironment::LocalDevelopment)
    }

    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "full_docker" => Ok(DevEnvironment::FullDocker),
            "docker_db_local_app" => Ok(DevEnvironment::DockerDbLocalApp),
            "local_development" => Ok(DevEnvironment::LocalDevelopment),
            _ => Err(FeatureOption::DevEnvironment.invalid(value)),
        }
    }
}

impl fmt::Display for DevEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of feature choices for one materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSelection {
    pub include_user_model: Toggle,
    pub include_admin: Toggle,
    pub include_docker: Toggle,
    pub include_testing: Testing,
    pub include_github_actions: Toggle,
    pub dev_environment: DevEnvironment,
}

impl Default for FeatureSelection {
    fn default() -> Self {
        Self {
            include_user_model: Toggle::Yes,
            include_admin: Toggle::Yes,
            include_docker: Toggle::Yes,
            include_testing: Testing::Basic,
            include_github_actions: Toggle::No,
            dev_environment: DevEnvironment::FullDocker,
        }
    }
}

impl FeatureSelection {
    /// Sets one option from its textual name and value.
    ///
    /// # Errors
    /// * `Error::UnknownOption` if the option name is not recognised
    /// * `Error::InvalidOption` if the value is not one of the option's choices
    pub fn set(&mut self, option: &str, value: &str) -> Result<()> {
        let option: FeatureOption = option.parse()?;
        match option {
            FeatureOption::IncludeUserModel => {
                self.include_user_model = Toggle::parse(option, value)?
            }
            FeatureOption::IncludeAdmin => self.include_admin = Toggle::parse(option, value)?,
            FeatureOption::IncludeDocker => self.include_docker = Toggle::parse(option, value)?,
            FeatureOption::IncludeTesting => self.include_testing = Testing::parse(value)?,
            FeatureOption::IncludeGithubActions => {
                self.include_github_actions = Toggle::parse(option, value)?
            }
            FeatureOption::DevEnvironment => {
                self.dev_environment = DevEnvironment::parse(value)?
            }
        }
        Ok(())
    }

    /// Canonical value of `option` in this selection.
    pub fn value(&self, option: FeatureOption) -> &'static str {
        match option {
            FeatureOption::IncludeUserModel => self.include_user_model.as_str(),
            FeatureOption::IncludeAdmin => self.include_admin.as_str(),
            FeatureOption::IncludeDocker => self.include_docker.as_str(),
            FeatureOption::IncludeTesting => self.include_testing.as_str(),
            FeatureOption::IncludeGithubActions => self.include_github_actions.as_str(),
            FeatureOption::DevEnvironment => self.dev_environment.as_str(),
        }
    }

    /// Whether the variant's compose file belongs in the project.
    ///
    /// `include_docker = no` wins over a docker-based environment.
    pub fn writes_compose(&self) -> bool {
        self.include_docker.is_enabled() && self.dev_environment.uses_docker()
    }

    /// Warns about combinations that leave the project incomplete.
    pub fn warn_conflicts(&self) {
        if !self.include_docker.is_enabled() && self.dev_environment.uses_docker() {
            warn!(
                "dev_environment '{}' expects docker, but include_docker is 'no': \
                 the Docker files and the compose file are left out",
                self.dev_environment
            );
        }
    }
}
