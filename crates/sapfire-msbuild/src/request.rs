//! The build request being validated.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{BuildConfigError, Result};

/// A requested solution build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    /// Path to the `.sln` file.
    pub project: PathBuf,
    /// Build configuration, e.g. `Release`.
    pub configuration: String,
    /// Target platform, e.g. `x64`.
    pub platform: String,
    /// Platforms to include in an app bundle. Empty when no bundle is built.
    pub appx_bundle_platforms: Vec<String>,
}

impl BuildRequest {
    /// A request without bundle platforms.
    pub fn new(
        project: impl Into<PathBuf>,
        configuration: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            configuration: configuration.into(),
            platform: platform.into(),
            appx_bundle_platforms: Vec::new(),
        }
    }

    /// Set bundle platforms from a `|`-separated list such as `x86|ARM`.
    pub fn with_bundle_platforms(mut self, platforms: &str) -> Self {
        self.appx_bundle_platforms = parse_bundle_platforms(platforms);
        self
    }
}

/// Split `x86|x64|ARM` into its platforms, dropping blanks.
pub fn parse_bundle_platforms(list: &str) -> Vec<String> {
    list.split('|')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Check that `path` names an existing `.sln` file.
pub fn validate_project_path(path: &Path) -> Result<()> {
    let is_sln = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sln"));
    if !is_sln || !path.is_file() {
        return Err(BuildConfigError::InvalidProjectPath {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
