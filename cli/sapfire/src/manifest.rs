//! `sapfire.toml` discovery and build defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name searched for by [`SapfireManifest::find_and_load`].
pub const MANIFEST_FILE: &str = "sapfire.toml";

/// The top-level `sapfire.toml` structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SapfireManifest {
    /// Defaults for `sapfire check`.
    #[serde(default)]
    pub msbuild: Option<MsbuildConfig>,
}

/// The `[msbuild]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MsbuildConfig {
    /// Solution path, relative to the directory holding `sapfire.toml`.
    #[serde(default)]
    pub project: Option<String>,
    /// Build configuration.
    #[serde(default)]
    pub configuration: Option<String>,
    /// Target platform.
    #[serde(default)]
    pub platform: Option<String>,
    /// Bundle platforms, `|`-separated.
    #[serde(default)]
    pub appx_bundle_platforms: Option<String>,
}

impl SapfireManifest {
    /// Search upward from `start_dir` for a `sapfire.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: SapfireManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                log::debug!("loaded {}", candidate.display());
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing sapfire.toml")
    }

    /// The configured solution path, resolved against `manifest_dir`.
    pub fn project(&self, manifest_dir: &Path) -> Option<PathBuf> {
        self.msbuild
            .as_ref()
            .and_then(|m| m.project.as_deref())
            .map(|p| manifest_dir.join(p))
    }

    /// The configured build configuration.
    pub fn configuration(&self) -> Option<&str> {
        self.msbuild.as_ref().and_then(|m| m.configuration.as_deref())
    }

    /// The configured target platform.
    pub fn platform(&self) -> Option<&str> {
        self.msbuild.as_ref().and_then(|m| m.platform.as_deref())
    }

    /// The configured bundle platform list.
    pub fn appx_bundle_platforms(&self) -> Option<&str> {
        self.msbuild
            .as_ref()
            .and_then(|m| m.appx_bundle_platforms.as_deref())
    }

    /// Generate the default template for `sapfire init`.
    pub fn template(solution: &str) -> String {
        format!(
            r#"[msbuild]
project = "{solution}"
configuration = "Release"
platform = "x64"
"#
        )
    }
}
