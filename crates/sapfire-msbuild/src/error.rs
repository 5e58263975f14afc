//! Error types for build request validation.

use std::path::PathBuf;

use sapfire_sln::SlnError;

/// Reasons a build request does not match its solution.
#[derive(Debug, thiserror::Error)]
pub enum BuildConfigError {
    /// The project path is empty, not a `.sln` file, or missing.
    #[error("the provided path doesn't point to a solution file: {}", path.display())]
    InvalidProjectPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// The solution could not be opened or parsed.
    #[error("failed to read solution: {0}")]
    Solution(#[from] SlnError),

    /// The solution has no `SolutionConfigurationPlatforms` section.
    #[error("the solution does not declare any configuration/platform pairs")]
    MissingConfigurationPlatforms,

    /// The requested configuration is not declared.
    #[error("configuration {configuration} was not found in the solution")]
    ConfigurationNotFound {
        /// The requested configuration.
        configuration: String,
    },

    /// The requested platform is not declared under the configuration.
    #[error("platform {platform} for configuration {configuration} was not found in the solution")]
    PlatformNotFound {
        /// The requested configuration.
        configuration: String,
        /// The requested platform.
        platform: String,
    },

    /// A bundle platform is not declared under the configuration.
    #[error("platform {platform} for the app bundle was not found in the solution under configuration {configuration}")]
    BundlePlatformNotFound {
        /// The requested configuration.
        configuration: String,
        /// The offending bundle platform.
        platform: String,
    },
}

/// Result type for build request validation.
pub type Result<T> = std::result::Result<T, BuildConfigError>;
