//! Validation of MSBuild configuration/platform requests.
//!
//! Before a solution is built, the requested configuration, platform and any
//! app bundle platforms must all appear in the solution's
//! `SolutionConfigurationPlatforms` section. This crate performs that check
//! on top of [`sapfire_sln`].

pub mod check;
pub mod error;
pub mod request;

pub use check::{check_configuration_platform, check_solution};
pub use error::{BuildConfigError, Result};
pub use request::{parse_bundle_platforms, validate_project_path, BuildRequest};
