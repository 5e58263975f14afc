//! Configuration/platform checks against a parsed solution.

use log::debug;
use sapfire_sln::{open_solution, RootBlock};

use crate::error::{BuildConfigError, Result};
use crate::request::{validate_project_path, BuildRequest};

/// Verify that `request` names a configuration, platform and bundle
/// platforms that `solution` declares.
pub fn check_configuration_platform(solution: &RootBlock, request: &BuildRequest) -> Result<()> {
    let matrix = solution
        .configuration_platforms()
        .ok_or(BuildConfigError::MissingConfigurationPlatforms)?;

    let Some(platforms) = matrix.platforms_for(&request.configuration) else {
        return Err(BuildConfigError::ConfigurationNotFound {
            configuration: request.configuration.clone(),
        });
    };
    debug!(
        "configuration {} declares platforms {}",
        request.configuration,
        platforms.join(", ")
    );

    if !platforms.contains(&request.platform) {
        return Err(BuildConfigError::PlatformNotFound {
            configuration: request.configuration.clone(),
            platform: request.platform.clone(),
        });
    }

    if let Some(missing) = request
        .appx_bundle_platforms
        .iter()
        .find(|p| !platforms.contains(p))
    {
        return Err(BuildConfigError::BundlePlatformNotFound {
            configuration: request.configuration.clone(),
            platform: missing.clone(),
        });
    }

    Ok(())
}

/// Open the solution named by `request` and check it.
///
/// Returns the parsed solution so callers can reuse it.
pub fn check_solution(request: &BuildRequest) -> Result<RootBlock> {
    validate_project_path(&request.project)?;
    debug!("parsing {}", request.project.display());
    let solution = open_solution(&request.project)?;
    check_configuration_platform(&solution, request)?;
    debug!(
        "{}|{} is valid for {}",
        request.configuration,
        request.platform,
        request.project.display()
    );
    Ok(solution)
}
