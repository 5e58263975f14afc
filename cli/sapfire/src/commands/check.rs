//! `sapfire check`: validate a configuration/platform request.

use std::path::Path;

use anyhow::{Context, Result};
use sapfire_msbuild::{check_solution, BuildRequest};
use serde::Serialize;

use crate::manifest::SapfireManifest;
use crate::output::print_output;
use crate::{CheckArgs, GlobalOptions};

#[derive(Serialize)]
struct CheckReport<'a> {
    valid: bool,
    request: &'a BuildRequest,
    projects: usize,
}

/// Resolve the request from flags, environment and `sapfire.toml`, then check it.
pub fn run(
    args: &CheckArgs,
    manifest: Option<(&SapfireManifest, &Path)>,
    opts: &GlobalOptions,
) -> Result<()> {
    let request = resolve_request(args, manifest)?;
    log::info!(
        "checking {}|{} in {}",
        request.configuration,
        request.platform,
        request.project.display()
    );

    let solution = check_solution(&request)
        .with_context(|| format!("checking {}", request.project.display()))?;

    let report = CheckReport {
        valid: true,
        request: &request,
        projects: solution.projects.len(),
    };
    print_output(&report, opts, |r| {
        println!(
            "OK: {}|{} is declared in {} ({} projects)",
            r.request.configuration,
            r.request.platform,
            r.request.project.display(),
            r.projects
        );
        if !r.request.appx_bundle_platforms.is_empty() {
            println!(
                "    bundle platforms: {}",
                r.request.appx_bundle_platforms.join(", ")
            );
        }
    })
}

/// Merge command-line/environment values over manifest defaults.
pub(crate) fn resolve_request(
    args: &CheckArgs,
    manifest: Option<(&SapfireManifest, &Path)>,
) -> Result<BuildRequest> {
    let project = args
        .project
        .clone()
        .or_else(|| manifest.and_then(|(m, dir)| m.project(dir)))
        .context(
            "no solution given; pass --project, set SF_MSBUILD_PROJECT, or add [msbuild] project to sapfire.toml",
        )?;
    let configuration = args
        .configuration
        .as_deref()
        .or_else(|| manifest.and_then(|(m, _)| m.configuration()))
        .context("no build configuration given; pass --configuration or set SF_MSBUILD_CONFIGURATION")?;
    let platform = args
        .platform
        .as_deref()
        .or_else(|| manifest.and_then(|(m, _)| m.platform()))
        .context("no target platform given; pass --platform or set SF_MSBUILD_PLATFORM")?;
    let bundle = args
        .appx_bundle_platforms
        .as_deref()
        .or_else(|| manifest.and_then(|(m, _)| m.appx_bundle_platforms()))
        .unwrap_or_default();

    Ok(BuildRequest::new(project, configuration, platform).with_bundle_platforms(bundle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SOLUTION: &str = "Global\nGlobalSection(SolutionConfigurationPlatforms) = preSolution\nDebug|x64 = Debug|x64\nDebug|ARM = Debug|ARM\nEndGlobalSection\nEndGlobal\n";

    fn opts() -> GlobalOptions {
        GlobalOptions {
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn flags_override_manifest() {
        let manifest: SapfireManifest = toml::from_str(
            "[msbuild]\nproject = \"App.sln\"\nconfiguration = \"Release\"\nplatform = \"x64\"\nappx_bundle_platforms = \"x86|x64\"\n",
        )
        .unwrap();
        let args = CheckArgs {
            configuration: Some("Debug".into()),
            ..Default::default()
        };

        let request = resolve_request(&args, Some((&manifest, Path::new("/work")))).unwrap();
        assert_eq!(request.project, PathBuf::from("/work/App.sln"));
        assert_eq!(request.configuration, "Debug");
        assert_eq!(request.platform, "x64");
        assert_eq!(request.appx_bundle_platforms, vec!["x86", "x64"]);
    }

    #[test]
    fn missing_values_are_reported() {
        let err = resolve_request(&CheckArgs::default(), None).unwrap_err();
        assert!(err.to_string().contains("no solution given"));

        let args = CheckArgs {
            project: Some("App.sln".into()),
            configuration: Some("Debug".into()),
            ..Default::default()
        };
        let err = resolve_request(&args, None).unwrap_err();
        assert!(err.to_string().contains("no target platform"));
    }

    #[test]
    fn check_accepts_declared_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("App.sln");
        std::fs::write(&path, SOLUTION).unwrap();

        let args = CheckArgs {
            project: Some(path),
            configuration: Some("Debug".into()),
            platform: Some("ARM".into()),
            appx_bundle_platforms: Some("x64|ARM".into()),
        };
        run(&args, None, &opts()).unwrap();
    }

    #[test]
    fn check_rejects_undeclared_platform() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("App.sln");
        std::fs::write(&path, SOLUTION).unwrap();

        let args = CheckArgs {
            project: Some(path),
            configuration: Some("Debug".into()),
            platform: Some("x86".into()),
            appx_bundle_platforms: None,
        };
        let err = run(&args, None, &opts()).unwrap_err();
        assert!(format!("{err:#}").contains("platform x86 for configuration Debug was not found"));
    }
}
