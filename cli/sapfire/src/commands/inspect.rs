//! `sapfire inspect`: solution overview.

use std::path::Path;

use anyhow::Result;
use sapfire_sln::RootBlock;

use crate::output::print_output;
use crate::GlobalOptions;

/// Print versions, projects, the configuration matrix and solution properties.
pub fn run(path: &Path, opts: &GlobalOptions) -> Result<()> {
    let solution = super::load_solution(path)?;
    print_output(&solution, opts, |s| describe(path, s))
}

fn describe(path: &Path, solution: &RootBlock) {
    println!("=== Solution: {} ===", path.display());
    println!(
        "Format version:       {}",
        solution.format_version.as_deref().unwrap_or("(unknown)")
    );
    println!(
        "Visual Studio:        {}",
        solution.visual_studio_version.as_deref().unwrap_or("(unknown)")
    );
    if let Some(min) = &solution.minimum_visual_studio_version {
        println!("Minimum Visual Studio: {min}");
    }
    println!();

    println!("--- Projects ({}) ---", solution.projects.len());
    for project in &solution.projects {
        println!("  {:<30} {}", project.name, project.relative_path);
    }
    println!();

    println!("--- Configurations ---");
    match solution.configuration_platforms() {
        Some(matrix) if !matrix.platforms.is_empty() => {
            for (configuration, platforms) in &matrix.platforms {
                println!("  {configuration:<15} {}", platforms.join(", "));
            }
        }
        _ => println!("  (none declared)"),
    }

    let properties = solution
        .global
        .as_ref()
        .and_then(|g| g.solution_properties.as_ref());
    if let Some(properties) = properties {
        println!();
        println!("--- Properties ---");
        for (key, value) in &properties.entries {
            println!("  {key} = {value}");
        }
    }
}
