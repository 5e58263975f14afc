//! `sapfire projects`: project listing.

use std::path::Path;

use anyhow::Result;

use crate::output::print_output;
use crate::GlobalOptions;

/// List every project entry in file order.
pub fn run(path: &Path, opts: &GlobalOptions) -> Result<()> {
    let solution = super::load_solution(path)?;
    print_output(&solution.projects, opts, |projects| {
        if projects.is_empty() {
            println!("No projects in {}", path.display());
            return;
        }
        println!("{:<30} {:<50} GUID", "NAME", "PATH");
        for project in projects {
            println!(
                "{:<30} {:<50} {}",
                project.name, project.relative_path, project.guid
            );
        }
    })
}
