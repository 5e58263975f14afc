//! `sapfire platforms`: configuration/platform matrix.

use std::path::Path;

use anyhow::{bail, Result};
use indexmap::IndexMap;

use crate::output::print_output;
use crate::GlobalOptions;

/// Print the configuration matrix, optionally restricted to one configuration.
pub fn run(path: &Path, configuration: Option<&str>, opts: &GlobalOptions) -> Result<()> {
    let solution = super::load_solution(path)?;
    let Some(matrix) = solution.configuration_platforms() else {
        bail!(
            "{} does not declare any configuration/platform pairs",
            path.display()
        );
    };

    let selected: IndexMap<&str, &[String]> = match configuration {
        Some(name) => match matrix.platforms_for(name) {
            Some(platforms) => IndexMap::from([(name, platforms)]),
            None => bail!(
                "configuration '{name}' was not found. Available: {}",
                matrix.configurations().collect::<Vec<_>>().join(", ")
            ),
        },
        None => matrix
            .platforms
            .iter()
            .map(|(c, p)| (c.as_str(), p.as_slice()))
            .collect(),
    };

    print_output(&selected, opts, |selected| {
        for (configuration, platforms) in selected {
            println!("{configuration:<15} {}", platforms.join(", "));
        }
    })
}
