//! `sapfire init`: write a `sapfire.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::manifest::{SapfireManifest, MANIFEST_FILE};

/// Create `sapfire.toml` in `dir`.
///
/// Without `solution`, the directory must contain exactly one `.sln` file.
pub fn run(dir: &Path, solution: Option<&str>) -> Result<()> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        bail!("{} already exists", manifest_path.display());
    }

    let solution = match solution {
        Some(s) => s.to_string(),
        None => find_single_solution(dir)?,
    };

    fs::write(&manifest_path, SapfireManifest::template(&solution))
        .with_context(|| format!("writing {}", manifest_path.display()))?;

    println!("Created {}", manifest_path.display());
    println!("  project = {solution}");
    Ok(())
}

fn find_single_solution(dir: &Path) -> Result<String> {
    let mut found: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("sln")) {
            found.push(path);
        }
    }

    match found.as_slice() {
        [single] => Ok(single
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()),
        [] => bail!("no .sln file in {}; pass --solution", dir.display()),
        _ => bail!(
            "{} .sln files in {}; pass --solution to pick one",
            found.len(),
            dir.display()
        ),
    }
}
