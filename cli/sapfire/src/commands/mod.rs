//! CLI command implementations.

pub mod check;
pub mod init;
pub mod inspect;
pub mod platforms;
pub mod projects;

use std::path::Path;

use anyhow::{Context, Result};
use sapfire_sln::{open_solution, RootBlock};

/// Open a solution, attaching the path to any error.
pub(crate) fn load_solution(path: &Path) -> Result<RootBlock> {
    log::debug!("parsing {}", path.display());
    open_solution(path).with_context(|| format!("parsing {}", path.display()))
}
