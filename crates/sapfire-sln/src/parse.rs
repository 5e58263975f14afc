//! Entry points: open a solution file from disk or parse one from text.

use std::path::Path;

use crate::error::{Result, SlnError};
use crate::root::RootBlock;

/// Open and parse the solution file at `path`.
///
/// The whole file is read before parsing starts. Bytes that are not valid
/// UTF-8 are replaced rather than rejected.
pub fn open_solution(path: impl AsRef<Path>) -> Result<RootBlock> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(SlnError::EmptyPath);
    }
    if !path.exists() {
        return Err(SlnError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    parse_solution(&String::from_utf8_lossy(&bytes))
}

/// Parse solution text that is already in memory.
pub fn parse_solution(text: &str) -> Result<RootBlock> {
    text.parse()
}
