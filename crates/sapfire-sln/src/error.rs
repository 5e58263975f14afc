//! Error types for solution file parsing.

use std::path::PathBuf;

/// Errors that can occur while opening or parsing a solution file.
#[derive(Debug, thiserror::Error)]
pub enum SlnError {
    /// The caller passed an empty path.
    #[error("path to the solution file can't be empty")]
    EmptyPath,

    /// Solution file not found.
    #[error("solution file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// I/O error reading the solution file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `GlobalSection(...)` line without a parenthesized section name.
    #[error("line {line}: malformed global section header: {text}")]
    MalformedSectionHeader {
        /// 1-based line number in the solution file.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A `Project(...)` line with fewer than three fields or an empty GUID.
    #[error("line {line}: malformed project header: {text}")]
    MalformedProjectHeader {
        /// 1-based line number in the solution file.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A configuration entry that is not of the form `Config|Platform = ...`.
    #[error("line {line}: malformed configuration entry: {text}")]
    MalformedConfigurationEntry {
        /// 1-based line number in the solution file.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A block was opened but its end token never appeared.
    #[error("line {line}: {block} block is never closed")]
    UnterminatedBlock {
        /// Name of the block kind that is still open.
        block: &'static str,
        /// Line on which the block was opened.
        line: usize,
    },

    /// A block was opened while a sibling block of the same level was still open.
    #[error("line {line}: {block} block opened inside another block of the same level")]
    UnexpectedNesting {
        /// Name of the block kind being opened.
        block: &'static str,
        /// Line of the nested start token.
        line: usize,
    },

    /// An end token appeared with no block open.
    #[error("line {line}: unexpected {token} with no open block")]
    UnmatchedEndToken {
        /// The end token found.
        token: &'static str,
        /// Line of the end token.
        line: usize,
    },

    /// More than one `Global`/`EndGlobal` region.
    #[error("line {line}: solution file contains more than one Global block")]
    DuplicateGlobalBlock {
        /// Line on which the second region starts.
        line: usize,
    },
}

/// Result type for solution parsing operations.
pub type Result<T> = std::result::Result<T, SlnError>;
