//! Parser for Visual Studio solution (`.sln`) files.
//!
//! A solution file is read in full and scanned into a small tree:
//! the [`RootBlock`] holds version headers, the ordered list of
//! [`ProjectBlock`]s and at most one [`GlobalBlock`], whose typed sections
//! carry the configuration/platform matrix and solution properties.
//!
//! ```no_run
//! let solution = sapfire_sln::open_solution("App.sln")?;
//! if let Some(matrix) = solution.configuration_platforms() {
//!     assert!(matrix.supports("Release", "x64"));
//! }
//! # Ok::<(), sapfire_sln::SlnError>(())
//! ```

pub mod assignment;
pub mod block;
pub mod error;
pub mod global;
pub mod parse;
pub mod project;
pub mod root;

pub use assignment::Assignment;
pub use block::{Block, Body, Line};
pub use error::{Result, SlnError};
pub use global::{
    GlobalBlock, GlobalSectionKind, SolutionConfigurationPlatformsBlock, SolutionPropertiesBlock,
};
pub use parse::{open_solution, parse_solution};
pub use project::ProjectBlock;
pub use root::RootBlock;
