//! The whole-file container.

use std::str::FromStr;

use serde::Serialize;

use crate::assignment::Assignment;
use crate::block::{scan, Block, Body, Container, Line};
use crate::error::{Result, SlnError};
use crate::global::{GlobalBlock, SolutionConfigurationPlatformsBlock};
use crate::project::ProjectBlock;

const FORMAT_BANNER: &str = "Microsoft Visual Studio Solution File, Format Version ";
const VISUAL_STUDIO_VERSION: &str = "VisualStudioVersion";
const MINIMUM_VISUAL_STUDIO_VERSION: &str = "MinimumVisualStudioVersion";

const PROJECT_START: &str = "Project(";
const PROJECT_END: &str = "EndProject";
const GLOBAL_START: &str = "Global";
const GLOBAL_END: &str = "EndGlobal";

/// A parsed solution file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootBlock {
    /// File format version from the banner line, e.g. `12.00`.
    pub format_version: Option<String>,
    /// `VisualStudioVersion` header value.
    pub visual_studio_version: Option<String>,
    /// `MinimumVisualStudioVersion` header value.
    pub minimum_visual_studio_version: Option<String>,
    /// Projects in file order.
    pub projects: Vec<ProjectBlock>,
    /// The `Global` region, if any.
    pub global: Option<GlobalBlock>,
}

impl RootBlock {
    /// The configuration/platform matrix, if the solution declares one.
    pub fn configuration_platforms(&self) -> Option<&SolutionConfigurationPlatformsBlock> {
        self.global
            .as_ref()
            .and_then(|g| g.solution_configuration_platforms.as_ref())
    }

    /// Find a project by name.
    pub fn project(&self, name: &str) -> Option<&ProjectBlock> {
        self.projects.iter().find(|p| p.name == name)
    }
}

impl Block for RootBlock {
    fn parse(body: &Body) -> Result<Self> {
        let mut root = RootBlock::default();
        scan(body.lines(), &mut root)?;
        Ok(root)
    }
}

impl FromStr for RootBlock {
    type Err = SlnError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.strip_prefix('\u{feff}').unwrap_or(s);
        Self::parse(&Body::new(s, 1))
    }
}

/// Child regions that can open at the top of a solution file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RootChild {
    Project,
    Global,
}

impl Container for RootBlock {
    type Child = RootChild;
    const END_TOKENS: &'static [&'static str] = &[PROJECT_END, GLOBAL_END];

    fn open(&self, line: Line<'_>) -> Result<Option<RootChild>> {
        if line.text.starts_with(PROJECT_START) {
            return Ok(Some(RootChild::Project));
        }
        if line.text == GLOBAL_START {
            if self.global.is_some() {
                return Err(SlnError::DuplicateGlobalBlock { line: line.number });
            }
            return Ok(Some(RootChild::Global));
        }
        Ok(None)
    }

    fn end_token(child: &RootChild) -> &'static str {
        match child {
            RootChild::Project => PROJECT_END,
            RootChild::Global => GLOBAL_END,
        }
    }

    fn block_name(child: &RootChild) -> &'static str {
        match child {
            RootChild::Project => "Project",
            RootChild::Global => "Global",
        }
    }

    fn close(&mut self, child: RootChild, body: Body) -> Result<()> {
        match child {
            RootChild::Project => self.projects.push(ProjectBlock::parse(&body)?),
            RootChild::Global => self.global = Some(GlobalBlock::parse(&body)?),
        }
        Ok(())
    }

    fn scalar(&mut self, line: Line<'_>) -> Result<()> {
        if let Some(version) = line.text.strip_prefix(FORMAT_BANNER) {
            self.format_version = Some(version.trim().to_string());
            return Ok(());
        }

        let assignment = Assignment::parse(line.text);
        match assignment.key.as_str() {
            VISUAL_STUDIO_VERSION => self.visual_studio_version = Some(assignment.value),
            MINIMUM_VISUAL_STUDIO_VERSION => {
                self.minimum_visual_studio_version = Some(assignment.value)
            }
            _ => {}
        }
        Ok(())
    }
}
