//! `Project(...)` entries.

use std::fmt;

use serde::Serialize;

use crate::assignment::{unbrace, unquote, Assignment};
use crate::block::{scan, Block, Body, Container, Line};
use crate::error::{Result, SlnError};

const SECTION_START: &str = "ProjectSection(";
const SECTION_END: &str = "EndProjectSection";

/// One project referenced by the solution.
///
/// Parsed from a header such as
/// `Project("{FAE04EC0-...}") = "App", "App\App.csproj", "{1111...}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBlock {
    /// Project type GUID from `Project("{...}")`, without braces. May be empty.
    pub type_guid: String,
    /// Display name.
    pub name: String,
    /// Path to the project file, relative to the solution.
    pub relative_path: String,
    /// Project GUID without braces or quotes. Never empty.
    pub guid: String,
}

impl ProjectBlock {
    fn from_header(line: Line<'_>) -> Result<Self> {
        let malformed = || SlnError::MalformedProjectHeader {
            line: line.number,
            text: line.text.to_string(),
        };

        let assignment = Assignment::parse(line.text);
        let fields: Vec<&str> = assignment.value.split(',').collect();
        let [name, relative_path, guid, ..] = fields.as_slice() else {
            return Err(malformed());
        };

        let guid = unbrace(guid);
        if guid.is_empty() {
            return Err(malformed());
        }

        let type_guid = assignment
            .key
            .strip_prefix("Project(")
            .and_then(|rest| rest.strip_suffix(')'))
            .map(unbrace)
            .unwrap_or_default();

        Ok(Self {
            type_guid: type_guid.to_string(),
            name: unquote(name).to_string(),
            relative_path: unquote(relative_path).to_string(),
            guid: guid.to_string(),
        })
    }
}

impl fmt::Display for ProjectBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Block for ProjectBlock {
    fn parse(body: &Body) -> Result<Self> {
        let mut lines = body.lines();
        let header = lines.next().unwrap_or(Line {
            number: body.first_line(),
            text: "",
        });
        let project = Self::from_header(header)?;

        // Sections are consumed for well-formedness only.
        scan(lines, &mut ProjectSections)?;
        Ok(project)
    }
}

/// Scan state for the `ProjectSection` children of a project.
struct ProjectSections;

impl Container for ProjectSections {
    type Child = ();
    const END_TOKENS: &'static [&'static str] = &[SECTION_END];

    fn open(&self, line: Line<'_>) -> Result<Option<()>> {
        Ok(line.text.starts_with(SECTION_START).then_some(()))
    }

    fn end_token(_: &()) -> &'static str {
        SECTION_END
    }

    fn block_name(_: &()) -> &'static str {
        "ProjectSection"
    }

    fn close(&mut self, _: (), body: Body) -> Result<()> {
        ProjectSectionBlock::parse(&body)?;
        Ok(())
    }
}

/// A `ProjectSection(...)` region. Its contents are not modeled.
struct ProjectSectionBlock;

impl Block for ProjectSectionBlock {
    fn parse(_body: &Body) -> Result<Self> {
        Ok(Self)
    }
}
