//! The `Global` region and its typed sections.

use indexmap::IndexMap;
use serde::Serialize;

use crate::assignment::Assignment;
use crate::block::{scan, Block, Body, Container, Line};
use crate::error::{Result, SlnError};

const SECTION_START: &str = "GlobalSection";
const SECTION_END: &str = "EndGlobalSection";

/// Solution-wide metadata held between `Global` and `EndGlobal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalBlock {
    /// The `SolutionConfigurationPlatforms` section, if present.
    pub solution_configuration_platforms: Option<SolutionConfigurationPlatformsBlock>,
    /// The `SolutionProperties` section, if present.
    pub solution_properties: Option<SolutionPropertiesBlock>,
}

impl Block for GlobalBlock {
    fn parse(body: &Body) -> Result<Self> {
        let mut global = GlobalBlock::default();
        // The first line is the `Global` marker itself.
        scan(body.lines().skip(1), &mut global)?;
        Ok(global)
    }
}

impl Container for GlobalBlock {
    type Child = GlobalSectionKind;
    const END_TOKENS: &'static [&'static str] = &[SECTION_END];

    fn open(&self, line: Line<'_>) -> Result<Option<GlobalSectionKind>> {
        let key = line.text.split('=').next().unwrap_or_default();
        if key.starts_with(SECTION_START) {
            GlobalSectionKind::from_header(line).map(Some)
        } else {
            Ok(None)
        }
    }

    fn end_token(_: &GlobalSectionKind) -> &'static str {
        SECTION_END
    }

    fn block_name(_: &GlobalSectionKind) -> &'static str {
        "GlobalSection"
    }

    fn close(&mut self, child: GlobalSectionKind, body: Body) -> Result<()> {
        match child {
            GlobalSectionKind::SolutionConfigurationPlatforms => {
                self.solution_configuration_platforms =
                    Some(SolutionConfigurationPlatformsBlock::parse(&body)?);
            }
            GlobalSectionKind::SolutionProperties => {
                self.solution_properties = Some(SolutionPropertiesBlock::parse(&body)?);
            }
            GlobalSectionKind::Unknown(_) => {
                OpaqueSectionBlock::parse(&body)?;
            }
        }
        Ok(())
    }
}

/// Section type named in a `GlobalSection(<name>) = ...` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalSectionKind {
    /// The configuration/platform matrix.
    SolutionConfigurationPlatforms,
    /// Solution-level key/value properties.
    SolutionProperties,
    /// Any other section; parsed and dropped.
    Unknown(String),
}

impl GlobalSectionKind {
    /// Pick the section kind from a header line.
    ///
    /// The name is whatever sits between the first `(` and the following `)`
    /// on the left of `=`. A header without a non-empty name is rejected.
    pub fn from_header(line: Line<'_>) -> Result<Self> {
        let malformed = || SlnError::MalformedSectionHeader {
            line: line.number,
            text: line.text.to_string(),
        };

        let key = line.text.split('=').next().unwrap_or_default();
        let open = key.find('(').ok_or_else(malformed)?;
        let len = key[open + 1..].find(')').ok_or_else(malformed)?;
        let name = key[open + 1..open + 1 + len].trim();
        if name.is_empty() {
            return Err(malformed());
        }

        Ok(match name {
            "SolutionConfigurationPlatforms" => Self::SolutionConfigurationPlatforms,
            "SolutionProperties" => Self::SolutionProperties,
            other => Self::Unknown(other.to_string()),
        })
    }
}

/// Configuration name → platforms, in file order.
///
/// Built from lines of the form `Debug|x64 = Debug|x64`; only the left side
/// is read. A configuration key exists only once it has a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolutionConfigurationPlatformsBlock {
    /// Platforms grouped by configuration name.
    pub platforms: IndexMap<String, Vec<String>>,
}

impl SolutionConfigurationPlatformsBlock {
    /// Whether the solution declares `configuration` at all.
    pub fn has_configuration(&self, configuration: &str) -> bool {
        self.platforms.contains_key(configuration)
    }

    /// Whether `platform` is declared under `configuration`.
    pub fn supports(&self, configuration: &str, platform: &str) -> bool {
        self.platforms_for(configuration)
            .is_some_and(|platforms| platforms.iter().any(|p| p == platform))
    }

    /// Platforms declared under `configuration`.
    pub fn platforms_for(&self, configuration: &str) -> Option<&[String]> {
        self.platforms.get(configuration).map(Vec::as_slice)
    }

    /// Configuration names in file order.
    pub fn configurations(&self) -> impl Iterator<Item = &str> {
        self.platforms.keys().map(String::as_str)
    }
}

impl Block for SolutionConfigurationPlatformsBlock {
    fn parse(body: &Body) -> Result<Self> {
        let mut platforms: IndexMap<String, Vec<String>> = IndexMap::new();

        for line in body.lines().skip(1).filter(|l| !l.text.is_empty()) {
            let key = Assignment::parse(line.text).key;
            let mut parts = key.split('|').map(str::trim);
            let (configuration, platform) = match (parts.next(), parts.next(), parts.next()) {
                (Some(c), Some(p), None) if !c.is_empty() && !p.is_empty() => (c, p),
                _ => {
                    return Err(SlnError::MalformedConfigurationEntry {
                        line: line.number,
                        text: line.text.to_string(),
                    })
                }
            };

            // Repeated pairs are kept as written.
            platforms
                .entry(configuration.to_string())
                .or_default()
                .push(platform.to_string());
        }

        Ok(Self { platforms })
    }
}

/// `SolutionProperties` entries, e.g. `HideSolutionNode = FALSE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolutionPropertiesBlock {
    /// Properties in first-seen order; a repeated key keeps the last value.
    pub entries: IndexMap<String, String>,
}

impl SolutionPropertiesBlock {
    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Block for SolutionPropertiesBlock {
    fn parse(body: &Body) -> Result<Self> {
        let mut entries = IndexMap::new();
        for line in body.lines().skip(1).filter(|l| !l.text.is_empty()) {
            let assignment = Assignment::parse(line.text);
            entries.insert(assignment.key, assignment.value);
        }
        Ok(Self { entries })
    }
}

/// A section whose contents are not modeled.
struct OpaqueSectionBlock;

impl Block for OpaqueSectionBlock {
    fn parse(_body: &Body) -> Result<Self> {
        Ok(Self)
    }
}
