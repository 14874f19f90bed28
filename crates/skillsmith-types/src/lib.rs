//! Skillsmith Types - Core types shared across the skillsmith workspace
//!
//! This module defines the skill document model consumed by the generators
//! and the rule records produced by the extraction pipeline.

mod rule;
mod tags;

pub use rule::{ImpactLevel, ParsedBullet, RuleRecord, UnknownImpactLevel};
pub use tags::TagSet;

use serde::{Deserialize, Serialize};

/// Frontmatter block of a `SKILL.md` file
///
/// Every field is optional: a document without a header, or with a header that
/// fails to parse, is represented by `Frontmatter::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub compatibility: Option<String>,
    #[serde(default)]
    pub metadata: SkillMeta,
}

/// Nested `metadata:` mapping of the frontmatter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMeta {
    pub display_name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
}

impl Frontmatter {
    /// Description text, or an empty string when absent
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Display name from `metadata.displayName`, ignoring blank values
    pub fn display_name(&self) -> Option<&str> {
        self.metadata
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// A skill document: parsed frontmatter plus the Markdown body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl SkillDocument {
    pub fn new(frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Self {
            frontmatter,
            body: body.into(),
        }
    }
}
