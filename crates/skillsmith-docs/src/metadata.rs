//! `metadata.json`: machine-readable skill metadata

use anyhow::Result;
use serde::Serialize;
use skillsmith_skills::Skill;

use crate::DocsOptions;

/// Version stamped into every generated metadata file
pub const METADATA_VERSION: &str = "1.0.0";

/// Serialized field order is the file's key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetadata {
    pub version: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub author: String,
    pub license: String,
    pub date: String,
    pub compatibility: String,
    pub references: Vec<String>,
}

impl SkillMetadata {
    /// Frontmatter values win; `options` fills in author and license
    pub fn from_skill(skill: &Skill, options: &DocsOptions) -> Self {
        let frontmatter = skill.frontmatter();
        Self {
            version: METADATA_VERSION.to_string(),
            name: skill.name().to_string(),
            display_name: skill.display_name(),
            description: skill.clean_description(),
            author: frontmatter
                .metadata
                .author
                .clone()
                .unwrap_or_else(|| options.author.clone()),
            license: license_of(skill, options),
            date: options.date.clone(),
            compatibility: frontmatter.compatibility.clone().unwrap_or_default(),
            references: Vec::new(),
        }
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

pub(crate) fn license_of(skill: &Skill, options: &DocsOptions) -> String {
    skill
        .frontmatter()
        .license
        .clone()
        .unwrap_or_else(|| options.license.clone())
}
