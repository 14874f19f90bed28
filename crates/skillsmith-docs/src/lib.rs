//! Skillsmith Docs
//!
//! Generates the companion files of a skill directory from its `SKILL.md`:
//! `metadata.json`, `AGENTS.md` and `README.md`.

pub mod metadata;
pub mod readme;

pub use metadata::{SkillMetadata, METADATA_VERSION};
pub use readme::{count_rule_files, render_readme};

use anyhow::{Context, Result};
use serde::Deserialize;
use skillsmith_skills::{find_sub_skills, Skill};
use std::fs;
use tracing::debug;

pub const METADATA_FILE: &str = "metadata.json";
pub const AGENTS_FILE: &str = "AGENTS.md";
pub const README_FILE: &str = "README.md";

/// Values the frontmatter does not provide
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocsOptions {
    /// Author when `metadata.author` is absent
    pub author: String,
    /// License when the frontmatter has none
    pub license: String,
    /// Date stamped into `metadata.json`
    pub date: String,
    /// Prefix of the `npx agentskills add` path in the README
    pub install_source: String,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            author: String::new(),
            license: "MIT".to_string(),
            date: String::new(),
            install_source: String::new(),
        }
    }
}

/// Generated companion files of one skill
#[derive(Debug, Clone)]
pub struct SkillFiles {
    pub metadata: SkillMetadata,
    pub agents: String,
    pub readme: String,
    pub sub_skills: usize,
}

impl SkillFiles {
    /// Render all three files for `skill`
    pub fn generate(skill: &Skill, options: &DocsOptions) -> Result<Self> {
        let subs = find_sub_skills(&skill.path)?;
        let rule_count = count_rule_files(&skill.path);

        Ok(Self {
            metadata: SkillMetadata::from_skill(skill, options),
            agents: skill.body().trim_start_matches('\n').to_string(),
            readme: render_readme(skill, &subs, rule_count, options),
            sub_skills: subs.len(),
        })
    }

    /// Write the files into the skill directory, overwriting previous output
    pub fn write(&self, skill: &Skill) -> Result<()> {
        let files = [
            (METADATA_FILE, self.metadata.to_json()?),
            (AGENTS_FILE, self.agents.clone()),
            (README_FILE, self.readme.clone()),
        ];
        for (name, content) in files {
            let path = skill.path.join(name);
            fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
        }
        debug!("Wrote companion files for {}", skill.rel_path);
        Ok(())
    }
}
