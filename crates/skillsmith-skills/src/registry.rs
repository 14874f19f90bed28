//! Skills registry for a skills root directory
//!
//! Discovery walks the whole tree below the root and records every directory
//! that holds a SKILL.md. Skills are then loaded one at a time, in a stable
//! order, so a batch run never holds more than one document in memory.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::skill::{clean_description, dir_name, display_name_from, relative_path, Skill, SKILL_FILE};

/// Skills registry rooted at one skills directory
pub struct SkillsRegistry {
    /// Root of the skill corpus
    root: PathBuf,
    /// Discovered skill directories, sorted by relative path
    skill_dirs: Vec<PathBuf>,
}

impl SkillsRegistry {
    /// Create a registry for `root`; nothing is read until [`discover`](Self::discover)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skill_dirs: Vec::new(),
        }
    }

    /// Skills root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and collect every directory containing SKILL.md
    ///
    /// A missing root is an error; it is fatal for the whole run.
    pub fn discover(&mut self) -> Result<()> {
        if !self.root.is_dir() {
            bail!("skills root not found: {}", self.root.display());
        }

        info!("Starting skills discovery in {:?}", self.root);

        let mut found: Vec<(String, PathBuf)> = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry =
                entry.with_context(|| format!("Failed to walk {:?}", self.root))?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            if dir.join(SKILL_FILE).is_file() {
                debug!("Discovered skill at {:?}", dir);
                found.push((relative_path(&self.root, dir), dir.to_path_buf()));
            }
        }

        found.sort_by(|a, b| a.0.cmp(&b.0));
        self.skill_dirs = found.into_iter().map(|(_, dir)| dir).collect();

        info!("Discovered {} skills", self.skill_dirs.len());
        Ok(())
    }

    /// Discovered skill directories in processing order
    pub fn skill_dirs(&self) -> &[PathBuf] {
        &self.skill_dirs
    }

    /// Load the skill in `dir`
    pub fn load(&self, dir: &Path) -> Result<Skill> {
        Skill::from_dir(dir, &self.root)
    }

    /// Load every discovered skill lazily, in processing order
    pub fn skills(&self) -> impl Iterator<Item = Result<Skill>> + '_ {
        self.skill_dirs.iter().map(|dir| self.load(dir))
    }

    /// Get number of discovered skills
    pub fn len(&self) -> usize {
        self.skill_dirs.len()
    }

    /// Check if no skills were discovered
    pub fn is_empty(&self) -> bool {
        self.skill_dirs.is_empty()
    }
}

/// A skill nested directly below another skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubSkill {
    /// Directory name of the sub-skill
    pub dir: String,
    /// Frontmatter name, or the directory name
    pub name: String,
    /// Display name (see [`display_name_from`])
    pub display_name: String,
    /// Cleaned description, empty when absent
    pub description: String,
}

/// List the immediate child directories of `skill_dir` that hold a SKILL.md,
/// sorted by directory name. An unreadable directory has no sub-skills.
pub fn find_sub_skills(skill_dir: &Path) -> Result<Vec<SubSkill>> {
    let Ok(entries) = fs::read_dir(skill_dir) else {
        debug!("Cannot list {:?}, assuming no sub-skills", skill_dir);
        return Ok(Vec::new());
    };

    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir() && path.join(SKILL_FILE).is_file())
        .collect();
    children.sort();

    let mut subs = Vec::with_capacity(children.len());
    for child in children {
        let skill = Skill::from_dir(&child, skill_dir)?;
        let frontmatter = skill.frontmatter();
        subs.push(SubSkill {
            dir: dir_name(&child),
            name: skill.name().to_string(),
            display_name: display_name_from(skill.name(), frontmatter.display_name()),
            description: clean_description(frontmatter.description()),
        });
    }

    Ok(subs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = SkillsRegistry::new("/nonexistent");
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_discover_missing_root_fails() {
        let mut registry = SkillsRegistry::new("/definitely/not/a/skills/root");
        let err = registry.discover().unwrap_err();
        assert!(err.to_string().contains("skills root not found"));
    }
}
