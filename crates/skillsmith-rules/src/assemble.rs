//! Rule set assembly and the `rules/` directory writer

use skillsmith_types::{RuleRecord, SkillDocument, TagSet};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::bullet::parse_bullet;
use crate::error::{Result, RulesError};
use crate::extract::extract_best_practices;
use crate::filename::{resolve_collisions, rule_filename};
use crate::impact::classify;
use crate::render::{render_rule, render_sections, render_template};
use crate::tags::derive_tags;

/// Directory, beside SKILL.md, that receives the generated files
pub const RULES_DIR: &str = "rules";
/// Authoring stub inside [`RULES_DIR`]
pub const TEMPLATE_FILE: &str = "_template.md";
/// Rule index inside [`RULES_DIR`]
pub const SECTIONS_FILE: &str = "_sections.md";

/// All rules extracted from one skill
#[derive(Debug, Clone)]
pub struct RuleSet {
    skill_name: String,
    display_name: String,
    rules: Vec<RuleRecord>,
}

/// What a [`RuleSet::write`] produced, or would have produced in dry-run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteReport {
    pub rules: usize,
    /// Template + index + one file per rule
    pub files: usize,
}

impl RuleSet {
    /// Run the pipeline for one skill.
    ///
    /// Returns `None` when the body has no best-practices bullets; such a skill
    /// gets no `rules/` directory at all.
    pub fn build(
        document: &SkillDocument,
        skill_name: &str,
        display_name: &str,
        rel_path: &str,
    ) -> Option<Self> {
        let bullets = extract_best_practices(&document.body);
        if bullets.is_empty() {
            return None;
        }

        let tags = derive_tags(&document.frontmatter, skill_name, rel_path);
        Some(Self::from_bullets(skill_name, display_name, &bullets, &tags))
    }

    /// Parse, classify and name every bullet, then make filenames unique
    pub fn from_bullets(
        skill_name: &str,
        display_name: &str,
        bullets: &[String],
        tags: &TagSet,
    ) -> Self {
        let mut rules: Vec<RuleRecord> = bullets
            .iter()
            .enumerate()
            .map(|(index, bullet)| {
                let parsed = parse_bullet(bullet);
                let impact = classify(bullet);
                RuleRecord {
                    filename: rule_filename(&parsed.title, skill_name),
                    title: parsed.title,
                    description: parsed.description,
                    impact,
                    impact_description: impact.rationale().to_string(),
                    index,
                    tags: tags.clone(),
                }
            })
            .collect();

        resolve_collisions(&mut rules);
        debug!("Assembled {} rules for {}", rules.len(), skill_name);

        Self {
            skill_name: skill_name.to_string(),
            display_name: display_name.to_string(),
            rules,
        }
    }

    pub fn skill_name(&self) -> &str {
        &self.skill_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Rules in extraction order
    pub fn rules(&self) -> &[RuleRecord] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of files the rules directory holds
    pub fn file_count(&self) -> usize {
        self.rules.len() + 2
    }

    /// Every generated file as `(name, content)`, template and index first
    pub fn files(&self) -> Vec<(String, String)> {
        let mut files = Vec::with_capacity(self.file_count());
        files.push((TEMPLATE_FILE.to_string(), render_template(&self.skill_name)));
        files.push((
            SECTIONS_FILE.to_string(),
            render_sections(&self.rules, &self.display_name),
        ));
        files.extend(
            self.rules
                .iter()
                .map(|rule| (rule.filename.clone(), render_rule(rule))),
        );
        files
    }

    /// Replace `skill_dir/rules/` with the generated files.
    ///
    /// In dry-run mode nothing is touched and the report counts what would
    /// have been written.
    pub fn write(&self, skill_dir: &Path, dry_run: bool) -> Result<WriteReport> {
        let report = WriteReport {
            rules: self.rules.len(),
            files: self.file_count(),
        };
        if dry_run {
            return Ok(report);
        }

        let rules_dir = skill_dir.join(RULES_DIR);
        if rules_dir.exists() {
            fs::remove_dir_all(&rules_dir).map_err(RulesError::io("remove", &rules_dir))?;
        }
        fs::create_dir_all(&rules_dir).map_err(RulesError::io("create", &rules_dir))?;

        for (name, content) in self.files() {
            let path = rules_dir.join(&name);
            fs::write(&path, content).map_err(RulesError::io("write", &path))?;
        }

        debug!("Wrote {} files to {:?}", report.files, rules_dir);
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use skillsmith_types::{Frontmatter, ImpactLevel};

    fn document(body: &str) -> SkillDocument {
        SkillDocument::new(
            Frontmatter {
                name: Some("caching".to_string()),
                ..Frontmatter::default()
            },
            body,
        )
    }

    #[test]
    fn test_no_best_practices_builds_nothing() {
        let doc = document("## Overview\n\nCaching explained.\n");
        assert!(RuleSet::build(&doc, "caching", "Caching", "caching").is_none());
    }

    #[test]
    fn test_duplicate_titles_keep_order_and_indexes() {
        let doc = document(
            "## Best Practices\n\n- **Use Caching**: for hot reads.\n- **Use Caching**: for config too.\n",
        );
        let set = RuleSet::build(&doc, "caching", "Caching", "backend/caching").unwrap();

        let rules = set.rules();
        assert_eq!(rules[0].filename, "caching-use-caching.md");
        assert_eq!(rules[1].filename, "caching-use-caching-1.md");
        assert_eq!((rules[0].index, rules[1].index), (0, 1));
        assert_eq!(rules[0].tags.as_slice(), ["caching", "backend"]);
        assert_eq!(set.file_count(), 4);
    }

    #[test]
    fn test_rules_carry_impact_and_rationale() {
        let doc = document("## Rules\n- Never cache secrets.\n- Consider a TTL.\n- Keep keys short.\n");
        let set = RuleSet::build(&doc, "caching", "Caching", "caching").unwrap();

        let impacts: Vec<ImpactLevel> = set.rules().iter().map(|r| r.impact).collect();
        assert_eq!(
            impacts,
            [ImpactLevel::Critical, ImpactLevel::Low, ImpactLevel::Medium]
        );
        assert_eq!(set.rules()[1].impact_description, "recommended but situational");
    }

    #[test]
    fn test_files_order() {
        let set = RuleSet::from_bullets("x", "X", &["One rule here".to_string()], &TagSet::new());
        let names: Vec<String> = set.files().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["_template.md", "_sections.md", "x-one-rule-here.md"]);
    }
}
