//! Skillsmith Audit
//!
//! Scores every skill document on structure (code blocks, tables, sections,
//! best-practice items) against boilerplate and thin content, and renders a
//! corpus report with the weakest skills first.

pub mod analyze;
pub mod report;

pub use analyze::{QualityReport, BOILERPLATE_PHRASES};
pub use report::{AuditReport, QualityBracket};

use anyhow::Result;
use skillsmith_skills::SkillsRegistry;
use tracing::debug;

/// Audit every discovered skill of `registry`
pub fn audit(registry: &SkillsRegistry, bottom: usize) -> Result<AuditReport> {
    let mut reports = Vec::with_capacity(registry.len());
    for skill in registry.skills() {
        let skill = skill?;
        match QualityReport::from_skill(&skill) {
            Some(report) => reports.push(report),
            None => debug!("No frontmatter, not audited: {}", skill.rel_path),
        }
    }
    Ok(AuditReport::new(reports, bottom))
}
