//! Per-skill content metrics and the quality score

use regex::Regex;
use skillsmith_rules::find_section;
use skillsmith_skills::Skill;
use std::sync::LazyLock;

/// Phrases that signal filler rather than specific guidance
pub const BOILERPLATE_PHRASES: [&str; 15] = [
    "use appropriate",
    "configure as needed",
    "follow best practices",
    "leverage built-in",
    "extend as needed",
    "use conventions",
    "keep tests focused",
    "use health checks",
    "implement circuit breakers",
    "configure timeout policies",
    "add custom middleware",
    "monitor proxy metrics",
    "monitor metrics",
    "choose appropriate",
    "as needed",
];

/// Best-practice bullets shorter than this (trimmed) count as thin
pub const THIN_BULLET_CHARS: usize = 40;

static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\w+").expect("valid regex"));

/// Content metrics of one skill body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    /// Skill path relative to the skills root
    pub path: String,
    pub body_len: usize,
    /// Fenced code blocks with a language tag
    pub code_blocks: usize,
    /// Lines with at least three `|`
    pub tables: usize,
    /// `## ` headings
    pub sections: usize,
    /// Boilerplate phrase occurrences in the whole body
    pub generic: usize,
    /// Boilerplate phrases present at least once
    pub generic_found: Vec<&'static str>,
    /// `- ` lines of the best-practices section
    pub bp_items: usize,
    /// Boilerplate phrase occurrences inside the best-practices section
    pub bp_generic: usize,
    pub thin_bp: usize,
    pub has_overview: bool,
    pub has_example: bool,
    pub score: i64,
}

impl QualityReport {
    /// Score a skill. Skills without a frontmatter block are not audited.
    pub fn from_skill(skill: &Skill) -> Option<Self> {
        skill
            .has_frontmatter
            .then(|| Self::analyze(&skill.rel_path, skill.body()))
    }

    /// Measure `body` and compute its score
    pub fn analyze(path: &str, body: &str) -> Self {
        let body_lower = body.to_lowercase();
        let mut generic = 0;
        let mut generic_found = Vec::new();
        for phrase in BOILERPLATE_PHRASES {
            let count = body_lower.matches(phrase).count();
            if count > 0 {
                generic += count;
                generic_found.push(phrase);
            }
        }

        let bp_text = find_section(body).unwrap_or("");
        let bp_lower = bp_text.to_lowercase();
        let bp_generic = BOILERPLATE_PHRASES
            .iter()
            .map(|phrase| bp_lower.matches(phrase).count())
            .sum();

        let mut report = Self {
            path: path.to_string(),
            body_len: body.chars().count(),
            code_blocks: CODE_FENCE_RE.find_iter(body).count(),
            tables: body.lines().filter(|l| l.matches('|').count() >= 3).count(),
            sections: body.lines().filter(|l| l.starts_with("## ")).count(),
            generic,
            generic_found,
            bp_items: bp_text.lines().filter(|l| l.starts_with("- ")).count(),
            bp_generic,
            thin_bp: bp_text
                .lines()
                .map(str::trim)
                .filter(|l| l.starts_with("- ") && l.chars().count() < THIN_BULLET_CHARS)
                .count(),
            has_overview: body.lines().any(|l| l.starts_with("## Overview")),
            has_example: body.lines().any(|l| l.starts_with("## Example")),
            score: 0,
        };
        report.score = report.compute_score();
        report
    }

    fn compute_score(&self) -> i64 {
        let count = |n: usize| i64::try_from(n).unwrap_or(i64::MAX / 8);

        let mut score = 3 * count(self.code_blocks)
            + 2 * count(self.tables)
            + 2 * count(self.sections)
            + count(self.bp_items)
            - 2 * count(self.generic);

        score -= match self.body_len {
            0..=499 => 20,
            500..=999 => 10,
            1000..=1999 => 5,
            _ => 0,
        };
        score
    }

    /// More than half of at least three best-practice items are thin
    pub fn is_thin(&self) -> bool {
        self.thin_bp >= 3 && self.bp_items > 0 && self.thin_bp * 2 > self.bp_items
    }

    pub fn is_short(&self) -> bool {
        self.body_len < 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_structure() {
        let body = "\
## Overview

Intro text.

```rust
fn main() {}
```

```
plain fence
```

| a | b |
|---|---|

## Example

Nothing.
";
        let report = QualityReport::analyze("x", body);
        assert_eq!(report.code_blocks, 1);
        assert_eq!(report.tables, 2);
        assert_eq!(report.sections, 2);
        assert!(report.has_overview);
        assert!(report.has_example);
        assert_eq!(report.bp_items, 0);
    }

    #[test]
    fn test_boilerplate_counts_overlap() {
        let report = QualityReport::analyze("x", "Configure as needed. Extend AS NEEDED.");
        assert_eq!(report.generic, 4);
        assert_eq!(
            report.generic_found,
            ["configure as needed", "extend as needed", "as needed"]
        );
    }

    #[test]
    fn test_score_formula_and_length_penalty() {
        let body = "## Best Practices\n\n- Use appropriate tools\n- Keep it specific and well scoped in each module\n";
        let report = QualityReport::analyze("x", body);
        assert_eq!(report.bp_items, 2);
        assert_eq!(report.generic, 1);
        assert_eq!(report.bp_generic, 1);
        assert_eq!(report.thin_bp, 1);
        // one heading, two items, one phrase, body under 500 chars
        assert_eq!(report.score, 2 + 2 - 2 - 20);
    }

    #[test]
    fn test_length_brackets() {
        let pad = |n: usize| "a".repeat(n);
        assert_eq!(QualityReport::analyze("x", &pad(499)).score, -20);
        assert_eq!(QualityReport::analyze("x", &pad(500)).score, -10);
        assert_eq!(QualityReport::analyze("x", &pad(1999)).score, -5);
        assert_eq!(QualityReport::analyze("x", &pad(2000)).score, 0);
    }

    #[test]
    fn test_thin_detection() {
        let body = "## Rules\n- Use X\n- Use Y\n- Use Z\n- This one is long enough to not count as a thin item\n";
        let report = QualityReport::analyze("x", body);
        assert_eq!((report.thin_bp, report.bp_items), (3, 4));
        assert!(report.is_thin());

        let balanced = "## Rules\n- Use X\n- Use Y\n- Use Z\n- Long item number one that is long enough\n- Long item number two that is long enough\n- Long item number three that is long enough\n";
        assert!(!QualityReport::analyze("x", balanced).is_thin());
    }
}
