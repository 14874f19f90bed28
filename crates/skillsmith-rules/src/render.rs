//! Markdown rendering of rule files, the section index and the authoring
//! template, plus reading a rule file back

use serde::Deserialize;
use skillsmith_types::{ImpactLevel, RuleRecord};

use crate::error::{Result, RulesError};

/// Rule file preamble and body, as read back from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    pub title: String,
    pub impact: ImpactLevel,
    pub impact_description: String,
    pub tags: Vec<String>,
    /// Text of the `## ` heading following the preamble
    pub heading: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Preamble {
    title: String,
    impact: String,
    impact_description: String,
}

/// Double-quoted YAML scalar
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Content of one rule file
pub fn render_rule(rule: &RuleRecord) -> String {
    let lines = [
        "---".to_string(),
        format!("title: {}", quote(&rule.title)),
        format!("impact: {}", rule.impact),
        format!("impactDescription: {}", quote(&rule.impact_description)),
        format!("tags: {}", rule.tags.join(", ")),
        "---".to_string(),
        String::new(),
        format!("## {}", rule.title),
        String::new(),
        rule.description.clone(),
        String::new(),
    ];
    lines.join("\n")
}

/// `_template.md`: authoring stub for hand-written rules
pub fn render_template(skill_name: &str) -> String {
    format!(
        r#"---
title: "Rule Title"
impact: MEDIUM
impactDescription: "brief explanation of why this matters"
tags: {skill_name}, tag2
---

## Rule Title

Brief explanation of the rule and why it matters.

**Incorrect:**

```
<!-- Example of what NOT to do -->
```

**Correct:**

```
<!-- Example of the recommended approach -->
```

**Reference:** [link to documentation or source]
"#
    )
}

/// `_sections.md`: table of every rule in extraction order
pub fn render_sections(rules: &[RuleRecord], display_name: &str) -> String {
    let mut lines = vec![
        format!("# {display_name} Rules"),
        String::new(),
        format!("Best practices and rules for {display_name}."),
        String::new(),
        "## Rules".to_string(),
        String::new(),
        "| # | Rule | Impact | File |".to_string(),
        "|---|------|--------|------|".to_string(),
    ];
    for rule in rules {
        lines.push(format!(
            "| {} | {} | {} | [`{file}`]({file}) |",
            rule.display_index(),
            rule.title.replace('|', "\\|"),
            rule.impact,
            file = rule.filename,
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a rendered rule file back into its fields
pub fn parse_rule_file(content: &str) -> Result<RuleFile> {
    let rest = content
        .strip_prefix("---\n")
        .ok_or_else(|| RulesError::MalformedRuleFile("missing opening ---".to_string()))?;
    let (yaml, body) = rest
        .split_once("\n---\n")
        .ok_or_else(|| RulesError::MalformedRuleFile("missing closing ---".to_string()))?;

    // `tags:` is a raw comma list, not YAML
    let mut tags = Vec::new();
    let mut fields = Vec::new();
    for line in yaml.lines() {
        match line.strip_prefix("tags:") {
            Some(joined) => tags = split_tags(joined),
            None => fields.push(line),
        }
    }
    let preamble: Preamble = serde_yaml::from_str(&fields.join("\n"))?;

    let body = body.trim_start_matches('\n');
    let (heading_line, description) = body.split_once('\n').unwrap_or((body, ""));
    let heading = heading_line
        .strip_prefix("## ")
        .ok_or_else(|| RulesError::MalformedRuleFile("missing rule heading".to_string()))?;

    Ok(RuleFile {
        title: preamble.title,
        impact: preamble.impact.parse()?,
        impact_description: preamble.impact_description,
        tags,
        heading: heading.to_string(),
        description: description.trim().to_string(),
    })
}
