//! `README.md`: human-facing overview of a skill directory

use skillsmith_rules::RULES_DIR;
use skillsmith_skills::{Skill, SubSkill};
use std::fs;
use std::path::Path;

use crate::metadata::license_of;
use crate::DocsOptions;

/// Sub-skill descriptions longer than this are cut and marked with `...`
const SUB_SKILL_DESC_CHARS: usize = 120;

/// Number of rule files in `skill_dir/rules/`, ignoring `_`-prefixed ones.
/// `None` when the directory does not exist.
pub fn count_rule_files(skill_dir: &Path) -> Option<usize> {
    let entries = fs::read_dir(skill_dir.join(RULES_DIR)).ok()?;
    let count = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".md") && !name.starts_with('_')
        })
        .count();
    Some(count)
}

fn short_description(description: &str) -> String {
    if description.chars().count() > SUB_SKILL_DESC_CHARS {
        let head: String = description.chars().take(SUB_SKILL_DESC_CHARS).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}

/// Render the README for `skill`
pub fn render_readme(
    skill: &Skill,
    sub_skills: &[SubSkill],
    rule_count: Option<usize>,
    options: &DocsOptions,
) -> String {
    let mut lines = vec![format!("# {}", skill.display_name()), String::new()];

    let description = skill.clean_description();
    if !description.is_empty() {
        lines.push(description);
        lines.push(String::new());
    }

    lines.extend(
        [
            "## Structure",
            "",
            "| File | Purpose |",
            "|------|---------|",
            "| `SKILL.md` | Agent skill definition (frontmatter + instructions) |",
            "| `metadata.json` | Machine-readable metadata and versioning |",
            "| `AGENTS.md` | Agent-optimized quick reference (generated) |",
            "| `README.md` | This file |",
        ]
        .map(String::from),
    );
    if let Some(count) = rule_count {
        lines.push(format!("| `{RULES_DIR}/` | {count} individual best practice rules |"));
    }
    lines.push(String::new());

    if !sub_skills.is_empty() {
        lines.extend(
            ["## Sub-skills", "", "| Skill | Description |", "|-------|-------------|"]
                .map(String::from),
        );
        for sub in sub_skills {
            lines.push(format!(
                "| [`{dir}/`]({dir}/) | {} |",
                short_description(&sub.description),
                dir = sub.dir,
            ));
        }
        lines.push(String::new());
    }

    let install_path = if skill.rel_path == "." {
        skill.name()
    } else {
        skill.rel_path.as_str()
    };
    lines.extend(["## Usage", "", "```bash"].map(String::from));
    lines.push(format!(
        "npx agentskills add {}/{install_path}",
        options.install_source.trim_end_matches('/')
    ));
    lines.extend(["```", ""].map(String::from));

    lines.extend(["## License", ""].map(String::from));
    lines.push(license_of(skill, options));
    lines.push(String::new());

    lines.join("\n")
}
