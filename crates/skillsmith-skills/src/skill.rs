//! Skill definition and parsing
//!
//! Each skill is a folder containing SKILL.md with optional YAML frontmatter

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use skillsmith_types::{Frontmatter, SkillDocument, SkillMeta};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::warn;

/// Name of the skill definition file inside a skill directory
pub const SKILL_FILE: &str = "SKILL.md";

static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n(.*)").expect("valid regex")
});

/// A skill loaded from disk
#[derive(Debug, Clone)]
pub struct Skill {
    /// Parsed frontmatter and Markdown body
    pub document: SkillDocument,
    /// Full path to the skill directory
    pub path: PathBuf,
    /// Path relative to the skills root, `/`-separated (`.` for the root itself)
    pub rel_path: String,
    /// Whether SKILL.md opened with a frontmatter block at all
    pub has_frontmatter: bool,
    name: String,
}

impl Skill {
    /// Load a skill from `dir`, recording its location relative to `root`
    pub fn from_dir(dir: &Path, root: &Path) -> Result<Self> {
        let skill_file = dir.join(SKILL_FILE);

        if !skill_file.is_file() {
            return Err(anyhow!("{} not found in {:?}", SKILL_FILE, dir));
        }

        let content = fs::read_to_string(&skill_file)
            .with_context(|| format!("Failed to read {:?}", skill_file))?;

        let (frontmatter, body) = parse_skill_content(&content);
        let has_frontmatter = frontmatter.is_some();
        let frontmatter = frontmatter.unwrap_or_default();

        let name = frontmatter
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| dir_name(dir));

        Ok(Self {
            document: SkillDocument::new(frontmatter, body),
            path: dir.to_path_buf(),
            rel_path: relative_path(root, dir),
            has_frontmatter,
            name,
        })
    }

    /// Skill name: frontmatter `name`, falling back to the directory name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-facing name (see [`display_name_from`])
    pub fn display_name(&self) -> String {
        display_name_from(&self.name, self.document.frontmatter.display_name())
    }

    /// Description without its `USE FOR:` / `DO NOT USE FOR:` clauses
    pub fn clean_description(&self) -> String {
        clean_description(self.document.frontmatter.description())
    }

    /// Parsed frontmatter
    pub fn frontmatter(&self) -> &Frontmatter {
        &self.document.frontmatter
    }

    /// Markdown body following the frontmatter
    pub fn body(&self) -> &str {
        &self.document.body
    }
}

/// Split SKILL.md content into frontmatter and body.
///
/// Returns `None` for the frontmatter when the file has no `---` block, in
/// which case the whole content is the body. A block that is not valid YAML,
/// or not a mapping, yields `Some(Frontmatter::default())`.
pub fn parse_skill_content(content: &str) -> (Option<Frontmatter>, String) {
    let Some(captures) = FRONTMATTER_RE.captures(content) else {
        return (None, content.to_string());
    };

    let yaml_str = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let frontmatter = match serde_yaml::from_str::<Value>(yaml_str) {
        Ok(value) => frontmatter_from_yaml(&value),
        Err(e) => {
            warn!("Malformed YAML frontmatter, continuing with empty metadata: {}", e);
            Frontmatter::default()
        }
    };

    (Some(frontmatter), body.to_string())
}

/// Read the known keys out of a YAML value, ignoring anything of the wrong type
fn frontmatter_from_yaml(value: &Value) -> Frontmatter {
    let Some(map) = value.as_mapping() else {
        return Frontmatter::default();
    };
    let meta = map.get("metadata").and_then(Value::as_mapping);

    Frontmatter {
        name: string_field(map, "name"),
        description: string_field(map, "description"),
        license: string_field(map, "license"),
        compatibility: string_field(map, "compatibility"),
        metadata: SkillMeta {
            display_name: meta.and_then(|m| string_field(m, "displayName")),
            tags: meta
                .and_then(|m| m.get("tags"))
                .and_then(Value::as_sequence)
                .map(|seq| seq.iter().filter_map(scalar_string).collect()),
            author: meta.and_then(|m| string_field(m, "author")),
        },
    }
}

fn string_field(map: &Mapping, key: &str) -> Option<String> {
    map.get(key).and_then(scalar_string)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Display name: `displayName` when set, otherwise the name with dashes
/// turned into spaces and title-cased (`azure-functions` -> `Azure Functions`)
pub fn display_name_from(name: &str, display_name: Option<&str>) -> String {
    match display_name {
        Some(display) if !display.trim().is_empty() => display.to_string(),
        _ => title_case(&name.replace('-', " ")),
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// First paragraph of a description, stopping at a `USE FOR:` or
/// `DO NOT USE FOR:` line, collapsed onto a single line
pub fn clean_description(desc: &str) -> String {
    let mut kept = Vec::new();
    for line in desc.trim().lines() {
        let stripped = line.trim();
        let upper = stripped.to_uppercase();
        if upper.starts_with("USE FOR:") || upper.starts_with("DO NOT USE FOR:") {
            break;
        }
        kept.push(stripped);
    }
    kept.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `dir` relative to `root` with `/` separators, `.` when they are the same
pub(crate) fn relative_path(root: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

pub(crate) fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
