//! Rule file naming and per-skill collision resolution

use skillsmith_types::RuleRecord;
use std::collections::HashSet;

/// Longest title slug kept in a rule filename
pub const MAX_SLUG_LEN: usize = 60;

/// Slug used when a title has no alphanumeric characters
const FALLBACK_SLUG: &str = "rule";

/// Lowercase and turn every run of non-alphanumeric characters into one dash,
/// without leading or trailing dashes
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Cut a slug to `max` characters, then back to its last dash
fn truncate_slug(slug: &str, max: usize) -> &str {
    if slug.len() <= max {
        return slug;
    }
    // slugs are ASCII, byte offsets are character offsets
    let head = &slug[..max];
    match head.rfind('-') {
        Some(dash) => &head[..dash],
        None => head,
    }
}

/// `{skill}-{slug(title)}.md`, or `{slug(title)}.md` when the title slug
/// already starts with the skill slug
pub fn rule_filename(title: &str, skill_name: &str) -> String {
    let title_slug = slugify(title);
    let slug = match truncate_slug(&title_slug, MAX_SLUG_LEN) {
        "" => FALLBACK_SLUG,
        slug => slug,
    };

    let prefix = slugify(skill_name);
    if slug.starts_with(&prefix) {
        format!("{slug}.md")
    } else {
        format!("{prefix}-{slug}.md")
    }
}

/// Make filenames unique across one skill's rules, in extraction order.
///
/// The first rule to claim a name keeps it. A later rule with the same name
/// gets its extraction index spliced in before the extension
/// (`{base}-{index}.md`); should that name be taken too, `-2`, `-3`, ... is
/// appended after the index.
pub fn resolve_collisions(rules: &mut [RuleRecord]) {
    let mut seen: HashSet<String> = HashSet::with_capacity(rules.len());

    for rule in rules.iter_mut() {
        if seen.contains(&rule.filename) {
            let base = rule
                .filename
                .strip_suffix(".md")
                .unwrap_or(&rule.filename)
                .to_string();

            let mut candidate = format!("{base}-{}.md", rule.index);
            let mut attempt = 2;
            while seen.contains(&candidate) {
                candidate = format!("{base}-{}-{attempt}.md", rule.index);
                attempt += 1;
            }
            rule.filename = candidate;
        }
        seen.insert(rule.filename.clone());
    }
}
