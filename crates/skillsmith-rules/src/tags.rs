//! Tag derivation for a skill's rules

use skillsmith_types::{Frontmatter, TagSet};

const USE_FOR_MARKER: &str = "USE FOR:";
const DO_NOT_MARKER: &str = "DO NOT USE FOR:";
const MAX_USE_FOR_TAGS: usize = 3;

/// Tags attached to every rule of a skill.
///
/// Insertion order: `metadata.tags`, the skill name, the directories between
/// the skills root and the skill (the skill's own directory excluded), then up
/// to three slugified `USE FOR:` keywords. Duplicates keep their first position.
pub fn derive_tags(frontmatter: &Frontmatter, skill_name: &str, rel_path: &str) -> TagSet {
    let mut tags = TagSet::new();

    if let Some(meta_tags) = &frontmatter.metadata.tags {
        tags.extend(meta_tags.iter().map(|t| t.trim().to_string()));
    }

    tags.push(skill_name);

    let segments: Vec<&str> = rel_path.split('/').collect();
    if let Some((_, parents)) = segments.split_last() {
        tags.extend(parents.iter().copied());
    }

    for keyword in use_for_keywords(frontmatter.description())
        .into_iter()
        .take(MAX_USE_FOR_TAGS)
    {
        tags.push(slugify_tag(&keyword));
    }

    tags
}

/// Comma-separated keywords of the first `USE FOR:` clause.
///
/// The clause ends at a newline, at a `DO NOT USE FOR:` marker or at the end
/// of the text. A `USE FOR:` that is itself part of `DO NOT USE FOR:` is not a
/// clause start.
pub fn use_for_keywords(description: &str) -> Vec<String> {
    let Some(start) = description
        .match_indices(USE_FOR_MARKER)
        .map(|(idx, _)| idx)
        .find(|&idx| !description[..idx].ends_with("DO NOT "))
    else {
        return Vec::new();
    };

    let rest = description[start + USE_FOR_MARKER.len()..].trim_start();
    let end = [rest.find('\n'), rest.find(DO_NOT_MARKER)]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());

    let clause = &rest[..end];
    if clause.trim().is_empty() {
        return Vec::new();
    }

    clause.split(',').map(|kw| kw.trim().to_string()).collect()
}

/// Lowercase, collapse every run of characters outside `[a-z0-9-]` into one
/// dash, strip leading and trailing dashes
pub fn slugify_tag(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    slug.trim_matches('-').to_string()
}
