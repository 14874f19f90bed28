//! Best-practices section lookup and bullet segmentation

/// Level-2 headings that open a best-practices section, in lookup order
pub const BEST_PRACTICE_HEADERS: [&str; 5] = [
    "## Best Practices",
    "## Guidelines",
    "## Rules You Must Follow",
    "## Rules",
    "## Recommendations",
];

/// Content of the first best-practices section in `body`.
///
/// The section starts on the line after the heading and ends before the next
/// line starting with `## `, or at the end of the body. Returns `None` when no
/// line is exactly one of [`BEST_PRACTICE_HEADERS`] (trailing whitespace allowed).
pub fn find_section(body: &str) -> Option<&str> {
    let mut offset = 0;
    let mut start = None;

    for line in body.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match start {
            None => {
                let heading = line.trim_end();
                if BEST_PRACTICE_HEADERS.contains(&heading) {
                    start = Some(offset);
                }
            }
            Some(section_start) => {
                if line.starts_with("## ") {
                    return Some(&body[section_start..line_start]);
                }
            }
        }
    }

    start.map(|section_start| &body[section_start..])
}

/// Raw bullets of the best-practices section of `body`, in source order.
///
/// An empty result means the skill has no extractable rules.
pub fn extract_best_practices(body: &str) -> Vec<String> {
    find_section(body).map(segment_bullets).unwrap_or_default()
}

/// Split a section into bullets, joining wrapped continuation lines.
///
/// `- ` and `1. ` lines open a bullet, blank lines close it, `#` lines are
/// skipped and any other text continues the open bullet. Prose outside of a
/// bullet is dropped.
pub fn segment_bullets(section: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    let mut current: Option<String> = None;

    for line in section.lines() {
        let stripped = line.trim();

        if let Some(rest) = stripped
            .strip_prefix("- ")
            .or_else(|| strip_number_marker(stripped))
        {
            bullets.extend(current.take());
            current = Some(rest.to_string());
        } else if stripped.is_empty() {
            bullets.extend(current.take());
        } else if !stripped.starts_with('#') {
            if let Some(text) = current.as_mut() {
                text.push(' ');
                text.push_str(stripped);
            }
        }
    }
    bullets.extend(current);

    bullets
        .into_iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect()
}

/// `"12. text"` -> `Some("text")`
fn strip_number_marker(line: &str) -> Option<&str> {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let text = rest.trim_start();
    (text.len() < rest.len()).then_some(text)
}
