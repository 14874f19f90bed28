//! Bullet parsing: `(title, description)` out of one raw bullet

use regex::Regex;
use skillsmith_types::ParsedBullet;
use std::sync::LazyLock;

/// Characters a derived title can end at
const TITLE_BREAKS: [char; 6] = ['.', '!', '?', ':', '—', '–'];

/// Derived titles end at a break found within this character window
const TITLE_MIN_CHARS: usize = 10;
const TITLE_MAX_CHARS: usize = 60;

/// `**Label**` + optional `:`/`.`/dash/whitespace separators + non-empty body
static LABELED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\*\*(.+?)\*\*[:.\s—–-]*(.+)").expect("valid regex")
});

/// Split a raw bullet into title and description.
///
/// A bold label becomes the title. A label body starting in lowercase is a
/// fragment, so the description is rewritten as `"{title}: {body}"`. Bullets
/// without a label keep their full text as description and get a title
/// derived from the first clause.
pub fn parse_bullet(bullet: &str) -> ParsedBullet {
    let bullet = bullet.trim();

    if let Some(parsed) = parse_labeled(bullet) {
        return parsed;
    }

    ParsedBullet {
        title: derive_title(bullet),
        description: bullet.to_string(),
    }
}

fn parse_labeled(bullet: &str) -> Option<ParsedBullet> {
    let caps = LABELED_RE.captures(bullet)?;
    let title = caps.get(1)?.as_str().trim();
    let body = caps.get(2)?.as_str().trim();
    if title.is_empty() || body.is_empty() {
        return None;
    }

    let description = if body.chars().next().is_some_and(char::is_lowercase) {
        format!("{title}: {body}")
    } else {
        body.to_string()
    };

    Some(ParsedBullet {
        title: title.to_string(),
        description,
    })
}

/// Title for an unlabeled bullet.
///
/// Cuts at the first break character that has 10 to 60 characters before it.
/// Short bullets without such a break are used whole; longer ones are cut back
/// to a word boundary within 60 characters and marked with `...`.
fn derive_title(text: &str) -> String {
    let boundary = text
        .char_indices()
        .enumerate()
        .skip(TITLE_MIN_CHARS)
        .take(TITLE_MAX_CHARS - TITLE_MIN_CHARS + 1)
        .find(|(_, (_, c))| TITLE_BREAKS.contains(c))
        .map(|(_, (byte, _))| byte);

    if let Some(end) = boundary {
        let title = text[..end].trim().trim_end_matches([',', ';', ':']).trim_end();
        if !title.is_empty() {
            return title.to_string();
        }
    }

    if text.chars().count() <= TITLE_MAX_CHARS {
        let title = text.trim_end_matches('.').trim_end();
        return if title.is_empty() { text.to_string() } else { title.to_string() };
    }

    let head: String = text.chars().take(TITLE_MAX_CHARS).collect();
    let cut = match head.rfind(' ') {
        Some(space) if space > 0 => &head[..space],
        _ => head.as_str(),
    };
    format!("{}...", cut.trim_end())
}
