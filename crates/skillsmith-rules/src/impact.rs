//! Keyword-based impact classification

use skillsmith_types::ImpactLevel;

const CRITICAL_KEYWORDS: &[&str] = &[
    "never",
    "always",
    "must",
    "critical",
    "security",
    "vulnerability",
    "injection",
    "secret",
    "credential",
    "production",
    "do not",
];

const HIGH_KEYWORDS: &[&str] = &[
    "important",
    "ensure",
    "require",
    "enforce",
    "validate",
    "prevent",
    "protect",
    "avoid",
    "mandatory",
];

const LOW_KEYWORDS: &[&str] = &[
    "consider",
    "prefer",
    "optionally",
    "where possible",
    "when practical",
    "if needed",
    "may want",
];

/// Tiers in the order they are tested; MEDIUM is the fallback
const PRECEDENCE: [(ImpactLevel, &[&str]); 3] = [
    (ImpactLevel::Critical, CRITICAL_KEYWORDS),
    (ImpactLevel::High, HIGH_KEYWORDS),
    (ImpactLevel::Low, LOW_KEYWORDS),
];

/// Classify a bullet by case-insensitive substring match.
///
/// CRITICAL keywords win over HIGH, HIGH over LOW; text matching none of the
/// tables is MEDIUM.
pub fn classify(text: &str) -> ImpactLevel {
    let lower = text.to_lowercase();
    PRECEDENCE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(ImpactLevel::Medium, |(level, _)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_beats_low() {
        assert_eq!(
            classify("You must pin versions; consider a lockfile."),
            ImpactLevel::Critical
        );
    }

    #[test]
    fn test_high_beats_low() {
        assert_eq!(
            classify("Prefer small modules to avoid merge conflicts"),
            ImpactLevel::High
        );
    }

    #[test]
    fn test_low_keyword() {
        assert_eq!(
            classify("Prefer composition over inheritance when extending behavior."),
            ImpactLevel::Low
        );
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(classify("Keep functions short"), ImpactLevel::Medium);
        assert_eq!(classify(""), ImpactLevel::Medium);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("NEVER commit .env files"), ImpactLevel::Critical);
        assert_eq!(classify("Do Not block the event loop"), ImpactLevel::Critical);
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "ensure" inside "ensures", "production" inside "productionize"
        assert_eq!(classify("This ensures stable builds"), ImpactLevel::High);
        assert_eq!(classify("Productionize the pipeline"), ImpactLevel::Critical);
    }
}
