use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::TagSet;

/// Severity tier attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    /// All levels, most severe first
    pub const ALL: [ImpactLevel; 4] = [
        ImpactLevel::Critical,
        ImpactLevel::High,
        ImpactLevel::Medium,
        ImpactLevel::Low,
    ];

    /// Tier name as written into rule files and the section index
    pub fn as_str(self) -> &'static str {
        match self {
            ImpactLevel::Critical => "CRITICAL",
            ImpactLevel::High => "HIGH",
            ImpactLevel::Medium => "MEDIUM",
            ImpactLevel::Low => "LOW",
        }
    }

    /// Fixed rationale for the tier, independent of the keyword that matched
    pub fn rationale(self) -> &'static str {
        match self {
            ImpactLevel::Critical => "essential for correctness or security",
            ImpactLevel::High => "significant quality or reliability improvement",
            ImpactLevel::Medium => "general best practice",
            ImpactLevel::Low => "recommended but situational",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name an impact tier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown impact level: '{0}'")]
pub struct UnknownImpactLevel(pub String);

impl FromStr for ImpactLevel {
    type Err = UnknownImpactLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImpactLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| UnknownImpactLevel(s.to_string()))
    }
}

/// Title and description split out of one best-practice bullet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBullet {
    pub title: String,
    pub description: String,
}

/// One classified, filed rule derived from a single bullet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRecord {
    pub title: String,
    pub description: String,
    pub impact: ImpactLevel,
    pub impact_description: String,
    /// File name inside `rules/`, unique within one skill
    pub filename: String,
    /// 0-based position of the source bullet in extraction order
    pub index: usize,
    pub tags: TagSet,
}

impl RuleRecord {
    /// 1-based position shown in the section index
    pub fn display_index(&self) -> usize {
        self.index + 1
    }
}
