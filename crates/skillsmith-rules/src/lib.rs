//! Skillsmith Rules
//!
//! Decomposes the best-practices section of a skill document into individual,
//! impact-classified rule files.
//!
//! ## Pipeline
//!
//! 1. [`extract`]: find the best-practices section and split it into bullets
//! 2. [`bullet`]: split each bullet into title and description
//! 3. [`impact`]: classify each bullet as CRITICAL, HIGH, MEDIUM or LOW
//! 4. [`tags`]: derive the tags shared by all rules of a skill
//! 5. [`filename`]: name each rule file and resolve collisions
//! 6. [`assemble`]: build the [`RuleSet`] and write `rules/`
//!
//! Every step is a pure function of the document text, so a rerun over
//! unchanged input reproduces identical files.

pub mod assemble;
pub mod bullet;
pub mod error;
pub mod extract;
pub mod filename;
pub mod impact;
pub mod render;
pub mod tags;

pub use assemble::{RuleSet, WriteReport, RULES_DIR, SECTIONS_FILE, TEMPLATE_FILE};
pub use bullet::parse_bullet;
pub use error::{Result, RulesError};
pub use extract::{extract_best_practices, find_section, BEST_PRACTICE_HEADERS};
pub use filename::{resolve_collisions, rule_filename, slugify};
pub use impact::classify;
pub use render::{parse_rule_file, RuleFile};
pub use tags::derive_tags;
