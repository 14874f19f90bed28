//! Skillsmith Skills
//!
//! Loading side of the skill corpus: every skill is a directory holding a
//! `SKILL.md` file made of an optional YAML frontmatter block and a Markdown
//! body.
//!
//! ## Features
//!
//! - Tolerant frontmatter parsing: malformed headers degrade to empty metadata
//! - Recursive discovery of skill directories below a skills root, in a stable order
//! - Sub-skill listing for nested skills
//! - Display-name and description helpers shared by the generators

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod registry;
pub mod skill;

pub use registry::{find_sub_skills, SkillsRegistry, SubSkill};
pub use skill::{clean_description, display_name_from, parse_skill_content, Skill, SKILL_FILE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Skill, SkillsRegistry, SubSkill};
}
