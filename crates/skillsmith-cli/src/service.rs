use crate::cli::Command;
use crate::config::Config;
use anyhow::Result;
use skillsmith_docs::SkillFiles;
use skillsmith_rules::{RuleSet, WriteReport};
use skillsmith_skills::{SkillsRegistry, SKILL_FILE};
use std::fmt;
use tracing::{debug, info, warn};

/// Totals of a `rules` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesSummary {
    pub processed: usize,
    pub with_rules: usize,
    pub skipped: usize,
    pub rule_files: usize,
    pub files: usize,
}

impl RulesSummary {
    /// Count one skill; `None` means it had no best practices
    pub fn record(&mut self, report: Option<WriteReport>) {
        self.processed += 1;
        match report {
            Some(report) => {
                self.with_rules += 1;
                self.rule_files += report.rules;
                self.files += report.files;
            }
            None => self.skipped += 1,
        }
    }
}

impl fmt::Display for RulesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Skills processed:     {}", self.processed)?;
        writeln!(f, "  With rules/:        {}", self.with_rules)?;
        writeln!(f, "  Skipped (no BP):    {}", self.skipped)?;
        writeln!(f, "Total rule files:     {}", self.rule_files)?;
        writeln!(f, "Total files written:  {}", self.files)?;
        write!(f, "  (includes _template.md and _sections.md per skill)")
    }
}

/// Totals of a `docs` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocsSummary {
    pub processed: usize,
    pub skipped: usize,
}

impl fmt::Display for DocsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done: {} processed, {} skipped", self.processed, self.skipped)
    }
}

/// Skillsmith service - runs one command over the skills tree
pub struct SkillsmithService {
    config: Config,
}

impl SkillsmithService {
    /// Create a new service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run `command`, printing its report to stdout
    pub fn run(self, command: Command) -> Result<()> {
        // Initialize logging
        skillsmith_logging::init_logging(&self.config.logging.level)?;
        info!("Skills root: {:?}", self.config.skills.root);

        let mut registry = SkillsRegistry::new(&self.config.skills.root);
        registry.discover()?;

        match command {
            Command::Rules { dry_run, verbose } => {
                self.rules(&registry, dry_run, verbose)?;
            }
            Command::Docs { dry_run } => {
                self.docs(&registry, dry_run)?;
            }
            Command::Audit { bottom } => {
                let bottom = bottom.unwrap_or(self.config.audit.bottom);
                let report = skillsmith_audit::audit(&registry, bottom)?;
                print!("{report}");
            }
        }

        Ok(())
    }

    fn print_header(registry: &SkillsRegistry, dry_run: bool) {
        println!("Found {} skill directories", registry.len());
        if dry_run {
            println!("DRY RUN -- no files will be written\n");
        }
    }

    fn rules(&self, registry: &SkillsRegistry, dry_run: bool, verbose: bool) -> Result<RulesSummary> {
        Self::print_header(registry, dry_run);

        let mut summary = RulesSummary::default();
        for skill in registry.skills() {
            let skill = skill?;
            let display_name = skill.display_name();

            let Some(rule_set) =
                RuleSet::build(&skill.document, skill.name(), &display_name, &skill.rel_path)
            else {
                debug!("No best practices in {}", skill.rel_path);
                if verbose {
                    println!("  SKIP (no best practices): {}", skill.rel_path);
                }
                summary.record(None);
                continue;
            };

            let report = rule_set.write(&skill.path, dry_run)?;
            info!("Generated {} rules for {}", report.rules, skill.rel_path);
            println!(
                "  OK: {} ({} rules, {} files)",
                skill.rel_path, report.rules, report.files
            );
            summary.record(Some(report));
        }

        println!("\n{summary}");
        Ok(summary)
    }

    fn docs(&self, registry: &SkillsRegistry, dry_run: bool) -> Result<DocsSummary> {
        Self::print_header(registry, dry_run);

        let mut summary = DocsSummary::default();
        for dir in registry.skill_dirs() {
            // SKILL.md removed since discovery
            if !dir.join(SKILL_FILE).is_file() {
                warn!("Skipping {:?}: {} is gone", dir, SKILL_FILE);
                summary.skipped += 1;
                continue;
            }

            let skill = registry.load(dir)?;
            let files = SkillFiles::generate(&skill, &self.config.docs)?;
            if !dry_run {
                files.write(&skill)?;
            }

            summary.processed += 1;
            info!("Generated companion files for {}", skill.rel_path);
            if files.sub_skills > 0 {
                println!("  OK: {} ({} sub-skills)", skill.rel_path, files.sub_skills);
            } else {
                println!("  OK: {}", skill.rel_path);
            }
        }

        println!("\n{summary}");
        Ok(summary)
    }
}
