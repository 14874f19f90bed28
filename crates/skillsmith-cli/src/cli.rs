use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skillsmith")]
#[command(about = "Generate rules, companion docs and quality reports for a skills tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skills root directory (default from config: skills)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file path (default: ./skillsmith.toml over ~/.skillsmith/skillsmith.toml)
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Split each skill's best-practices section into rule files under rules/
    Rules {
        /// Report what would be generated without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Also list skills without a best-practices section
        #[arg(long, short)]
        verbose: bool,
    },

    /// Generate metadata.json, AGENTS.md and README.md for every skill
    Docs {
        /// Report what would be generated without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Score every skill and list the weakest ones
    Audit {
        /// Rows in the lowest-scores table (default from config: 60)
        #[arg(long, value_name = "N")]
        bottom: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules_flags() {
        let cli = Cli::parse_from(["skillsmith", "rules", "--dry-run", "-v", "--root", "corpus"]);
        assert_eq!(
            cli.command,
            Command::Rules {
                dry_run: true,
                verbose: true
            }
        );
        assert_eq!(cli.root, Some(PathBuf::from("corpus")));
    }

    #[test]
    fn test_parse_audit_bottom() {
        let cli = Cli::parse_from(["skillsmith", "--log-level", "debug", "audit", "--bottom", "10"]);
        assert_eq!(cli.command, Command::Audit { bottom: Some(10) });
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
