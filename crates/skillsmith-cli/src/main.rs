mod cli;
mod config;
mod service;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use service::SkillsmithService;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_flags(cli.root, cli.log_level);

    // Create and run the service
    let service = SkillsmithService::new(config);
    service.run(cli.command)
}
