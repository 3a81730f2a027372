use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mindful::cli::args::{Cli, Commands};
use mindful::cli::commands;
use mindful::config::Config;
use mindful::error::MindfulError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MindfulError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    let output = match cli.command {
        Some(Commands::Sessions { category }) => commands::sessions(&config, category, format)?,
        Some(Commands::Start { session }) => commands::start(&config, &session)?,
        Some(Commands::Completions { shell, install }) => commands::completions(&shell, install)?,
        Some(Commands::Tui) | None => {
            mindful::tui::run(&config, None)?;
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
