//! Command implementations for mindful.
//!
//! This module contains the implementation of all CLI commands.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::catalog::{filter_by_category, find_session, CategoryFilter};
use crate::cli::args::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::MindfulError;
use crate::output::format_sessions;

/// Execute sessions command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn sessions(
    config: &Config,
    category: CategoryFilter,
    format: OutputFormat,
) -> Result<String, MindfulError> {
    let filtered = filter_by_category(config.sessions(), category);
    format_sessions(&filtered, &category.to_string(), format)
}

/// Execute start command
///
/// Resolves the session before touching the terminal, so an unknown
/// session fails with a plain error instead of a blank screen.
///
/// # Errors
///
/// Returns `MindfulError::NotFound` if no session matches, or an error
/// if the terminal cannot be set up.
pub fn start(config: &Config, session: &str) -> Result<String, MindfulError> {
    let descriptor = find_session(config.sessions(), session)
        .ok_or_else(|| MindfulError::NotFound(format!("session '{session}'")))?
        .clone();

    crate::tui::run(config, Some(&descriptor))?;
    Ok(String::new())
}

/// Execute completions command
///
/// # Errors
///
/// Returns `MindfulError::NotFound` if the shell name is not recognized.
pub fn completions(shell_name: &str, install: bool) -> Result<String, MindfulError> {
    let shell = shell_from_str(shell_name).ok_or_else(|| {
        MindfulError::NotFound(format!(
            "shell '{shell_name}' (expected bash, zsh, fish, powershell, or elvish)"
        ))
    })?;

    if install {
        return Ok(completion_install_instructions(shell));
    }
    Ok(generate_completions(shell))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Generate the completion script for the specified shell.
fn generate_completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "mindful", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Get installation instructions for shell completions.
fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r#"# Add to ~/.bashrc or ~/.bash_profile:
source <(mindful completions bash)

# Or save to a file:
mindful completions bash > /usr/local/etc/bash_completion.d/mindful
"#
        .to_string(),

        Shell::Zsh => r#"# Add to ~/.zshrc (before compinit):
source <(mindful completions zsh)

# Or save to your fpath:
mindful completions zsh > ~/.zsh/completions/_mindful
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"#
        .to_string(),

        Shell::Fish => r#"# Save to fish completions directory:
mindful completions fish > ~/.config/fish/completions/mindful.fish

# Or run directly:
mindful completions fish | source
"#
        .to_string(),

        Shell::PowerShell => r#"# Add to your PowerShell profile ($PROFILE):
mindful completions powershell | Out-String | Invoke-Expression

# Or save to a file and dot-source it:
mindful completions powershell > ~/mindful.ps1
. ~/mindful.ps1
"#
        .to_string(),

        Shell::Elvish => r#"# Save to elvish completions directory:
mindful completions elvish > ~/.elvish/lib/mindful.elv

# Then add to ~/.elvish/rc.elv:
use mindful
"#
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
