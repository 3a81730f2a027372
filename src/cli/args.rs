use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryFilter;

#[derive(Parser)]
#[command(name = "mindful")]
#[command(about = "A meditation and breathing timer for the terminal")]
#[command(long_about = "mindful - a meditation and breathing timer for the terminal

Pick a preset session (guided meditations, breathing exercises, body
scans), then follow the countdown with play/pause, skip, and a guided
breathing animation, all without leaving the terminal.

QUICK START:
  mindful                          Open the session picker
  mindful sessions                 List the preset sessions
  mindful start \"4-7-8 Breathing\"  Jump straight into a session
  mindful sessions -o json         Script against the catalog

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  mindful <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the preset sessions
    ///
    /// Shows the session catalog: guided meditations, breathing
    /// exercises, and body scans, each with a fixed duration. Narrow the
    /// list with a category filter.
    ///
    /// # Examples
    ///
    ///   mindful sessions                  List every session
    ///   mindful ls                        Short alias
    ///   mindful sessions -c breathing     Only breathing exercises
    ///   mindful sessions -o json          Output as JSON for scripting
    ///
    /// # Tip
    ///
    /// Session ids and titles both work with 'mindful start'.
    #[command(alias = "ls")]
    Sessions {
        /// Only show sessions in this category
        #[arg(long, short = 'c', value_enum, ignore_case = true, default_value = "all")]
        category: CategoryFilter,
    },

    /// Start a session and open the timer
    ///
    /// Looks up a session by id or title (titles match
    /// case-insensitively) and opens the timer screen with the countdown
    /// already running.
    ///
    /// # Examples
    ///
    ///   mindful start 5                   Start the session with id 5
    ///   mindful start "Morning Calm"      Start by title
    ///   mindful start "box breathing"     Case doesn't matter
    ///
    /// # See Also
    ///
    /// Use 'mindful sessions' to see what's available.
    Start {
        /// Session id or title
        session: String,
    },

    /// Launch the interactive timer (default when no command is given)
    ///
    /// Full-screen session picker with vim-style navigation. Selecting a
    /// session starts its countdown; breathing sessions add a guided
    /// breathing animation above the clock.
    ///
    /// # Keybindings
    ///
    ///   j/k or arrows   Navigate the session list
    ///   f or Tab        Cycle the category filter
    ///   Enter           Start the selected session
    ///   Space           Play/pause the countdown
    ///   s               Skip (end the session now)
    ///   b or Esc        Back to the session list
    ///   +/-             Adjust the volume slider
    ///   q               Quit
    ///
    /// # Examples
    ///
    ///   mindful           Launch the timer
    ///   mindful tui       Same thing, spelled out
    Tui,

    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell on stdout.
    /// Redirect it to the location your shell loads completions from, or
    /// pass --install to see per-shell instructions.
    ///
    /// # Examples
    ///
    ///   mindful completions bash > ~/.local/share/bash-completion/completions/mindful
    ///   mindful completions zsh > ~/.zfunc/_mindful
    ///   mindful completions fish --install
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions instead of the script
        #[arg(long, short = 'i')]
        install: bool,
    },
}
