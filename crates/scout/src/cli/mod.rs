pub mod commands;
pub mod interactive;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Scout - lead finder
Search businesses without a website and read their tailored sales pitch")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), ", courtesy of Kernelle Software"))]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  /// Configuration file path (defaults to $SCOUT_CONFIG, then the user config dir)
  #[arg(short, long, global = true)]
  pub config: Option<PathBuf>,

  /// Disable colours and hyperlinks
  #[arg(long, global = true)]
  pub plain: bool,

  /// Print request diagnostics to stderr
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
}

/// Search form fields; unset fields fall back to the configured defaults
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
  /// Country to search in
  #[arg(long)]
  pub country: Option<String>,
  /// City to search in
  #[arg(long)]
  pub city: Option<String>,
  /// Category or keyword; repeat the flag or separate with commas
  #[arg(short = 'k', long = "keyword", required = true)]
  pub keywords: Vec<String>,
  /// Maximum number of leads (1-50)
  #[arg(short, long, allow_negative_numbers = true)]
  pub limit: Option<String>,
  /// Output format
  #[arg(short, long, value_enum, default_value = "pretty")]
  pub format: OutputFormat,
  /// Copy the sales pitch of the lead at this position (1-based) to the clipboard
  #[arg(long, value_name = "POSITION")]
  pub copy: Option<usize>,
}

#[derive(Subcommand)]
pub enum Command {
  /// Run one search and print the leads
  Search {
    #[command(flatten)]
    args: SearchArgs,
  },
  /// Fill the search form interactively and run searches in the background
  Interactive,
  /// Show the effective configuration
  Config {
    /// Print only the default config file location
    #[arg(long)]
    path: bool,
  },
}
