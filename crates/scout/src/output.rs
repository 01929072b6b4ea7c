//! Status output on stderr and tracing setup
//!
//! Short coloured status lines for the user (`[info]`, `[warn]`, ...) live
//! here next to the `tracing` subscriber used for diagnostics.

use chrono::Local;
use colored::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SCOUT_LOG";

/// Install the tracing subscriber. Honours `SCOUT_LOG` (e.g. `scout=debug`).
pub fn init_tracing(verbose: bool) {
  let fallback = if verbose { "scout=debug" } else { "warn" };
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

  // A second init (tests) is harmless
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]{:<width$}", prefix.color(color).bold(), "", width = 7 - prefix.len() - 2)
}

/// One prefixed line per line of the message
fn format_lines(prefix: &str, message: &str) -> Vec<String> {
  message.lines().map(|line| format!("{prefix} {line}")).collect()
}

fn log(prefix: &str, message: &str) {
  for line in format_lines(prefix, message) {
    eprintln!("{line}");
  }
}

pub fn info(message: &str) {
  log(&format_prefix(Color::Blue, "info"), message);
}

pub fn warn(message: &str) {
  log(&format_prefix(Color::Yellow, "warn"), message);
}

pub fn error(message: &str) {
  log(&format_prefix(Color::Red, "error"), message);
}

pub fn success(message: &str) {
  log(&format_prefix(Color::Green, "sccs"), message);
}

/// Timestamped event line, used for search state transitions
pub fn event(message: &str) {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  let prefix = format!("[{}] [{}]", "event".blue().bold(), timestamp.cyan());
  log(&prefix, message);
}
