use anyhow::Result;
use clap::Parser;
use scout::cli::{commands, Cli, Command};
use scout::config::{Config, ThemeName};
use scout::output;

async fn handle(cli: Cli) -> Result<()> {
  let mut config = Config::load(cli.config.as_deref())?;
  if cli.plain {
    config.display.theme = ThemeName::Plain;
    config.display.hyperlinks = false;
  }

  match cli.command {
    Command::Search { args } => commands::search(&config, args).await,
    Command::Interactive => commands::interactive(&config).await,
    Command::Config { path } => commands::show_config(&config, path),
  }
}

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  output::init_tracing(cli.verbose);

  if let Err(e) = handle(cli).await {
    output::error(&format!("{e:#}"));
    std::process::exit(1);
  }
}
