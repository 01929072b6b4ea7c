use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::interactive::{self, FormCommand};
use crate::cli::{OutputFormat, SearchArgs};
use crate::client::LeadsClient;
use crate::clipboard::{copy_pitch, Clipboard, CopyOutcome, Osc52Clipboard};
use crate::config::{default_config_path, Config};
use crate::form::SearchForm;
use crate::output;
use crate::render::{Renderer, View};
use crate::session::SearchSession;

fn session_for(config: &Config) -> Result<SearchSession> {
  let client = LeadsClient::from_config(config)?;
  Ok(SearchSession::new(Arc::new(client)))
}

/// Fill a form from the command line, starting from the configured defaults
pub fn form_from_args(config: &Config, args: &SearchArgs) -> Result<SearchForm> {
  let mut form = SearchForm::new(&config.form);
  if let Some(country) = &args.country {
    form.country = country.clone();
  }
  if let Some(city) = &args.city {
    form.city = city.clone();
  }
  for keyword in &args.keywords {
    form.keywords.add_many(keyword);
  }
  if let Some(limit) = &args.limit {
    form.set_limit_text(limit)?;
  }
  Ok(form)
}

fn copy_from_results(
  session: &SearchSession,
  position: usize,
  clipboard: &mut dyn Clipboard,
) -> Result<()> {
  let lead = session.lead(position).ok_or_else(|| anyhow!("No lead at position {position}"))?;

  match copy_pitch(&lead, clipboard)? {
    CopyOutcome::Copied => output::success(&format!("Copied the pitch for {}", lead.business_name)),
    CopyOutcome::NoPitch => {
      output::warn(&format!("{} has no sales pitch, nothing copied", lead.business_name))
    }
  }
  Ok(())
}

/// Run one search and print the result
pub async fn search(config: &Config, args: SearchArgs) -> Result<()> {
  let query = form_from_args(config, &args)?.submit()?;
  let renderer = Renderer::from_config(&config.display);
  let mut session = session_for(config)?;

  session.submit(query);
  if args.format == OutputFormat::Pretty {
    eprintln!("{}", renderer.render_view(View::Loading));
  }

  let state = session.wait_settled().await;
  if let Some(error) = &state.error {
    if args.format == OutputFormat::Pretty {
      println!("{}", renderer.render_state(&state));
    }
    return Err(anyhow!(error.clone()));
  }

  match args.format {
    OutputFormat::Pretty => println!("{}", renderer.render_state(&state)),
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state.leads)?),
  }

  if let Some(position) = args.copy {
    copy_from_results(&session, position, &mut Osc52Clipboard::stderr())?;
  }
  Ok(())
}

enum Flow {
  Continue,
  Quit,
}

fn apply(
  command: FormCommand,
  form: &mut SearchForm,
  session: &mut SearchSession,
  renderer: &Renderer,
) -> Result<Flow> {
  match command {
    FormCommand::Country(country) => form.country = country,
    FormCommand::City(city) => form.city = city,
    FormCommand::Add(raw) => {
      if form.keywords.add_many(&raw) == 0 {
        output::warn(&format!("'{raw}' is already in the list"));
      }
    }
    FormCommand::Remove(tag) => {
      if !form.keywords.remove(&tag) {
        output::warn(&format!("'{tag}' is not in the list"));
      }
    }
    FormCommand::Clear => form.keywords.clear(),
    FormCommand::Limit(raw) => match form.set_limit_text(&raw) {
      Ok(limit) => output::info(&format!("limit set to {limit}")),
      Err(e) => output::warn(&e.to_string()),
    },
    FormCommand::Show => println!("{}", interactive::describe(form)),
    FormCommand::Search => match form.submit() {
      Ok(query) => {
        let generation = session.submit(query);
        output::event(&format!("search #{generation} started"));
      }
      Err(e) => output::warn(&format!("Cannot search yet: {e}")),
    },
    FormCommand::Results => println!("{}", renderer.render_state(&session.state())),
    FormCommand::Copy(raw) => match raw.trim().parse::<usize>() {
      Ok(position) => {
        if let Err(e) = copy_from_results(session, position, &mut Osc52Clipboard::stderr()) {
          output::warn(&e.to_string());
        }
      }
      Err(_) => output::warn(&format!("'{raw}' is not a lead number")),
    },
    FormCommand::Help => println!("{}", interactive::HELP),
    FormCommand::Quit => return Ok(Flow::Quit),
    FormCommand::Nothing => {}
  }
  Ok(Flow::Continue)
}

/// Interactive form session reading commands from stdin
pub async fn interactive(config: &Config) -> Result<()> {
  let renderer = Renderer::from_config(&config.display).with_copy_hints(true);
  let mut session = session_for(config)?;
  let mut updates = session.subscribe();
  let mut form = SearchForm::new(&config.form);
  let mut lines = BufReader::new(tokio::io::stdin()).lines();

  output::info("Type 'help' for commands. Bare lines add keywords.");
  println!("{}", interactive::describe(&form));

  let mut quit = false;
  while !quit {
    tokio::select! {
      line = lines.next_line() => match line? {
        Some(line) => {
          let command = interactive::parse(&line);
          quit = matches!(apply(command, &mut form, &mut session, &renderer)?, Flow::Quit);
        }
        None => break,
      },
      changed = updates.changed() => {
        if changed.is_err() {
          break;
        }
        let state = updates.borrow_and_update().clone();
        println!("{}", renderer.render_state(&state));
      }
    }
  }

  // Input ended with a search still running: show how it ends
  if !quit {
    if session.state().is_loading() {
      session.wait_settled().await;
    }
    if updates.has_changed().unwrap_or(false) {
      let state = updates.borrow_and_update().clone();
      println!("{}", renderer.render_state(&state));
    }
  }

  Ok(())
}

/// Print the effective configuration
pub fn show_config(config: &Config, path_only: bool) -> Result<()> {
  if path_only {
    match default_config_path() {
      Some(path) => println!("{}", path.display()),
      None => return Err(anyhow!("No config directory on this platform")),
    }
    return Ok(());
  }

  println!("{}", serde_json::to_string_pretty(config)?);
  Ok(())
}
