//! Text rendering of search state
//!
//! Turns a [`SearchState`] into what the terminal shows: nothing, a progress
//! line, an inline error, a "no results" notice, or one card per lead.

use crate::config::DisplayConfig;
use crate::error::RequestError;
use crate::lead::{Lead, LeadStatus};
use crate::session::SearchState;
use crate::theme::Theme;

const DEFAULT_WIDTH: usize = 80;
const MIN_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 9;
const INDENT: &str = "    ";

/// What the result area should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
  Empty,
  Loading,
  Error(&'a RequestError),
  NoResults,
  Results(&'a [Lead]),
}

impl<'a> View<'a> {
  pub fn of(state: &'a SearchState) -> View<'a> {
    if state.is_loading() {
      View::Loading
    } else if let Some(error) = &state.error {
      View::Error(error)
    } else if !state.leads.is_empty() {
      View::Results(&state.leads)
    } else if state.generation == 0 {
      View::Empty
    } else {
      View::NoResults
    }
  }
}

#[derive(Debug, Clone)]
pub struct Renderer {
  theme: Theme,
  hyperlinks: bool,
  width: usize,
  copy_hints: bool,
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let mut current = String::new();
    for word in paragraph.split_whitespace() {
      if current.is_empty() {
        current = word.to_string();
      } else if current.chars().count() + 1 + word.chars().count() <= width {
        current.push(' ');
        current.push_str(word);
      } else {
        lines.push(std::mem::take(&mut current));
        current = word.to_string();
      }
    }

    if !current.is_empty() {
      lines.push(current);
    }
  }

  lines
}

/// OSC 8 terminal hyperlink
pub fn hyperlink(url: &str) -> String {
  format!("\x1b]8;;{url}\x1b\\{url}\x1b]8;;\x1b\\")
}

fn terminal_width() -> usize {
  let term = console::Term::stdout();
  if term.is_term() {
    let (_, cols) = term.size();
    usize::from(cols).max(MIN_WIDTH)
  } else {
    DEFAULT_WIDTH
  }
}

impl Renderer {
  pub fn new(theme: Theme, hyperlinks: bool, width: usize) -> Self {
    Self { theme, hyperlinks, width: width.max(MIN_WIDTH), copy_hints: false }
  }

  pub fn from_config(display: &DisplayConfig) -> Self {
    let width = display.width.unwrap_or_else(terminal_width);
    Self::new(Theme::by_name(display.theme), display.hyperlinks, width)
  }

  /// Show which `copy` command copies each pitch (interactive mode)
  pub fn with_copy_hints(mut self, enabled: bool) -> Self {
    self.copy_hints = enabled;
    self
  }

  pub fn render_state(&self, state: &SearchState) -> String {
    self.render_view(View::of(state))
  }

  pub fn render_view(&self, view: View<'_>) -> String {
    let t = &self.theme;
    match view {
      View::Empty => String::new(),
      View::Loading => t.strong("Scanning... waiting for the leads service", t.primary),
      View::Error(error) => {
        let message = t.paint(&error.user_message(), t.danger);
        format!("{} {}", t.strong("✗", t.danger), message)
      }
      View::NoResults => t.paint("No results. Adjust the search and scan again.", t.dim),
      View::Results(leads) => {
        let mut out = t.strong(&format!("{} leads found", leads.len()), t.primary);
        for (index, lead) in leads.iter().enumerate() {
          out.push_str("\n\n");
          out.push_str(&self.render_card(index + 1, lead));
        }
        out
      }
    }
  }

  fn status_badge(&self, status: &LeadStatus) -> String {
    let t = &self.theme;
    let color = match status {
      LeadStatus::DirectoryOnly => t.warning,
      _ => t.danger,
    };
    t.paint(&format!("[{}]", status.label()), color)
  }

  fn field(&self, label: &str, value: &str) -> String {
    let t = &self.theme;
    format!("{INDENT}{} {value}", t.paint(&format!("{label:<LABEL_WIDTH$}"), t.dim))
  }

  /// One card; `position` is the 1-based index shown to the user
  pub fn render_card(&self, position: usize, lead: &Lead) -> String {
    let t = &self.theme;
    let mut lines = vec![format!(
      "{} {} {}",
      t.paint(&format!("[{position}]"), t.secondary),
      t.strong(&lead.business_name, t.primary),
      self.status_badge(&lead.status())
    )];

    if let Some(address) = lead.address() {
      lines.push(self.field("address", address));
    }
    if let Some(phone) = lead.phone() {
      lines.push(self.field("phone", phone));
    }
    if let Some(email) = lead.email() {
      lines.push(self.field("email", email));
    }
    if let Some(locality) = lead.locality() {
      lines.push(self.field("locality", &locality));
    }
    if let Some(url) = lead.website() {
      let link = if self.hyperlinks { hyperlink(url) } else { url.to_string() };
      lines.push(self.field("website", &link));
    }
    if let Some(pitch) = lead.sales_pitch() {
      lines.push(self.field("pitch", ""));
      let wrap_at = self.width.saturating_sub(INDENT.len() * 2).max(MIN_WIDTH / 2);
      for line in wrap_text(pitch, wrap_at) {
        lines.push(format!("{INDENT}{INDENT}{line}"));
      }
      if self.copy_hints {
        let hint = format!("(copy {position} to copy the pitch)");
        lines.push(format!("{INDENT}{}", t.paint(&hint, t.dim)));
      }
    }

    lines.join("\n")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::session::Phase;

  fn renderer() -> Renderer {
    Renderer::new(Theme::PLAIN, false, 80)
  }

  fn state(
    phase: Phase,
    leads: Vec<Lead>,
    error: Option<RequestError>,
    generation: u64,
  ) -> SearchState {
    SearchState { phase, leads, error, generation }
  }

  #[test]
  fn test_initial_state_renders_nothing() {
    assert_eq!(renderer().render_state(&SearchState::default()), "");
  }

  #[test]
  fn test_loading_view() {
    let loading = state(Phase::Loading, Vec::new(), None, 1);
    assert_eq!(View::of(&loading), View::Loading);
    assert!(renderer().render_state(&loading).contains("Scanning"));
  }

  #[test]
  fn test_empty_success_shows_no_results() {
    let done = state(Phase::Idle, Vec::new(), None, 1);
    assert_eq!(View::of(&done), View::NoResults);
    let out = renderer().render_state(&done);
    assert!(out.contains("No results"));
    assert!(!out.contains("✗"));
  }

  #[test]
  fn test_error_view() {
    let failed = state(Phase::Idle, Vec::new(), Some(RequestError::InvalidParameters), 2);
    let out = renderer().render_state(&failed);
    assert!(out.starts_with("✗ Invalid parameters"));
  }

  #[test]
  fn test_minimal_card_omits_absent_fields() {
    let mut lead = Lead::new("Acme");
    lead.phone = Some("123".to_string());

    let out = renderer().render_card(1, &lead);
    assert!(out.contains("Acme"));
    assert!(out.contains("123"));
    assert!(!out.contains("address"));
    assert!(!out.contains("website"));
    assert!(!out.contains("pitch"));
    assert!(out.contains("[NO_DATA]"));
  }

  #[test]
  fn test_full_card() {
    let mut lead = Lead::new("Trattoria");
    lead.address = Some("Via Roma 1".to_string());
    lead.detected_url = Some("https://trattoria.example".to_string());
    lead.current_status = Some("Directory Only".to_string());
    lead.sales_pitch = Some("Gentile titolare, ".repeat(10));

    let out = Renderer::new(Theme::PLAIN, true, 60).with_copy_hints(true).render_card(3, &lead);
    assert!(out.starts_with("[3] Trattoria [Directory Only]"));
    assert!(out.contains("Via Roma 1"));
    assert!(out.contains("\x1b]8;;https://trattoria.example\x1b\\"));
    assert!(out.contains("copy 3"));
    assert!(out.lines().all(|line| !line.contains("Gentile") || line.chars().count() <= 60));
  }

  #[test]
  fn test_results_header_counts_leads() {
    let done = state(Phase::Idle, vec![Lead::new("A"), Lead::new("B")], None, 1);
    let out = renderer().render_state(&done);
    assert!(out.starts_with("2 leads found"));
    assert!(out.contains("[1] A"));
    assert!(out.contains("[2] B"));
  }

  #[test]
  fn test_wrap_text() {
    let lines = wrap_text("one two three four five", 9);
    assert_eq!(lines, vec!["one two", "three", "four five"]);
    assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
  }
}
