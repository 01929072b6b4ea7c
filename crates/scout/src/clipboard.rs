//! Copying sales pitches out of the terminal

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;

use crate::lead::Lead;

pub trait Clipboard {
  fn copy(&mut self, text: &str) -> Result<()>;
}

/// Sets the system clipboard through the terminal with an OSC 52 sequence.
/// Works over SSH with any terminal that honours OSC 52. Written to stderr so
/// stdout stays clean for piped output such as `--format json`.
pub struct Osc52Clipboard<W: Write> {
  out: W,
}

impl<W: Write> Osc52Clipboard<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn into_inner(self) -> W {
    self.out
  }
}

impl Osc52Clipboard<std::io::Stderr> {
  pub fn stderr() -> Self {
    Self::new(std::io::stderr())
  }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
  fn copy(&mut self, text: &str) -> Result<()> {
    write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
    self.out.flush()?;
    Ok(())
  }
}

/// Keeps copies in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
  pub copies: Vec<String>,
}

impl MemoryClipboard {
  pub fn last(&self) -> Option<&str> {
    self.copies.last().map(String::as_str)
  }
}

impl Clipboard for MemoryClipboard {
  fn copy(&mut self, text: &str) -> Result<()> {
    self.copies.push(text.to_string());
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
  Copied,
  NoPitch,
}

/// Copy exactly the lead's pitch. Without a pitch the clipboard is untouched.
pub fn copy_pitch(lead: &Lead, clipboard: &mut dyn Clipboard) -> Result<CopyOutcome> {
  match lead.sales_pitch() {
    Some(pitch) => {
      clipboard.copy(pitch)?;
      Ok(CopyOutcome::Copied)
    }
    None => Ok(CopyOutcome::NoPitch),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_copies_exact_pitch() {
    let mut lead = Lead::new("Acme");
    lead.sales_pitch = Some("Dear Acme,\nlet's talk.".to_string());
    let mut clipboard = MemoryClipboard::default();

    assert_eq!(copy_pitch(&lead, &mut clipboard).unwrap(), CopyOutcome::Copied);
    assert_eq!(clipboard.last(), Some("Dear Acme,\nlet's talk."));
  }

  #[test]
  fn test_missing_pitch_is_noop() {
    let mut clipboard = MemoryClipboard::default();
    let mut lead = Lead::new("Acme");
    assert_eq!(copy_pitch(&lead, &mut clipboard).unwrap(), CopyOutcome::NoPitch);

    lead.sales_pitch = Some(String::new());
    assert_eq!(copy_pitch(&lead, &mut clipboard).unwrap(), CopyOutcome::NoPitch);
    assert!(clipboard.copies.is_empty());
  }

  #[test]
  fn test_osc52_sequence() {
    let mut clipboard = Osc52Clipboard::new(Vec::new());
    clipboard.copy("hi").unwrap();
    let written = String::from_utf8(clipboard.into_inner()).unwrap();
    assert_eq!(written, "\x1b]52;c;aGk=\x07");
  }
}
