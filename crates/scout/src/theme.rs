//! Terminal colour palettes
//!
//! A theme is plain data handed to the renderer.

use colored::*;

use crate::config::ThemeName;

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
  pub primary: Rgb,
  pub secondary: Rgb,
  pub warning: Rgb,
  pub danger: Rgb,
  pub dim: Rgb,
  pub colored: bool,
}

impl Theme {
  /// Neon palette of the web client
  pub const CYBER: Theme = Theme {
    primary: (0x00, 0xf2, 0xff),
    secondary: (0x70, 0x00, 0xff),
    warning: (0xf2, 0xff, 0x00),
    danger: (0xff, 0x00, 0x55),
    dim: (0x80, 0x80, 0x80),
    colored: true,
  };

  pub const PLAIN: Theme = Theme {
    primary: (0xff, 0xff, 0xff),
    secondary: (0xff, 0xff, 0xff),
    warning: (0xff, 0xff, 0xff),
    danger: (0xff, 0xff, 0xff),
    dim: (0xff, 0xff, 0xff),
    colored: false,
  };

  pub fn by_name(name: ThemeName) -> Theme {
    match name {
      ThemeName::Cyber => Theme::CYBER,
      ThemeName::Plain => Theme::PLAIN,
    }
  }

  pub fn paint(&self, text: &str, color: Rgb) -> String {
    if self.colored {
      text.truecolor(color.0, color.1, color.2).to_string()
    } else {
      text.to_string()
    }
  }

  pub fn strong(&self, text: &str, color: Rgb) -> String {
    if self.colored {
      text.truecolor(color.0, color.1, color.2).bold().to_string()
    } else {
      text.to_string()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plain_theme_leaves_text_alone() {
    let theme = Theme::by_name(ThemeName::Plain);
    assert_eq!(theme.paint("Acme", theme.primary), "Acme");
    assert_eq!(theme.strong("Acme", theme.danger), "Acme");
  }

  #[test]
  fn test_cyber_theme_keeps_text() {
    let theme = Theme::by_name(ThemeName::Cyber);
    assert!(theme.paint("Acme", theme.primary).contains("Acme"));
  }
}
