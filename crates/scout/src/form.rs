//! Search form model
//!
//! Holds what the user has typed so far and turns it into a [`SearchQuery`]
//! on submit. No I/O happens here.

use crate::config::{FormDefaults, KeywordDedup};
use crate::error::ValidationError;

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 50;

fn same_tag(dedup: KeywordDedup, a: &str, b: &str) -> bool {
  match dedup {
    KeywordDedup::CaseSensitive => a == b,
    KeywordDedup::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
  }
}

/// Ordered set of category/keyword tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
  tags: Vec<String>,
  dedup: KeywordDedup,
}

impl KeywordSet {
  pub fn new(dedup: KeywordDedup) -> Self {
    Self { tags: Vec::new(), dedup }
  }

  /// Add one tag. Returns false for blank input or a duplicate.
  pub fn add(&mut self, raw: &str) -> bool {
    let tag = raw.trim();
    if tag.is_empty() || self.contains(tag) {
      return false;
    }
    self.tags.push(tag.to_string());
    true
  }

  /// Add every comma-separated tag in `raw`, returning how many were new
  pub fn add_many(&mut self, raw: &str) -> usize {
    raw.split(',').filter(|tag| self.add(tag)).count()
  }

  pub fn remove(&mut self, raw: &str) -> bool {
    let tag = raw.trim();
    let before = self.tags.len();
    let dedup = self.dedup;
    self.tags.retain(|existing| !same_tag(dedup, existing, tag));
    self.tags.len() != before
  }

  pub fn contains(&self, tag: &str) -> bool {
    self.tags.iter().any(|existing| same_tag(self.dedup, existing, tag.trim()))
  }

  pub fn clear(&mut self) {
    self.tags.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.tags.is_empty()
  }

  pub fn len(&self) -> usize {
    self.tags.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.tags.iter().map(String::as_str)
  }
}

/// Validated parameters for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
  pub country: String,
  pub city: String,
  pub keywords: Vec<String>,
  pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
  pub country: String,
  pub city: String,
  pub keywords: KeywordSet,
  limit: u32,
}

pub fn clamp_limit(limit: u32) -> u32 {
  limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

impl SearchForm {
  pub fn new(defaults: &FormDefaults) -> Self {
    Self {
      country: defaults.country.clone(),
      city: defaults.city.clone(),
      keywords: KeywordSet::new(defaults.dedup),
      limit: clamp_limit(defaults.limit),
    }
  }

  pub fn limit(&self) -> u32 {
    self.limit
  }

  /// Set the result limit, clamped to [1, 50]. Returns the stored value.
  pub fn set_limit(&mut self, limit: u32) -> u32 {
    self.limit = clamp_limit(limit);
    self.limit
  }

  /// Parse and set the limit from user text. Negative numbers clamp to 1.
  pub fn set_limit_text(&mut self, raw: &str) -> Result<u32, ValidationError> {
    let parsed: i64 = raw.trim().parse().map_err(|_| ValidationError::invalid_limit(raw.trim()))?;
    let bounded = parsed.clamp(MIN_LIMIT as i64, MAX_LIMIT as i64) as u32;
    Ok(self.set_limit(bounded))
  }

  /// First reason the form cannot be submitted, if any
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.country.trim().is_empty() {
      return Err(ValidationError::MissingCountry);
    }
    if self.city.trim().is_empty() {
      return Err(ValidationError::MissingCity);
    }
    if self.keywords.is_empty() {
      return Err(ValidationError::MissingKeywords);
    }
    Ok(())
  }

  pub fn can_submit(&self) -> bool {
    self.validate().is_ok()
  }

  pub fn submit(&self) -> Result<SearchQuery, ValidationError> {
    self.validate()?;
    Ok(SearchQuery {
      country: self.country.trim().to_string(),
      city: self.city.trim().to_string(),
      keywords: self.keywords.iter().map(String::from).collect(),
      limit: self.limit,
    })
  }
}
