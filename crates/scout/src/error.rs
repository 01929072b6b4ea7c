//! Error types for the search flow
//!
//! Validation errors are caught before anything leaves the machine. Request
//! errors become part of the search state and are shown inline, never raised
//! out of the session.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  #[error("Country is required")]
  MissingCountry,

  #[error("City is required")]
  MissingCity,

  #[error("At least one category or keyword is required")]
  MissingKeywords,

  #[error("Result limit must be a whole number, got '{input}'")]
  InvalidLimit { input: String },
}

impl ValidationError {
  pub fn invalid_limit(input: impl Into<String>) -> Self {
    Self::InvalidLimit { input: input.into() }
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
  #[error("Invalid parameters (HTTP 422)")]
  InvalidParameters,

  #[error("Server error: HTTP {status}")]
  Server { status: u16 },

  #[error("Network failure: {message}")]
  Network { message: String },

  #[error("Request timed out after {}s", .after.as_secs())]
  Timeout { after: Duration },

  #[error("Malformed response body: {message}")]
  MalformedBody { message: String },

  #[error("Could not build request URL: {message}")]
  InvalidEndpoint { message: String },
}

impl RequestError {
  pub fn network(message: impl Into<String>) -> Self {
    Self::Network { message: message.into() }
  }

  pub fn malformed_body(message: impl Into<String>) -> Self {
    Self::MalformedBody { message: message.into() }
  }

  pub fn invalid_endpoint(message: impl Into<String>) -> Self {
    Self::InvalidEndpoint { message: message.into() }
  }

  /// Map a non-success HTTP status to its error kind.
  pub fn from_status(status: u16) -> Self {
    if status == 422 {
      Self::InvalidParameters
    } else {
      Self::Server { status }
    }
  }

  /// The single line shown to the user in place of results.
  pub fn user_message(&self) -> String {
    match self {
      Self::InvalidParameters => {
        "Invalid parameters. Check the search fields and try again.".to_string()
      }
      Self::Server { status } => format!("Server error: {status}"),
      Self::Network { .. } => "Could not reach the leads service.".to_string(),
      Self::Timeout { after } => {
        format!("The leads service did not answer within {}s.", after.as_secs())
      }
      Self::MalformedBody { .. } => "The leads service sent an unreadable response.".to_string(),
      Self::InvalidEndpoint { .. } => "The configured endpoint is not a valid URL.".to_string(),
    }
  }
}

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to read config file {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse config file {path}: {source}")]
  Parse {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Invalid value for {key}: {value}")]
  InvalidOverride { key: String, value: String },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_422_is_distinct_from_500() {
    let invalid = RequestError::from_status(422);
    let server = RequestError::from_status(500);

    assert_eq!(invalid, RequestError::InvalidParameters);
    assert_eq!(server, RequestError::Server { status: 500 });
    assert_ne!(invalid.user_message(), server.user_message());
    assert!(invalid.user_message().to_lowercase().contains("invalid parameters"));
    assert!(server.user_message().contains("500"));
  }

  #[test]
  fn test_timeout_message_reports_seconds() {
    let err = RequestError::Timeout { after: Duration::from_secs(12) };
    assert!(err.user_message().contains("12s"));
    assert_eq!(err.to_string(), "Request timed out after 12s");
  }

  #[test]
  fn test_invalid_limit_keeps_input() {
    let err = ValidationError::invalid_limit("ten");
    assert_eq!(err.to_string(), "Result limit must be a whole number, got 'ten'");
  }
}
