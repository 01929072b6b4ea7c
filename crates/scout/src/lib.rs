//! Scout - terminal client for the leads search service
//!
//! Collects search parameters, asks the remote service for businesses
//! without a proper website, and renders the returned leads with their
//! generated sales pitch.

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod form;
pub mod lead;
pub mod output;
pub mod render;
pub mod session;
pub mod theme;

pub use client::{LeadSource, LeadsClient};
pub use error::{RequestError, ValidationError};
pub use form::{SearchForm, SearchQuery};
pub use lead::{Lead, LeadStatus};
pub use session::{Phase, SearchSession, SearchState};
