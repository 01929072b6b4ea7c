//! Search session: owns the search state and runs one request at a time
//!
//! Each submission gets a generation number. Submitting aborts the previous
//! request task, and a task may only publish its outcome while its
//! generation is still current. A superseded response can therefore never
//! overwrite the state of a newer search.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::client::LeadSource;
use crate::error::RequestError;
use crate::form::SearchQuery;
use crate::lead::Lead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Idle,
  Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
  pub phase: Phase,
  pub leads: Vec<Lead>,
  pub error: Option<RequestError>,
  /// Number of searches submitted so far; 0 means nothing has been searched
  pub generation: u64,
}

impl Default for SearchState {
  fn default() -> Self {
    Self { phase: Phase::Idle, leads: Vec::new(), error: None, generation: 0 }
  }
}

impl SearchState {
  fn loading(generation: u64) -> Self {
    Self { phase: Phase::Loading, leads: Vec::new(), error: None, generation }
  }

  fn settled(generation: u64, outcome: Result<Vec<Lead>, RequestError>) -> Self {
    match outcome {
      Ok(leads) => Self { phase: Phase::Idle, leads, error: None, generation },
      Err(error) => Self { phase: Phase::Idle, leads: Vec::new(), error: Some(error), generation },
    }
  }

  /// Settle this state with the outcome of search `generation`.
  ///
  /// Returns false, leaving the state untouched, when a newer search has
  /// been submitted since.
  pub fn apply_outcome(
    &mut self,
    generation: u64,
    outcome: Result<Vec<Lead>, RequestError>,
  ) -> bool {
    if self.generation != generation {
      tracing::debug!(generation, current = self.generation, "discarding stale result");
      return false;
    }
    *self = SearchState::settled(generation, outcome);
    true
  }

  pub fn is_loading(&self) -> bool {
    self.phase == Phase::Loading
  }

  /// Errors and results are never shown together, and nothing is shown mid-flight
  pub fn is_consistent(&self) -> bool {
    let exclusive = self.error.is_none() || self.leads.is_empty();
    let quiet_while_loading = !self.is_loading() || (self.error.is_none() && self.leads.is_empty());
    exclusive && quiet_while_loading
  }
}

/// Aborts the request task when the task awaiting it is aborted
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
  fn drop(&mut self) {
    self.0.abort();
  }
}

pub struct SearchSession {
  source: Arc<dyn LeadSource>,
  state: Arc<watch::Sender<SearchState>>,
  in_flight: Option<JoinHandle<()>>,
}

impl SearchSession {
  pub fn new(source: Arc<dyn LeadSource>) -> Self {
    let (state, _) = watch::channel(SearchState::default());
    Self { source, state: Arc::new(state), in_flight: None }
  }

  pub fn subscribe(&self) -> watch::Receiver<SearchState> {
    self.state.subscribe()
  }

  pub fn state(&self) -> SearchState {
    self.state.borrow().clone()
  }

  /// Start a search, superseding any search still in flight.
  ///
  /// The state is `Loading` with no leads and no error by the time this
  /// returns. Returns the generation assigned to this search.
  pub fn submit(&mut self, query: SearchQuery) -> u64 {
    if let Some(previous) = self.in_flight.take() {
      if !previous.is_finished() {
        tracing::debug!("aborting superseded search");
      }
      previous.abort();
    }

    let generation = self.state.borrow().generation + 1;
    self.state.send_replace(SearchState::loading(generation));
    tracing::debug!(generation, city = %query.city, keywords = ?query.keywords, "search submitted");

    let source = Arc::clone(&self.source);
    let state = Arc::clone(&self.state);
    self.in_flight = Some(tokio::spawn(async move {
      // The request runs in its own task so a panicking source still settles the state
      let request = tokio::spawn(async move { source.search(&query).await });
      let _guard = AbortOnDrop(request.abort_handle());

      let outcome = match request.await {
        Ok(outcome) => outcome,
        Err(e) => Err(RequestError::network(format!("search task failed: {e}"))),
      };
      if let Err(error) = &outcome {
        tracing::warn!(generation, %error, "search failed");
      }

      state.send_if_modified(|current| current.apply_outcome(generation, outcome));
    }));

    generation
  }

  /// Wait until the latest search has settled and return the final state
  pub async fn wait_settled(&self) -> SearchState {
    let mut rx = self.subscribe();
    let settled = rx.wait_for(|state| !state.is_loading()).await.map(|state| state.clone());
    settled.unwrap_or_else(|_| self.state())
  }

  /// Lead at a 1-based position in the current results
  pub fn lead(&self, position: usize) -> Option<Lead> {
    position.checked_sub(1).and_then(|index| self.state.borrow().leads.get(index).cloned())
  }
}

impl Drop for SearchSession {
  fn drop(&mut self) {
    if let Some(handle) = self.in_flight.take() {
      handle.abort();
    }
  }
}
