//! # Search Lifecycle
//!
//! Owns the four-state view and the current profile or failure.
//!
//! ```text
//!  Empty ─┐
//!  Error ─┼── submit(address) ──▶ Loading ──┬── fetch_succeeded ──▶ Result(profile)
//! Result ─┘   (blank = no-op)               └── fetch_failed ─────▶ Error(kind)
//! ```
//!
//! `Loading` rejects `submit`: at most one lookup is ever in flight, and there is
//! no cancellation. Retrying is just another `submit`.

use std::fmt;
use std::sync::Arc;

use log::{info, warn};

use crate::profile::{FetchError, PropertyProfile};

/// Why a search ended without a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// Backend could not geocode the address (HTTP 404). User-correctable.
    AddressNotFound,
    /// Any other failure: network, non-404 status, malformed body, timeout.
    FetchFailed,
}

impl SearchFailure {
    pub fn message(self) -> &'static str {
        match self {
            SearchFailure::AddressNotFound => "We couldn't find that address. Try another.",
            SearchFailure::FetchFailed => "Something went wrong. Please try again.",
        }
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchFailure::AddressNotFound => write!(f, "ADDRESS_NOT_FOUND"),
            SearchFailure::FetchFailed => write!(f, "FETCH_FAILED"),
        }
    }
}

impl From<&FetchError> for SearchFailure {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Api { status: 404, .. } => SearchFailure::AddressNotFound,
            _ => SearchFailure::FetchFailed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Empty,
    Loading,
    Error(SearchFailure),
    Result(Arc<PropertyProfile>),
}

#[derive(Debug, Default)]
pub struct SearchLifecycle {
    state: SearchState,
}

impl SearchLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// True while a lookup is outstanding. The submission surface is disabled.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    pub fn profile(&self) -> Option<&Arc<PropertyProfile>> {
        match &self.state {
            SearchState::Result(profile) => Some(profile),
            _ => None,
        }
    }

    /// Starts a search. Returns the trimmed address when the transition to
    /// `Loading` happened; `None` for a blank address or while already loading.
    /// Any previous profile is discarded immediately.
    pub fn submit(&mut self, address: &str) -> Option<String> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        if self.is_loading() {
            warn!("Ignoring submit while a lookup is in flight");
            return None;
        }
        info!("Search submitted: {address:?}");
        self.state = SearchState::Loading;
        Some(address.to_string())
    }

    /// Completes the in-flight lookup. Returns the profile now held, or `None`
    /// if nothing was in flight.
    pub fn fetch_succeeded(&mut self, profile: PropertyProfile) -> Option<Arc<PropertyProfile>> {
        if !self.is_loading() {
            warn!("Discarding profile that arrived while not loading");
            return None;
        }
        info!(
            "Search succeeded: {} (schools={}, places={}, news={})",
            profile.location.normalized_address,
            profile.schools.len(),
            profile.nearby_places.len(),
            profile.news().len()
        );
        let profile = Arc::new(profile);
        self.state = SearchState::Result(Arc::clone(&profile));
        Some(profile)
    }

    /// Fails the in-flight lookup. Returns false if nothing was in flight.
    pub fn fetch_failed(&mut self, kind: SearchFailure) -> bool {
        if !self.is_loading() {
            warn!("Discarding failure {kind} that arrived while not loading");
            return false;
        }
        info!("Search failed: {kind}");
        self.state = SearchState::Error(kind);
        true
    }
}
