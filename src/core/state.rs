//! # Application State
//!
//! Core business state for Propview. Domain logic only, no TUI types.
//! Presentation state (cursor positions, input buffer) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── fetcher: Arc<dyn ProfileFetcher>  // address → profile collaborator
//! ├── search: SearchLifecycle           // empty | loading | error | result (owns the profile)
//! ├── results: ResultController         // tabs, drill-down, map focus, buckets
//! ├── radius_km: Option<f64>            // search radius sent with each lookup
//! ├── request_timeout: Duration         // per-lookup timeout
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::controller::ResultController;
use crate::core::search::SearchLifecycle;
use crate::profile::{ProfileFetcher, PropertyProfile, valid_radius};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;

pub struct App {
    pub fetcher: Arc<dyn ProfileFetcher>,
    pub search: SearchLifecycle,
    pub results: ResultController,
    pub radius_km: Option<f64>,
    pub request_timeout: Duration,
    pub status_message: String,
}

impl App {
    pub fn new(fetcher: Arc<dyn ProfileFetcher>) -> Self {
        Self {
            fetcher,
            search: SearchLifecycle::new(),
            results: ResultController::new(),
            radius_km: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            status_message: String::from("Enter an address to begin"),
        }
    }

    pub fn from_config(fetcher: Arc<dyn ProfileFetcher>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(fetcher);
        app.radius_km = valid_radius(config.radius_km);
        app.request_timeout = Duration::from_secs(config.request_timeout_secs);
        app
    }

    /// The profile being browsed, if the last search succeeded.
    pub fn profile(&self) -> Option<&PropertyProfile> {
        self.search.profile().map(Arc::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::SearchState;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.search.state(), &SearchState::Empty);
        assert!(app.profile().is_none());
        assert_eq!(app.radius_km, None);
        assert_eq!(app.fetcher.name(), "noop");
    }

    #[test]
    fn test_from_config_drops_invalid_radius() {
        let mut config = ResolvedConfig::default();
        config.radius_km = Some(25.0);
        config.request_timeout_secs = 5;
        let app = App::from_config(test_app().fetcher, &config);
        assert_eq!(app.radius_km, None);
        assert_eq!(app.request_timeout, Duration::from_secs(5));

        config.radius_km = Some(3.0);
        let app = App::from_config(test_app().fetcher, &config);
        assert_eq!(app.radius_km, Some(3.0));
    }
}
