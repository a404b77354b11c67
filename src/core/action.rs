//! # Actions
//!
//! Everything that can happen in Propview becomes an `Action`.
//! User presses Enter in the address bar? That's `Action::Submit(address)`.
//! Backend responds? That's `Action::SearchSucceeded(profile)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::search::SearchFailure;
use crate::core::selection::{DetailSelection, ResultTab};
use crate::core::state::App;
use crate::profile::{FetchError, PropertyProfile, ProfileRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Raw text from the address bar (untrimmed).
    Submit(String),
    SearchSucceeded(Box<PropertyProfile>),
    SearchFailed(SearchFailure),
    SelectTab(ResultTab),
    NextTab,
    PrevTab,
    /// A list item was chosen from the active tab.
    SelectItem(DetailSelection),
    ShowOnMap,
    Back,
    Quit,
}

impl Action {
    /// Maps a fetch outcome onto the matching completion action.
    pub fn from_fetch(result: Result<PropertyProfile, FetchError>) -> Self {
        match result {
            Ok(profile) => Action::SearchSucceeded(Box::new(profile)),
            Err(err) => Action::SearchFailed(SearchFailure::from(&err)),
        }
    }
}

/// Side effects requested by `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start the lookup. Exactly one is in flight at a time.
    SpawnSearch(ProfileRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => {
            let Some(address) = app.search.submit(&text) else {
                return Effect::None;
            };
            app.results.reset();
            app.status_message = format!("Searching: {address}");
            Effect::SpawnSearch(ProfileRequest {
                address,
                radius_km: app.radius_km,
            })
        }
        Action::SearchSucceeded(profile) => {
            if let Some(profile) = app.search.fetch_succeeded(*profile) {
                app.status_message = profile.location.normalized_address.clone();
                app.results.reset();
            }
            Effect::None
        }
        Action::SearchFailed(kind) => {
            if app.search.fetch_failed(kind) {
                app.results.reset();
                app.status_message = kind.message().to_string();
            }
            Effect::None
        }
        Action::SelectTab(tab) => {
            if app.profile().is_some() {
                app.results.select_tab(tab);
            }
            Effect::None
        }
        Action::NextTab => {
            let tab = app.results.active_tab().next();
            update(app, Action::SelectTab(tab))
        }
        Action::PrevTab => {
            let tab = app.results.active_tab().prev();
            update(app, Action::SelectTab(tab))
        }
        Action::SelectItem(item) => {
            // Items only come from the active tab's list.
            if app.profile().is_some() && item.owning_tab() == app.results.active_tab() {
                debug!("Opening detail: {}", item.title());
                app.results.select_item(item);
            }
            Effect::None
        }
        Action::ShowOnMap => {
            app.results.show_on_map();
            Effect::None
        }
        Action::Back => {
            app.results.back();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::SearchState;
    use crate::test_support::{place, sample_profile, school, test_app};

    fn app_with_result() -> App {
        let mut app = test_app();
        update(&mut app, Action::Submit("1 Main St".to_string()));
        update(&mut app, Action::SearchSucceeded(Box::new(sample_profile())));
        app
    }

    #[test]
    fn test_submit_spawns_search_with_trimmed_address() {
        let mut app = test_app();
        app.radius_km = Some(2.5);
        let effect = update(&mut app, Action::Submit("  1 Main St ".to_string()));
        assert_eq!(
            effect,
            Effect::SpawnSearch(ProfileRequest {
                address: "1 Main St".to_string(),
                radius_km: Some(2.5),
            })
        );
        assert!(app.search.is_loading());
    }

    #[test]
    fn test_blank_submit_does_nothing() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit("   ".to_string())), Effect::None);
        assert_eq!(app.search.state(), &SearchState::Empty);
    }

    #[test]
    fn test_resubmit_while_loading_is_rejected() {
        let mut app = test_app();
        update(&mut app, Action::Submit("1 Main St".to_string()));
        assert_eq!(update(&mut app, Action::Submit("2 Main St".to_string())), Effect::None);
    }

    #[test]
    fn test_success_initializes_controller() {
        let app = app_with_result();
        assert!(app.profile().is_some());
        assert_eq!(app.results.active_tab(), ResultTab::Property);
        assert!(app.results.detail().is_none());
        assert!(app.results.focus().is_none());
    }

    #[test]
    fn test_profile_has_a_single_owner() {
        let mut app = app_with_result();
        let held = app.search.profile().unwrap();
        assert!(std::ptr::eq(app.profile().unwrap(), held.as_ref()));
        assert_eq!(std::sync::Arc::strong_count(held), 1);

        update(&mut app, Action::Submit("2 Main St".to_string()));
        assert!(app.profile().is_none());
        assert!(app.search.profile().is_none());
    }

    #[test]
    fn test_new_search_discards_previous_result_state() {
        let mut app = app_with_result();
        update(&mut app, Action::SelectTab(ResultTab::Places));
        update(&mut app, Action::SelectItem(DetailSelection::Place(place("Bean", "cafe"))));
        assert!(app.results.focus().is_some());

        update(&mut app, Action::Submit("2 Main St".to_string()));
        assert!(app.profile().is_none());
        assert!(app.results.focus().is_none());

        update(&mut app, Action::SearchSucceeded(Box::new(sample_profile())));
        assert_eq!(app.results.active_tab(), ResultTab::Property);
        assert!(app.results.detail().is_none());
        assert!(app.results.focus().is_none());
    }

    #[test]
    fn test_http_404_reaches_address_not_found() {
        let mut app = test_app();
        update(&mut app, Action::Submit("nowhere".to_string()));
        let action = Action::from_fetch(Err(FetchError::Api {
            status: 404,
            message: "not found".to_string(),
        }));
        update(&mut app, action);
        assert_eq!(app.search.state(), &SearchState::Error(SearchFailure::AddressNotFound));
    }

    #[test]
    fn test_other_failures_reach_fetch_failed() {
        for err in [
            FetchError::Api { status: 500, message: String::new() },
            FetchError::Api { status: 422, message: String::new() },
            FetchError::Network("refused".to_string()),
            FetchError::Parse("bad json".to_string()),
            FetchError::Timeout,
        ] {
            let mut app = test_app();
            update(&mut app, Action::Submit("1 Main St".to_string()));
            update(&mut app, Action::from_fetch(Err(err)));
            assert_eq!(app.search.state(), &SearchState::Error(SearchFailure::FetchFailed));
            assert!(app.profile().is_none());
        }
    }

    #[test]
    fn test_item_from_another_tab_is_ignored() {
        let mut app = app_with_result();
        update(&mut app, Action::SelectTab(ResultTab::News));
        update(&mut app, Action::SelectItem(DetailSelection::School(school("Elm", Some((1.0, 2.0))))));
        assert!(app.results.detail().is_none());
        assert!(app.results.focus().is_none());
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = app_with_result();
        update(&mut app, Action::NextTab);
        assert_eq!(app.results.active_tab(), ResultTab::Location);
        update(&mut app, Action::PrevTab);
        update(&mut app, Action::PrevTab);
        assert_eq!(app.results.active_tab(), ResultTab::News);
    }

    #[test]
    fn test_tabs_ignored_without_result() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(ResultTab::News));
        assert_eq!(app.results.active_tab(), ResultTab::Property);
    }

    #[test]
    fn test_back_keeps_tab() {
        let mut app = app_with_result();
        update(&mut app, Action::SelectTab(ResultTab::Schools));
        update(&mut app, Action::SelectItem(DetailSelection::School(school("Elm", None))));
        assert!(app.results.detail().is_some());
        update(&mut app, Action::Back);
        assert!(app.results.detail().is_none());
        assert_eq!(app.results.active_tab(), ResultTab::Schools);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
