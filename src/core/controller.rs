//! # Result Interaction Controller
//!
//! Keeps the tab browser, the detail panel and the map in step for one profile.
//!
//! ```text
//! reset ──────▶ selection.reset() + focus.reset() + drop bucket cache
//! select_tab ─▶ selection.select_tab()
//! select_item ▶ selection.select_detail() + focus.focus() if the item has coordinates
//! back ───────▶ selection.back_from_detail()           (map left where it is)
//! ```
//!
//! The profile itself lives in `SearchLifecycle`; read-side methods borrow it
//! from there. Buckets are computed on first use after a reset and cached
//! until the next one, so tab switches never re-categorize.

use std::cell::OnceCell;

use crate::core::categorize::{CategoryBucket, categorize, places_in_display_order};
use crate::core::map_focus::{FocusCommand, MapCamera, MapFocus};
use crate::core::selection::{DetailSelection, ResultTab, SelectionModel};
use crate::profile::{GeoPoint, MapSchool, NearbyPlace, PropertyProfile};

/// Upper bound on place markers handed to the map.
pub const MAX_PLACE_MARKERS: usize = 25;

/// Everything the map renderer consumes.
#[derive(Debug, Clone, Copy)]
pub struct MapScene<'a> {
    pub center: GeoPoint,
    pub schools: &'a [MapSchool],
    pub places: &'a [NearbyPlace],
    pub focus: Option<FocusCommand>,
}

impl MapScene<'_> {
    pub fn camera(&self) -> MapCamera {
        MapCamera::resolve(self.center, self.focus)
    }
}

/// View state layered over the current profile.
///
/// Call `reset` whenever the search lifecycle's profile changes. The bucket
/// cache belongs to whichever profile is passed in first after a reset.
#[derive(Debug, Default)]
pub struct ResultController {
    selection: SelectionModel,
    focus: MapFocus,
    buckets: OnceCell<Vec<CategoryBucket>>,
}

impl ResultController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile replaced or gone: every piece of dependent state goes back to its default.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.focus.reset();
        self.buckets = OnceCell::new();
    }

    pub fn active_tab(&self) -> ResultTab {
        self.selection.active_tab()
    }

    /// Detail to render, already filtered to the active tab.
    pub fn detail(&self) -> Option<&DetailSelection> {
        self.selection.visible_detail()
    }

    pub fn focus(&self) -> Option<FocusCommand> {
        self.focus.current()
    }

    pub fn select_tab(&mut self, tab: ResultTab) {
        self.selection.select_tab(tab);
    }

    /// A list item was chosen. Geolocated items also move the map.
    pub fn select_item(&mut self, item: DetailSelection) -> Option<FocusCommand> {
        let target = item.coordinates();
        self.selection.select_detail(item);
        target.map(|point| self.focus.focus(point))
    }

    /// "Show on map" from the open detail panel.
    pub fn show_on_map(&mut self) -> Option<FocusCommand> {
        let point = self.detail()?.coordinates()?;
        Some(self.focus.focus(point))
    }

    pub fn back(&mut self) {
        self.selection.back_from_detail();
    }

    /// Categorized nearby places for `profile`.
    pub fn buckets(&self, profile: &PropertyProfile) -> &[CategoryBucket] {
        self.buckets
            .get_or_init(|| categorize(&profile.nearby_places))
            .as_slice()
    }

    /// Number of selectable rows under `tab`. Zero for single-record tabs.
    pub fn list_len(&self, profile: &PropertyProfile, tab: ResultTab) -> usize {
        match tab {
            ResultTab::Schools => profile.schools.len(),
            ResultTab::Places => profile.nearby_places.len(),
            ResultTab::News => profile.news().len(),
            ResultTab::Property | ResultTab::Location => 0,
        }
    }

    /// The item at `index` in `tab`'s list, in display order.
    pub fn item_at(
        &self,
        profile: &PropertyProfile,
        tab: ResultTab,
        index: usize,
    ) -> Option<DetailSelection> {
        match tab {
            ResultTab::Schools => profile.schools.get(index).cloned().map(DetailSelection::School),
            ResultTab::Places => places_in_display_order(self.buckets(profile))
                .nth(index)
                .cloned()
                .map(DetailSelection::Place),
            ResultTab::News => profile.news().get(index).cloned().map(DetailSelection::News),
            ResultTab::Property | ResultTab::Location => None,
        }
    }

    pub fn map_scene<'a>(&self, profile: &'a PropertyProfile) -> MapScene<'a> {
        let places = &profile.nearby_places;
        MapScene {
            center: profile.map.center,
            schools: &profile.map.schools,
            places: &places[..places.len().min(MAX_PLACE_MARKERS)],
            focus: self.focus.current(),
        }
    }
}
