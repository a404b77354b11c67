//! # Selection Model
//!
//! Which result tab is active and which list item, if any, is drilled into.
//!
//! `select_tab` always clears the drill-down, so a detail picked under one tab
//! can never show up under another.

use crate::profile::{GeoPoint, NearbyPlace, NewsItem, School};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Property,
    Location,
    Schools,
    Places,
    News,
}

impl ResultTab {
    pub const ALL: [ResultTab; 5] = [
        ResultTab::Property,
        ResultTab::Location,
        ResultTab::Schools,
        ResultTab::Places,
        ResultTab::News,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Property => "Property",
            ResultTab::Location => "Location",
            ResultTab::Schools => "Schools",
            ResultTab::Places => "Nearby places",
            ResultTab::News => "News",
        }
    }

    pub fn index(self) -> usize {
        ResultTab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> ResultTab {
        ResultTab::ALL[(self.index() + 1) % ResultTab::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> ResultTab {
        let len = ResultTab::ALL.len();
        ResultTab::ALL[(self.index() + len - 1) % len]
    }

    /// True for tabs that show a list the user can drill into.
    pub fn is_list(self) -> bool {
        matches!(self, ResultTab::Schools | ResultTab::Places | ResultTab::News)
    }
}

/// The single item the user has drilled into.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailSelection {
    School(School),
    Place(NearbyPlace),
    News(NewsItem),
}

impl DetailSelection {
    /// The only tab under which this detail may be shown.
    pub fn owning_tab(&self) -> ResultTab {
        match self {
            DetailSelection::School(_) => ResultTab::Schools,
            DetailSelection::Place(_) => ResultTab::Places,
            DetailSelection::News(_) => ResultTab::News,
        }
    }

    /// Where "show on map" would go. News has no location; schools may lack one.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match self {
            DetailSelection::School(school) => school.coordinates(),
            DetailSelection::Place(place) => Some(place.point()),
            DetailSelection::News(_) => None,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DetailSelection::School(school) => &school.name,
            DetailSelection::Place(place) => &place.name,
            DetailSelection::News(news) => &news.title,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionModel {
    active_tab: ResultTab,
    detail: Option<DetailSelection>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ResultTab {
        self.active_tab
    }

    /// Raw drill-down value, regardless of the active tab.
    pub fn detail(&self) -> Option<&DetailSelection> {
        self.detail.as_ref()
    }

    /// The drill-down to render: present only when it belongs to the active tab.
    pub fn visible_detail(&self) -> Option<&DetailSelection> {
        self.detail
            .as_ref()
            .filter(|detail| detail.owning_tab() == self.active_tab)
    }

    pub fn select_tab(&mut self, tab: ResultTab) {
        self.active_tab = tab;
        self.detail = None;
    }

    pub fn select_detail(&mut self, item: DetailSelection) {
        self.detail = Some(item);
    }

    pub fn back_from_detail(&mut self) {
        self.detail = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
