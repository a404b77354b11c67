//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::profile::{
    FetchError, GeoPoint, Location, MapSchool, MapSummary, NearbyPlace, NewsItem, ProfileFetcher,
    ProfileRequest, PropertyProfile, School,
};

/// A fetcher that always fails. For tests that never await a lookup.
pub struct NoopFetcher;

#[async_trait]
impl ProfileFetcher for NoopFetcher {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_profile(&self, _request: &ProfileRequest) -> Result<PropertyProfile, FetchError> {
        Err(FetchError::Network("noop fetcher".to_string()))
    }
}

/// Creates a test App with a NoopFetcher.
pub fn test_app() -> App {
    App::new(Arc::new(NoopFetcher))
}

pub fn place(name: &str, category: &str) -> NearbyPlace {
    NearbyPlace {
        name: name.to_string(),
        lat: 39.78,
        lon: -89.65,
        category: category.to_string(),
        address: None,
    }
}

pub fn school(name: &str, coords: Option<(f64, f64)>) -> School {
    School {
        name: name.to_string(),
        nces_id: None,
        street: Some("1 School Rd".to_string()),
        city: Some("Springfield".to_string()),
        state: Some("IL".to_string()),
        zip: Some("62701".to_string()),
        lat: coords.map(|c| c.0),
        lon: coords.map(|c| c.1),
    }
}

pub fn news(title: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        url: format!("https://news.example/{}", title.replace(' ', "-")),
        source: Some("Springfield Daily".to_string()),
        published_date: Some("2025-03-14T09:30:00Z".to_string()),
    }
}

/// A profile whose only variable part is the place list.
pub fn profile_with(nearby_places: Vec<NearbyPlace>) -> PropertyProfile {
    let center = GeoPoint::new(39.7817, -89.6501);
    PropertyProfile {
        location: Location {
            normalized_address: "1 MAIN ST, SPRINGFIELD, IL, 62701".to_string(),
            lat: center.lat,
            lon: center.lon,
            census_geography: None,
        },
        map: MapSummary {
            center,
            schools: vec![MapSchool {
                name: "Elm Elementary".to_string(),
                lat: 39.785,
                lon: -89.645,
                street: Some("1 School Rd".to_string()),
                city: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                zip: None,
            }],
        },
        schools: vec![
            school("Elm Elementary", Some((39.785, -89.645))),
            school("Unmapped Middle", None),
        ],
        property: None,
        property_message: Some("No property data for this address.".to_string()),
        images: None,
        nearby_places,
        radius_km: Some(2.0),
        local_news: Some(vec![news("Council approves budget")]),
    }
}

pub fn sample_profile() -> PropertyProfile {
    profile_with(vec![
        place("Bean", "cafe"),
        place("Iron Works", "gym"),
        place("Luigi's", "restaurant"),
    ])
}
