use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Geocoded location of the searched address.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub normalized_address: String,
    pub lat: f64,
    pub lon: f64,
    /// Area type name (e.g. "Counties") → list of area records.
    /// Kept loosely typed: the geography payload is arbitrarily nested.
    #[serde(default)]
    pub census_geography: Option<BTreeMap<String, serde_json::Value>>,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Display names of the area records under `area_type`, in payload order.
    /// Records without a `NAME` are skipped.
    pub fn area_names(&self, area_type: &str) -> Vec<&str> {
        self.census_geography
            .as_ref()
            .and_then(|g| g.get(area_type))
            .and_then(|v| v.as_array())
            .map(|records| {
                records
                    .iter()
                    .filter_map(|r| r.get("NAME").and_then(|n| n.as_str()))
                    .filter(|n| !n.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// "County, Tract" summary line, or `None` when neither is known.
    pub fn area_line(&self) -> Option<String> {
        let parts: Vec<&str> = ["Counties", "Census Tracts"]
            .iter()
            .filter_map(|area| self.area_names(area).first().copied())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// School pin for the map. Always has coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapSchool {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

impl MapSchool {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapSummary {
    pub center: GeoPoint,
    #[serde(default)]
    pub schools: Vec<MapSchool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct School {
    pub name: String,
    #[serde(default)]
    pub nces_id: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl School {
    /// Coordinates, only when both halves are present.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }

    pub fn formatted_address(&self) -> String {
        format_street_address(
            self.street.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip.as_deref(),
        )
    }
}

/// `street city, state zip` with empty parts dropped.
pub fn format_street_address(
    street: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zip: Option<&str>,
) -> String {
    let city_state = [city, state]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    [street, Some(city_state.as_str()), zip]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NearbyPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Free-form category key (e.g. "cafe", "fast_food").
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl NearbyPlace {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropertyImage {
    #[serde(default)]
    pub url: String,
    /// True for a stock image standing in for a real photo.
    #[serde(default)]
    pub placeholder: bool,
}

/// Open-ended property attribute map as returned by the backend.
pub type PropertyRecord = serde_json::Map<String, serde_json::Value>;

/// Aggregate result of one address lookup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropertyProfile {
    pub location: Location,
    pub map: MapSummary,
    #[serde(default)]
    pub schools: Vec<School>,
    #[serde(default)]
    pub property: Option<PropertyRecord>,
    #[serde(default)]
    pub property_message: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<PropertyImage>>,
    #[serde(default)]
    pub nearby_places: Vec<NearbyPlace>,
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub local_news: Option<Vec<NewsItem>>,
}

impl PropertyProfile {
    pub fn news(&self) -> &[NewsItem] {
        self.local_news.as_deref().unwrap_or_default()
    }

    /// First image with a usable URL.
    pub fn first_image(&self) -> Option<&PropertyImage> {
        self.images
            .as_deref()
            .and_then(|images| images.iter().find(|img| !img.url.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserializes_minimal_payload() {
        let payload = json!({
            "location": {"normalized_address": "1 MAIN ST", "lat": 40.0, "lon": -75.0},
            "map": {"center": {"lat": 40.0, "lon": -75.0}, "schools": []},
            "schools": [],
            "property": null,
            "property_message": "No property data for this address."
        });
        let profile: PropertyProfile = serde_json::from_value(payload).unwrap();
        assert!(profile.property.is_none());
        assert!(profile.nearby_places.is_empty());
        assert!(profile.news().is_empty());
        assert_eq!(profile.radius_km, None);
    }

    #[test]
    fn test_profile_ignores_unknown_fields() {
        let payload = json!({
            "location": {"normalized_address": "X", "lat": 1.0, "lon": 2.0},
            "map": {"center": {"lat": 1.0, "lon": 2.0}},
            "listings": {"anything": true},
            "nearby_places": [{"name": "Bean", "lat": 1.0, "lon": 2.0, "category": "cafe"}]
        });
        let profile: PropertyProfile = serde_json::from_value(payload).unwrap();
        assert_eq!(profile.nearby_places.len(), 1);
        assert_eq!(profile.nearby_places[0].address, None);
    }

    #[test]
    fn test_school_coordinates_require_both_halves() {
        let mut school = School {
            name: "Elm".to_string(),
            nces_id: None,
            street: None,
            city: None,
            state: None,
            zip: None,
            lat: Some(1.0),
            lon: None,
        };
        assert_eq!(school.coordinates(), None);
        school.lon = Some(2.0);
        assert_eq!(school.coordinates(), Some(GeoPoint::new(1.0, 2.0)));
    }

    #[test]
    fn test_format_street_address_drops_empty_parts() {
        assert_eq!(
            format_street_address(Some("1 Elm St"), Some("Springfield"), Some("IL"), Some("62701")),
            "1 Elm St Springfield, IL 62701"
        );
        assert_eq!(format_street_address(None, Some("Springfield"), None, None), "Springfield");
        assert_eq!(format_street_address(None, None, Some("IL"), Some("62701")), "IL 62701");
        assert_eq!(format_street_address(Some(""), None, None, None), "");
    }

    #[test]
    fn test_location_area_line() {
        let location: Location = serde_json::from_value(json!({
            "normalized_address": "X",
            "lat": 0.0,
            "lon": 0.0,
            "census_geography": {
                "Counties": [{"NAME": "Cook County"}, {"NAME": "Other"}],
                "Census Tracts": [{"NAME": "Census Tract 101"}],
                "States": "not a list"
            }
        }))
        .unwrap();
        assert_eq!(location.area_line().as_deref(), Some("Cook County, Census Tract 101"));
        assert!(location.area_names("States").is_empty());
    }

    #[test]
    fn test_location_area_line_absent() {
        let location = Location {
            normalized_address: "X".to_string(),
            lat: 0.0,
            lon: 0.0,
            census_geography: None,
        };
        assert_eq!(location.area_line(), None);
    }

    #[test]
    fn test_first_image_skips_empty_urls() {
        let payload = json!({
            "location": {"normalized_address": "X", "lat": 1.0, "lon": 2.0},
            "map": {"center": {"lat": 1.0, "lon": 2.0}},
            "images": [{"url": ""}, {"url": "https://img/1.jpg", "placeholder": true}]
        });
        let profile: PropertyProfile = serde_json::from_value(payload).unwrap();
        let image = profile.first_image().unwrap();
        assert_eq!(image.url, "https://img/1.jpg");
        assert!(image.placeholder);
    }
}
