pub mod client;
pub mod property;
pub mod types;

pub use client::{FetchError, HttpProfileClient, ProfileFetcher, ProfileRequest, valid_radius};
pub use property::{PropertySummary, TaxYearRow, format_usd};
pub use types::{
    GeoPoint, Location, MapSchool, MapSummary, NearbyPlace, NewsItem, PropertyImage,
    PropertyProfile, PropertyRecord, School,
};
