//! # Place Categorizer
//!
//! Buckets a flat list of nearby places by category for display.
//!
//! - Keys are lower-cased; an empty key becomes `"place"`.
//! - Places keep their input order inside a bucket.
//! - Known categories come first, in [`CATEGORY_TABLE`] order.
//! - Everything else follows in first-seen order, labelled with its raw key.

use std::collections::HashMap;

use crate::profile::NearbyPlace;

/// Key used for places with no category.
pub const FALLBACK_CATEGORY: &str = "place";

/// Known categories in display order, with their labels.
/// Position in this table is the category's rank.
pub const CATEGORY_TABLE: &[(&str, &str)] = &[
    ("restaurant", "Restaurant"),
    ("cafe", "Cafe"),
    ("fast_food", "Fast food"),
    ("supermarket", "Supermarket"),
    ("convenience", "Convenience"),
    ("mall", "Mall"),
    ("gym", "Gym"),
    ("place_of_worship", "Place of worship"),
];

/// A named group of places sharing a category key.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    pub key: String,
    pub label: String,
    pub places: Vec<NearbyPlace>,
}

/// Lower-cased, trimmed category key with the generic fallback.
pub fn normalize_category(category: &str) -> String {
    let key = category.trim().to_lowercase();
    if key.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        key
    }
}

/// Rank in the preferred order, `None` for unknown categories.
pub fn category_rank(key: &str) -> Option<usize> {
    CATEGORY_TABLE.iter().position(|(known, _)| *known == key)
}

/// Display label for a normalized key. Unknown keys pass through verbatim.
pub fn category_label(key: &str) -> &str {
    CATEGORY_TABLE
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// Groups places by normalized category, preferred categories first, then
/// the rest in first-seen order. Places keep their input order within a bucket.
pub fn categorize(places: &[NearbyPlace]) -> Vec<CategoryBucket> {
    // Buckets in first-seen order; the map only locates a key's bucket.
    let mut buckets: Vec<CategoryBucket> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for place in places {
        let key = normalize_category(&place.category);
        let index = *index_of.entry(key.clone()).or_insert_with(|| {
            buckets.push(CategoryBucket {
                label: category_label(&key).to_string(),
                key,
                places: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[index].places.push(place.clone());
    }

    // Stable: unknown categories tie at usize::MAX and keep first-seen order.
    buckets.sort_by_key(|bucket| category_rank(&bucket.key).unwrap_or(usize::MAX));
    buckets
}

/// Places in the order they are listed across buckets.
pub fn places_in_display_order(buckets: &[CategoryBucket]) -> impl Iterator<Item = &NearbyPlace> {
    buckets.iter().flat_map(|bucket| bucket.places.iter())
}
