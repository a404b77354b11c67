//! # Property Summary
//!
//! Flattens the open-ended property record into the handful of fields the
//! property card shows. Every field is optional: a missing or oddly typed
//! attribute is simply omitted, never an error.

use serde_json::Value;

use super::types::PropertyRecord;

pub const NO_PROPERTY_MESSAGE: &str = "No property data for this address.";
pub const PLACEHOLDER_IMAGE_NOTE: &str = "Generic image — not the actual property.";

/// One year's row in the tax tables.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxYearRow {
    /// Year label: the entry's own `year` field if present, else its key.
    pub year: String,
    pub amount: Option<f64>,
    /// True for the most recent year.
    pub latest: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerSummary {
    pub names: Vec<String>,
    pub kind: Option<String>,
}

impl OwnerSummary {
    /// `"A, B (Individual)"`.
    pub fn display(&self) -> String {
        let names = self.names.join(", ");
        match &self.kind {
            Some(kind) => format!("{names} ({kind})"),
            None => names,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertySummary {
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub tax_assessments: Vec<TaxYearRow>,
    pub property_taxes: Vec<TaxYearRow>,
    pub owner: Option<OwnerSummary>,
}

impl PropertySummary {
    pub fn from_record(record: &PropertyRecord) -> Self {
        Self {
            address: address(record),
            property_type: non_empty_str(record.get("propertyType")),
            tax_assessments: tax_rows(record.get("taxAssessments"), "value"),
            property_taxes: tax_rows(record.get("propertyTaxes"), "total"),
            owner: owner(record.get("owner")),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn address(record: &PropertyRecord) -> Option<String> {
    if let Some(formatted) = non_empty_str(record.get("formattedAddress")) {
        return Some(formatted);
    }
    let parts: Vec<String> = ["addressLine1", "city", "state", "zipCode"]
        .iter()
        .filter_map(|key| non_empty_str(record.get(*key)))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Year-keyed table sorted newest first. Keys that don't parse as a year sort last.
fn tax_rows(table: Option<&Value>, amount_field: &str) -> Vec<TaxYearRow> {
    let Some(table) = table.and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut entries: Vec<(&String, &Value)> = table.iter().collect();
    entries.sort_by(|(a, _), (b, _)| year_key(b).total_cmp(&year_key(a)));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (key, entry))| {
            let year = match entry.get("year") {
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::String(s)) if !s.is_empty() => s.clone(),
                _ => key.clone(),
            };
            TaxYearRow {
                year,
                amount: entry.get(amount_field).and_then(Value::as_f64),
                latest: index == 0,
            }
        })
        .collect()
}

fn year_key(key: &str) -> f64 {
    key.trim().parse::<f64>().unwrap_or(f64::NEG_INFINITY)
}

fn owner(value: Option<&Value>) -> Option<OwnerSummary> {
    let owner = value?.as_object()?;
    let names: Vec<String> = owner
        .get("names")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if names.is_empty() {
        return None;
    }
    Some(OwnerSummary {
        names,
        kind: non_empty_str(owner.get("type")),
    })
}

/// Whole-dollar amount with thousands separators: `$1,234,567`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
