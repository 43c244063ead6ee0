use std::fmt;

use serde::Serialize;

use super::model::{LaunchDataset, LaunchRecord};

/// Dropdown value standing for every launch site.
pub const ALL_SITES_VALUE: &str = "ALL";
pub const ALL_SITES_LABEL: &str = "All Sites";

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// Dropdown selection: every site, or one named site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value; the `ALL` sentinel selects every site.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(name) => name,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES_LABEL),
            SiteSelection::Site(name) => f.write_str(name),
        }
    }
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Dropdown options: `All Sites` first, then every site in ascending order.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SiteOption> {
    let mut options = Vec::with_capacity(dataset.sites.len() + 1);
    options.push(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    });
    options.extend(dataset.sites.iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }));
    options
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Inclusive payload interval in kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the bounds if they arrive reversed.
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            PayloadRange { low, high }
        } else {
            PayloadRange {
                low: high,
                high: low,
            }
        }
    }

    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Records at the selected site, in their original order. The `All`
/// selection returns every record unchanged.
pub fn filter_by_site<'a, I>(records: I, site: &SiteSelection) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records.into_iter().filter(|r| site.matches(r)).collect()
}

/// Records whose payload lies within the inclusive range.
pub fn filter_by_payload<'a, I>(records: I, range: PayloadRange) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}

/// Records shown on the scatter chart: payload filter, then site filter.
pub fn scatter_selection<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    let in_range = filter_by_payload(&dataset.records, range);
    filter_by_site(in_range, site)
}
