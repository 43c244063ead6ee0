use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Outcome – Success / Failure label derived from the `class` flag
// ---------------------------------------------------------------------------

/// Launch outcome. Ordered `Failure < Success`, which is also the category
/// order used on the scatter y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Category order for charts.
    pub const ORDER: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    /// Map the binary `class` column value onto an outcome.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Position on the categorical y-axis.
    pub fn axis_value(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    /// Hex colour used for this outcome in both charts.
    pub fn color_hex(self) -> &'static str {
        match self {
            Outcome::Success => "#00cc96",
            Outcome::Failure => "#EF553B",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub flight_number: u32,
    pub launch_site: String,
    /// Payload mass in kg.
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed category indices.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All records in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted unique launch sites.
    pub sites: Vec<String>,
    /// Sorted unique booster version categories.
    pub booster_categories: Vec<String>,
}

impl LaunchDataset {
    /// Build category indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites: BTreeSet<&str> = records.iter().map(|r| r.launch_site.as_str()).collect();
        let boosters: BTreeSet<&str> = records
            .iter()
            .map(|r| r.booster_version_category.as_str())
            .collect();

        let sites = sites.into_iter().map(str::to_owned).collect();
        let booster_categories = boosters.into_iter().map(str::to_owned).collect();

        LaunchDataset {
            records,
            sites,
            booster_categories,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with a successful outcome.
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// Payload masses in file order.
    pub fn payloads(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.payload_mass_kg).collect()
    }
}
