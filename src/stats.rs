//! Payload statistics computed once at startup for the range slider.

use serde::Serialize;

use crate::data::filter::PayloadRange;
use crate::data::model::LaunchDataset;

/// Slider increment in kg.
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

/// Min, max and quartiles of payload mass, truncated to whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayloadStats {
    pub min: i64,
    pub max: i64,
    pub q1: i64,
    pub q2: i64,
    pub q3: i64,
}

impl PayloadStats {
    /// Returns `None` for an empty dataset.
    pub fn from_dataset(dataset: &LaunchDataset) -> Option<Self> {
        Self::from_values(&dataset.payloads())
    }

    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        Some(PayloadStats {
            min: sorted[0] as i64,
            max: sorted[n - 1] as i64,
            q1: quantile(&sorted, 0.25) as i64,
            q2: quantile(&sorted, 0.50) as i64,
            q3: quantile(&sorted, 0.75) as i64,
        })
    }

    /// The slider's starting value: the whole payload span.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min as f64, self.max as f64)
    }

    /// Labelled slider marks at min, quartiles and max, ascending, with
    /// duplicate positions collapsed.
    pub fn slider_marks(&self) -> Vec<(i64, String)> {
        let mut marks: Vec<i64> = vec![self.min, self.q1, self.q2, self.q3, self.max];
        marks.sort_unstable();
        marks.dedup();
        marks.into_iter().map(|m| (m, m.to_string())).collect()
    }
}

/// Quantile with linear interpolation between closest ranks
/// (Hyndman-Fan type 7). `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = q * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_interpolate_between_ranks() {
        // ranks 1, 2, 3 land exactly on samples
        let stats = PayloadStats::from_values(&[3500.0, 0.0, 9600.0, 500.0, 2000.0]).unwrap();
        assert_eq!(
            stats,
            PayloadStats {
                min: 0,
                max: 9600,
                q1: 500,
                q2: 2000,
                q3: 3500,
            }
        );
    }

    #[test]
    fn quartiles_truncate_fractional_values() {
        // q1 = 750.0, q2 = 1750.0, q3 = 2875.0 before truncation
        let stats = PayloadStats::from_values(&[0.0, 1000.0, 2500.0, 4000.0]).unwrap();
        assert_eq!(stats.q1, 750);
        assert_eq!(stats.q2, 1750);
        assert_eq!(stats.q3, 2875);

        let stats = PayloadStats::from_values(&[0.0, 1.5]).unwrap();
        assert_eq!(stats.q2, 0);
        assert_eq!(stats.max, 1);
    }

    #[test]
    fn empty_has_no_stats() {
        assert!(PayloadStats::from_values(&[]).is_none());
    }

    #[test]
    fn marks_collapse_duplicates() {
        let stats = PayloadStats::from_values(&[500.0]).unwrap();
        assert_eq!(stats.slider_marks(), vec![(500, "500".to_string())]);
        assert_eq!(stats.full_range(), PayloadRange::new(500.0, 500.0));
    }
}
