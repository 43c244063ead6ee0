use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{LaunchRecord, Outcome};

/// Success and failure tallies for a set of launches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeCounts {
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.failure
    }
}

/// Count successful launches per site. Sites without a success are absent;
/// keys iterate in ascending site order.
pub fn success_counts_by_site<'a, I>(records: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records.into_iter().filter(|r| r.outcome.is_success()) {
        *counts.entry(record.launch_site.clone()).or_default() += 1;
    }
    counts
}

/// Count successes and failures among the records of a single site.
pub fn outcome_counts<'a, I>(records: I, site: &str) -> OutcomeCounts
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|r| r.launch_site == site)
        .fold(OutcomeCounts::default(), |mut acc, r| {
            match r.outcome {
                Outcome::Success => acc.success += 1,
                Outcome::Failure => acc.failure += 1,
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn record(site: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            flight_number: 1,
            launch_site: site.to_string(),
            payload_mass_kg: 1000.0,
            booster_version_category: "FT".to_string(),
            outcome,
        }
    }

    #[test]
    fn single_site_counts_one_of_each() {
        let records = vec![
            record("KSC LC-39A", Outcome::Success),
            record("KSC LC-39A", Outcome::Failure),
        ];
        let counts = outcome_counts(&records, "KSC LC-39A");
        assert_eq!(
            counts,
            OutcomeCounts {
                success: 1,
                failure: 1
            }
        );
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn single_site_ignores_other_sites() {
        let records = vec![
            record("KSC LC-39A", Outcome::Success),
            record("CCAFS LC-40", Outcome::Failure),
        ];
        let counts = outcome_counts(&records, "KSC LC-39A");
        assert_eq!(counts.get(Outcome::Success), 1);
        assert_eq!(counts.get(Outcome::Failure), 0);
    }

    #[test]
    fn by_site_counts_only_successes() {
        let records = vec![
            record("VAFB SLC-4E", Outcome::Success),
            record("CCAFS LC-40", Outcome::Success),
            record("CCAFS LC-40", Outcome::Success),
            record("KSC LC-39A", Outcome::Failure),
        ];
        let counts = success_counts_by_site(&records);
        let entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("CCAFS LC-40", 2), ("VAFB SLC-4E", 1)]);
    }

    proptest! {
        #[test]
        fn per_site_successes_sum_to_total(
            rows in prop::collection::vec((0usize..4, any::<bool>()), 0..80),
        ) {
            let names = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
            let records: Vec<LaunchRecord> = rows
                .iter()
                .map(|&(s, ok)| {
                    let outcome = if ok { Outcome::Success } else { Outcome::Failure };
                    record(names[s], outcome)
                })
                .collect();

            let total: usize = success_counts_by_site(&records).values().sum();
            let expected = records.iter().filter(|r| r.outcome.is_success()).count();
            prop_assert_eq!(total, expected);
        }
    }
}
