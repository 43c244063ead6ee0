use crate::charts::{build_pie, build_scatter, PieChart, ScatterChart};
use crate::data::filter::{site_options, PayloadRange, SiteOption, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::stats::PayloadStats;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
pub struct AppState {
    /// Launch table loaded at startup; never mutated.
    pub dataset: LaunchDataset,

    /// Payload statistics backing the range slider.
    pub payload_stats: PayloadStats,

    /// Dropdown entries, `All Sites` first.
    pub site_options: Vec<SiteOption>,

    /// Current dropdown selection.
    pub site: SiteSelection,

    /// Text typed into the dropdown's search box.
    pub site_search: String,

    /// Current slider interval.
    pub payload_range: PayloadRange,

    /// Pie for the current site (cached).
    pub pie: PieChart,

    /// Scatter for the current site and payload range (cached).
    pub scatter: ScatterChart,

    /// Status message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest the loaded dataset and its payload statistics, and build the
    /// initial charts for all sites over the full payload span.
    pub fn new(dataset: LaunchDataset, payload_stats: PayloadStats) -> Self {
        let site = SiteSelection::All;
        let payload_range = payload_stats.full_range();

        let pie = build_pie(&dataset, &site);
        let scatter = build_scatter(&dataset, &site, payload_range);

        Self {
            site_options: site_options(&dataset),
            dataset,
            payload_stats,
            site,
            site_search: String::new(),
            payload_range,
            pie,
            scatter,
            status_message: None,
        }
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("Site selection changed to {site}");
        self.site = site;
        self.pie = build_pie(&self.dataset, &self.site);
        self.rebuild_scatter();
    }

    /// Slider moved: only the scatter depends on the payload range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if range == self.payload_range {
            return;
        }
        log::debug!("Payload range changed to [{}, {}]", range.low, range.high);
        self.payload_range = range;
        self.rebuild_scatter();
    }

    /// Restore the slider to the full payload span.
    pub fn reset_payload_range(&mut self) {
        self.set_payload_range(self.payload_stats.full_range());
    }

    fn rebuild_scatter(&mut self) {
        self.scatter = build_scatter(&self.dataset, &self.site, self.payload_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(flight: u32, site: &str, payload: f64, ok: bool) -> LaunchRecord {
        LaunchRecord {
            flight_number: flight,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: "FT".to_string(),
            outcome: if ok { Outcome::Success } else { Outcome::Failure },
        }
    }

    fn state() -> AppState {
        let dataset = LaunchDataset::from_records(vec![
            record(1, "CCAFS LC-40", 0.0, false),
            record(2, "KSC LC-39A", 3000.0, true),
            record(3, "KSC LC-39A", 6000.0, false),
        ]);
        let stats = PayloadStats::from_dataset(&dataset).unwrap();
        AppState::new(dataset, stats)
    }

    #[test]
    fn starts_with_all_sites_and_full_range() {
        let s = state();
        assert_eq!(s.site, SiteSelection::All);
        assert_eq!(s.payload_range, PayloadRange::new(0.0, 6000.0));
        assert_eq!(s.scatter.point_count(), 3);
        assert_eq!(s.site_options.len(), 3);
    }

    #[test]
    fn site_change_rebuilds_both_charts() {
        let mut s = state();
        s.set_site(SiteSelection::from_value("KSC LC-39A"));
        assert_eq!(s.pie.title, "Success vs Failure for KSC LC-39A");
        assert_eq!(s.scatter.point_count(), 2);
    }

    #[test]
    fn range_change_only_touches_scatter() {
        let mut s = state();
        let pie_before = s.pie.clone();
        s.set_payload_range(PayloadRange::new(2000.0, 4000.0));
        assert_eq!(s.pie, pie_before);
        assert_eq!(s.scatter.point_count(), 1);

        s.reset_payload_range();
        assert_eq!(s.scatter.point_count(), 3);
    }

    #[test]
    fn slider_starts_at_given_stats() {
        let s = state();
        assert_eq!(s.payload_stats.min, 0);
        assert_eq!(s.payload_stats.max, 6000);
        assert_eq!(s.payload_range, s.payload_stats.full_range());
    }
}
