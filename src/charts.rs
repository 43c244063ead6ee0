//! Chart specifications built from the filtered launch table.
//!
//! These are plain serializable values; the UI layer turns them into
//! `egui_plot` items and the top bar can export them as JSON.

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::color::category_colors;
use crate::data::aggregate::{outcome_counts, success_counts_by_site};
use crate::data::filter::{scatter_selection, PayloadRange, SiteSelection};
use crate::data::model::{LaunchDataset, LaunchRecord, Outcome};

/// Inner radius of the donut as a fraction of the outer radius.
pub const PIE_HOLE: f64 = 0.3;
pub const SCATTER_OPACITY: f32 = 0.65;
pub const SCATTER_MARKER_SIZE: f32 = 12.0;

pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches by Site";
pub const SCATTER_TITLE: &str = "Payload vs. Launch Outcome";
pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// `#rrggbb`
    pub color: String,
}

/// Angular extent of one slice, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub sweep: f64,
}

impl Wedge {
    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }

    /// Split the ring sector between `inner` and `outer` radius into convex
    /// quads no wider than `max_step` radians each.
    pub fn segments(&self, inner: f64, outer: f64, max_step: f64) -> Vec<[[f64; 2]; 4]> {
        if self.sweep <= 0.0 {
            return Vec::new();
        }
        let n = (self.sweep / max_step).ceil().max(1.0) as usize;
        let step = self.sweep / n as f64;
        let at = |r: f64, a: f64| [r * a.cos(), r * a.sin()];

        (0..n)
            .map(|i| {
                let a0 = self.start + step * i as f64;
                let a1 = a0 + step;
                [at(outer, a0), at(outer, a1), at(inner, a1), at(inner, a0)]
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub hole: f64,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of the whole for each slice; all zeros for an empty chart.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| {
                if total == 0 {
                    0.0
                } else {
                    s.value as f64 / total as f64
                }
            })
            .collect()
    }

    /// Slice wedges laid out counterclockwise from twelve o'clock. `start`
    /// is the leading edge; each wedge extends counterclockwise by `sweep`.
    pub fn wedges(&self) -> Vec<Wedge> {
        let mut start = FRAC_PI_2;
        self.fractions()
            .into_iter()
            .map(|f| {
                let wedge = Wedge {
                    start,
                    sweep: f * TAU,
                };
                start += wedge.sweep;
                wedge
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Pie for the site dropdown: successes per site for `All`, otherwise the
/// success/failure split of the chosen site. Slices run largest first; ties
/// keep site order (or Failure before Success).
pub fn build_pie(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    let mut pie = match site {
        SiteSelection::All => {
            let colors = category_colors(&dataset.sites);
            let slices = success_counts_by_site(&dataset.records)
                .into_iter()
                .map(|(label, value)| PieSlice {
                    color: colors.get(&label).cloned().unwrap_or_default(),
                    label,
                    value,
                })
                .collect();
            PieChart {
                title: ALL_SITES_PIE_TITLE.to_string(),
                hole: PIE_HOLE,
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let counts = outcome_counts(&dataset.records, name);
            let slices = Outcome::ORDER
                .iter()
                .filter(|&&o| counts.get(o) > 0)
                .map(|&o| PieSlice {
                    label: o.label().to_string(),
                    value: counts.get(o),
                    color: o.color_hex().to_string(),
                })
                .collect();
            PieChart {
                title: format!("Success vs Failure for {name}"),
                hole: PIE_HOLE,
                slices,
            }
        }
    };
    // Stable sort keeps the tie order.
    pie.slices.sort_by(|a, b| b.value.cmp(&a.value));
    pie
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Marker shape per booster version category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerSymbol {
    Circle,
    Diamond,
    Square,
    Cross,
    Up,
    Down,
    Plus,
    Asterisk,
    Left,
    Right,
}

impl MarkerSymbol {
    const CYCLE: [MarkerSymbol; 10] = [
        MarkerSymbol::Circle,
        MarkerSymbol::Diamond,
        MarkerSymbol::Square,
        MarkerSymbol::Cross,
        MarkerSymbol::Up,
        MarkerSymbol::Down,
        MarkerSymbol::Plus,
        MarkerSymbol::Asterisk,
        MarkerSymbol::Left,
        MarkerSymbol::Right,
    ];

    /// Symbol for the `index`-th category; wraps around after ten.
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }
}

/// One launch on the scatter chart with its hover data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub flight_number: u32,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
}

impl ScatterPoint {
    fn from_record(record: &LaunchRecord) -> Self {
        ScatterPoint {
            flight_number: record.flight_number,
            launch_site: record.launch_site.clone(),
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
        }
    }

    /// Plot position: payload on x, categorical outcome on y.
    pub fn position(&self) -> [f64; 2] {
        [self.payload_mass_kg, self.outcome.axis_value()]
    }
}

/// Points sharing an outcome colour and booster marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub outcome: Outcome,
    pub booster_version_category: String,
    pub color: String,
    pub symbol: MarkerSymbol,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    /// Categorical y-axis order, bottom to top.
    pub y_categories: Vec<Outcome>,
    pub opacity: f32,
    pub marker_size: f32,
    pub traces: Vec<ScatterTrace>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.traces.iter().map(|t| t.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.traces.iter().flat_map(|t| t.points.iter())
    }

    /// Point on the same outcome row whose payload is closest to `x`, if it
    /// lies within `x_tolerance` kg.
    pub fn point_near(&self, x: f64, y: f64, x_tolerance: f64) -> Option<&ScatterPoint> {
        self.points()
            .filter(|p| (p.outcome.axis_value() - y).abs() < 0.5)
            .map(|p| ((p.payload_mass_kg - x).abs(), p))
            .filter(|(dx, _)| *dx <= x_tolerance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, p)| p)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Scatter of payload against outcome for the selected site and payload
/// range. Traces are keyed by (outcome, booster category); symbols come from
/// the dataset-wide booster list so they stay put as filters change.
pub fn build_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let symbols: BTreeMap<&str, MarkerSymbol> = dataset
        .booster_categories
        .iter()
        .enumerate()
        .map(|(i, b)| (b.as_str(), MarkerSymbol::for_index(i)))
        .collect();

    let mut grouped: BTreeMap<(Outcome, &str), Vec<ScatterPoint>> = BTreeMap::new();
    for record in scatter_selection(dataset, site, range) {
        grouped
            .entry((record.outcome, record.booster_version_category.as_str()))
            .or_default()
            .push(ScatterPoint::from_record(record));
    }

    let traces = grouped
        .into_iter()
        .map(|((outcome, booster), points)| ScatterTrace {
            name: format!("{outcome}, {booster}"),
            outcome,
            booster_version_category: booster.to_string(),
            color: outcome.color_hex().to_string(),
            symbol: symbols.get(booster).copied().unwrap_or(MarkerSymbol::Circle),
            points,
        })
        .collect();

    ScatterChart {
        title: SCATTER_TITLE.to_string(),
        x_label: SCATTER_X_LABEL.to_string(),
        y_categories: Outcome::ORDER.to_vec(),
        opacity: SCATTER_OPACITY,
        marker_size: SCATTER_MARKER_SIZE,
        traces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(flight: u32, site: &str, payload: f64, booster: &str, ok: bool) -> LaunchRecord {
        LaunchRecord {
            flight_number: flight,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: booster.to_string(),
            outcome: if ok { Outcome::Success } else { Outcome::Failure },
        }
    }

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record(1, "CCAFS LC-40", 0.0, "v1.0", false),
            record(2, "CCAFS LC-40", 525.0, "v1.0", true),
            record(3, "VAFB SLC-4E", 500.0, "v1.1", true),
            record(4, "KSC LC-39A", 2490.0, "FT", true),
            record(5, "KSC LC-39A", 5300.0, "FT", false),
            record(6, "KSC LC-39A", 3600.0, "FT", true),
        ])
    }

    #[test]
    fn all_sites_pie_counts_successes_per_site() {
        let pie = build_pie(&dataset(), &SiteSelection::All);
        assert_eq!(pie.title, ALL_SITES_PIE_TITLE);
        assert_eq!(pie.hole, PIE_HOLE);

        let slices: Vec<(&str, usize)> = pie
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect();
        assert_eq!(
            slices,
            vec![("KSC LC-39A", 2), ("CCAFS LC-40", 1), ("VAFB SLC-4E", 1)]
        );
        assert!(pie.slices.iter().all(|s| s.color.starts_with('#')));
    }

    #[test]
    fn site_pie_splits_outcomes_with_fixed_colours() {
        let pie = build_pie(&dataset(), &SiteSelection::from_value("KSC LC-39A"));
        assert_eq!(pie.title, "Success vs Failure for KSC LC-39A");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice {
                    label: "Success".to_string(),
                    value: 2,
                    color: "#00cc96".to_string(),
                },
                PieSlice {
                    label: "Failure".to_string(),
                    value: 1,
                    color: "#EF553B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn site_pie_omits_empty_outcomes() {
        let pie = build_pie(&dataset(), &SiteSelection::from_value("VAFB SLC-4E"));
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].label, "Success");
    }

    #[test]
    fn unknown_site_pie_is_empty() {
        let pie = build_pie(&dataset(), &SiteSelection::from_value("Boca Chica"));
        assert!(pie.is_empty());
        assert!(pie.wedges().is_empty());
    }

    #[test]
    fn wedges_cover_the_circle() {
        let pie = build_pie(&dataset(), &SiteSelection::All);
        let fractions = pie.fractions();
        assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-12);

        let wedges = pie.wedges();
        assert_eq!(wedges[0].start, FRAC_PI_2);
        let swept: f64 = wedges.iter().map(|w| w.sweep).sum();
        assert!((swept - TAU).abs() < 1e-12);
        for pair in wedges.windows(2) {
            assert!((pair[0].start + pair[0].sweep - pair[1].start).abs() < 1e-12);
        }
    }

    #[test]
    fn wedge_segments_span_the_sector() {
        let wedge = Wedge {
            start: FRAC_PI_2,
            sweep: FRAC_PI_2,
        };
        let quads = wedge.segments(0.3, 1.0, 0.1);
        assert_eq!(quads.len(), 16);

        let first = quads[0][0];
        assert!(first[0].abs() < 1e-12 && (first[1] - 1.0).abs() < 1e-12);
        let last = quads[15][1];
        assert!((last[0] + 1.0).abs() < 1e-12 && last[1].abs() < 1e-12);
        let inner = quads[15][2];
        assert!((inner[0] + 0.3).abs() < 1e-12);

        // Labels sit halfway through the sector, at 135 degrees.
        let mid = wedge.mid_angle();
        assert!((mid - 3.0 * FRAC_PI_2 / 2.0).abs() < 1e-12);
        assert!(mid.cos() < 0.0 && mid.sin() > 0.0);

        let empty = Wedge { start: 0.0, sweep: 0.0 };
        assert!(empty.segments(0.3, 1.0, 0.1).is_empty());
    }

    #[test]
    fn scatter_groups_by_outcome_and_booster() {
        let ds = dataset();
        let scatter = build_scatter(&ds, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));

        assert_eq!(scatter.point_count(), ds.len());
        let names: Vec<&str> = scatter.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Failure, FT", "Failure, v1.0", "Success, FT", "Success, v1.0", "Success, v1.1"]
        );

        let ft: Vec<MarkerSymbol> = scatter
            .traces
            .iter()
            .filter(|t| t.booster_version_category == "FT")
            .map(|t| t.symbol)
            .collect();
        assert_eq!(ft, vec![MarkerSymbol::Circle, MarkerSymbol::Circle]);
        assert_eq!(scatter.y_categories, vec![Outcome::Failure, Outcome::Success]);
    }

    #[test]
    fn scatter_respects_site_and_range() {
        let ds = dataset();
        let site = SiteSelection::from_value("KSC LC-39A");
        let scatter = build_scatter(&ds, &site, PayloadRange::new(2000.0, 4000.0));

        let mut flights: Vec<u32> = scatter.points().map(|p| p.flight_number).collect();
        flights.sort_unstable();
        assert_eq!(flights, vec![4, 6]);
        assert!(scatter
            .points()
            .all(|p| p.launch_site == "KSC LC-39A" && (2000.0..=4000.0).contains(&p.payload_mass_kg)));
    }

    #[test]
    fn empty_scatter_still_has_axes() {
        let scatter = build_scatter(&dataset(), &SiteSelection::All, PayloadRange::new(9000.0, 9500.0));
        assert!(scatter.is_empty());
        assert_eq!(scatter.title, SCATTER_TITLE);
        assert_eq!(scatter.x_label, SCATTER_X_LABEL);
    }

    #[test]
    fn point_near_picks_closest_on_same_row() {
        let scatter = build_scatter(&dataset(), &SiteSelection::All, PayloadRange::new(0.0, 10000.0));

        let hit = scatter.point_near(510.0, 1.0, 100.0).unwrap();
        assert_eq!(hit.flight_number, 3);
        let hit = scatter.point_near(510.0, 0.1, 600.0).unwrap();
        assert_eq!(hit.flight_number, 1);
        assert!(scatter.point_near(8000.0, 1.0, 100.0).is_none());
    }

    #[test]
    fn charts_export_as_json() {
        let ds = dataset();
        let pie = build_pie(&ds, &SiteSelection::All).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&pie).unwrap();
        assert_eq!(value["title"], ALL_SITES_PIE_TITLE);
        assert_eq!(value["slices"].as_array().map(Vec::len), Some(3));

        let scatter = build_scatter(&ds, &SiteSelection::All, PayloadRange::new(0.0, 600.0))
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&scatter).unwrap();
        assert_eq!(value["y_categories"][0], "Failure");
        assert_eq!(value["traces"][0]["symbol"], "Diamond");
    }
}
