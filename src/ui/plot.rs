use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    GridInput, GridMark, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

use spacex_dash::charts::MarkerSymbol;
use spacex_dash::color::{parse_hex, with_opacity};
use spacex_dash::data::model::Outcome;
use spacex_dash::state::AppState;

/// Widest angle, in radians, of one polygon in a donut slice.
const PIE_SEGMENT_STEP: f64 = 0.05;

/// Hover snapping distance as a share of the payload span.
const HOVER_TOLERANCE_SHARE: f64 = 0.02;

// ---------------------------------------------------------------------------
// Donut pie (success counts)
// ---------------------------------------------------------------------------

/// Render the success pie with the given height.
pub fn success_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let pie = &state.pie;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&pie.title);
    });
    if pie.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label("No data");
        });
    }

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let fractions = pie.fractions();
            for ((slice, wedge), fraction) in pie.slices.iter().zip(pie.wedges()).zip(fractions) {
                let color = parse_hex(&slice.color).unwrap_or(Color32::GRAY);

                for quad in wedge.segments(pie.hole, 1.0, PIE_SEGMENT_STEP) {
                    let polygon = Polygon::new(PlotPoints::from(quad.to_vec()))
                        .fill_color(color)
                        .stroke(Stroke::new(0.5, color))
                        .name(&slice.label);
                    plot_ui.polygon(polygon);
                }

                let angle = wedge.mid_angle();
                let radius = (1.0 + pie.hole) / 2.0;
                let label = Text::new(
                    PlotPoint::new(radius * angle.cos(), radius * angle.sin()),
                    format!("{:.1}%", fraction * 100.0),
                )
                .color(Color32::WHITE);
                plot_ui.text(label);
            }
        });
}

// ---------------------------------------------------------------------------
// Payload vs outcome scatter
// ---------------------------------------------------------------------------

/// Render the scatter chart into the remaining space.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let scatter = &state.scatter;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&scatter.title);
    });
    if scatter.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
    }

    let span = (state.payload_stats.max - state.payload_stats.min) as f64;
    let tolerance = (span * HOVER_TOLERANCE_SHARE).max(50.0);
    let radius = scatter.marker_size / 2.0;

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label(&scatter.x_label)
        .y_axis_label("Outcome")
        .include_y(-0.5)
        .include_y(1.5)
        .y_grid_spacer(outcome_marks)
        .y_axis_formatter(|mark, _range| outcome_label(mark.value))
        .label_formatter(move |_name, value| {
            match scatter.point_near(value.x, value.y, tolerance) {
                Some(p) => format!(
                    "Flight {}\n{}\nPayload: {} kg\n{}",
                    p.flight_number, p.launch_site, p.payload_mass_kg, p.outcome
                ),
                None => format!("Payload: {:.0} kg", value.x),
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for trace in &scatter.traces {
                let base = parse_hex(&trace.color).unwrap_or(Color32::LIGHT_BLUE);
                let points: PlotPoints = trace.points.iter().map(|p| p.position()).collect();

                let markers = Points::new(points)
                    .name(&trace.name)
                    .color(with_opacity(base, scatter.opacity))
                    .shape(marker_shape(trace.symbol))
                    .radius(radius)
                    .filled(true);

                plot_ui.points(markers);
            }
        });
}

/// Grid marks only at the two outcome categories.
fn outcome_marks(_input: GridInput) -> Vec<GridMark> {
    Outcome::ORDER
        .iter()
        .map(|o| GridMark {
            value: o.axis_value(),
            step_size: 1.0,
        })
        .collect()
}

fn outcome_label(value: f64) -> String {
    Outcome::ORDER
        .iter()
        .find(|o| (o.axis_value() - value).abs() < 1e-6)
        .map(|o| o.label().to_string())
        .unwrap_or_default()
}

fn marker_shape(symbol: MarkerSymbol) -> MarkerShape {
    match symbol {
        MarkerSymbol::Circle => MarkerShape::Circle,
        MarkerSymbol::Diamond => MarkerShape::Diamond,
        MarkerSymbol::Square => MarkerShape::Square,
        MarkerSymbol::Cross => MarkerShape::Cross,
        MarkerSymbol::Up => MarkerShape::Up,
        MarkerSymbol::Down => MarkerShape::Down,
        MarkerSymbol::Plus => MarkerShape::Plus,
        MarkerSymbol::Asterisk => MarkerShape::Asterisk,
        MarkerSymbol::Left => MarkerShape::Left,
        MarkerSymbol::Right => MarkerShape::Right,
    }
}
