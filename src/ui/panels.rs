use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use spacex_dash::config::DASHBOARD_TITLE;
use spacex_dash::data::filter::{PayloadRange, SiteSelection};
use spacex_dash::state::AppState;
use spacex_dash::stats::PAYLOAD_SLIDER_STEP;

const SITE_PLACEHOLDER: &str = "Select a Launch Site here";

// ---------------------------------------------------------------------------
// Left side panel – dropdown and payload range
// ---------------------------------------------------------------------------

/// Render the control panel.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Launch Site");
            ui.separator();
            site_dropdown(ui, state);

            ui.add_space(16.0);
            ui.heading("Payload range (Kg)");
            ui.separator();
            payload_controls(ui, state);
        });
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    // Clone what we need so we can mutate state inside the popup.
    let options = state.site_options.clone();
    let selected_value = state.site.value().to_string();
    let selected_text = options
        .iter()
        .find(|o| o.value == selected_value)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| SITE_PLACEHOLDER.to_string());

    let mut choice: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text("Search sites…"),
            );
            let needle = state.site_search.to_lowercase();
            for option in options
                .iter()
                .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            {
                if ui
                    .selectable_label(option.value == selected_value, &option.label)
                    .clicked()
                {
                    choice = Some(SiteSelection::from_value(&option.value));
                }
            }
        });

    if let Some(site) = choice {
        state.site_search.clear();
        state.set_site(site);
    }
}

fn payload_controls(ui: &mut Ui, state: &mut AppState) {
    let stats = state.payload_stats;
    let bounds = stats.min as f64..=stats.max as f64;
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    ui.add(
        egui::Slider::new(&mut low, bounds.clone())
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("min"),
    );
    ui.add(
        egui::Slider::new(&mut high, bounds)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("max"),
    );

    // Marks at min / quartiles / max; clicking snaps the nearer bound.
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (mark, label) in stats.slider_marks() {
            let mark = mark as f64;
            if ui.small_button(label).clicked() {
                if (mark - low).abs() <= (mark - high).abs() {
                    low = mark;
                } else {
                    high = mark;
                }
            }
        }
    });

    if ui.button("Reset range").clicked() {
        state.reset_payload_range();
        return;
    }

    state.set_payload_range(PayloadRange::new(low, high));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Export", |ui: &mut Ui| {
            if ui.button("Copy pie chart JSON").clicked() {
                let json = state.pie.to_json();
                copy_json(ui, state, "pie chart", json);
                ui.close_menu();
            }
            if ui.button("Copy scatter chart JSON").clicked() {
                let json = state.scatter.to_json();
                copy_json(ui, state, "scatter chart", json);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong(RichText::new(DASHBOARD_TITLE).color(Color32::from_rgb(0x50, 0x3d, 0x36)));
        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} shown on scatter",
            state.dataset.len(),
            state.scatter.point_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::GRAY));
        }
    });
}

fn copy_json(ui: &Ui, state: &mut AppState, what: &str, json: serde_json::Result<String>) {
    match json {
        Ok(text) => {
            ui.ctx().copy_text(text);
            log::info!("Copied {what} JSON to clipboard");
            state.status_message = Some(format!("Copied {what} JSON"));
        }
        Err(e) => {
            log::error!("Failed to serialize {what}: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
