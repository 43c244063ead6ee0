use eframe::egui;

use spacex_dash::state::AppState;

use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpaceXDashApp {
    pub state: AppState,
}

impl SpaceXDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SpaceXDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title, counts, export ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site dropdown + payload range ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let pie_height = (ui.available_height() * 0.45).max(160.0);
            plot::success_pie(ui, &self.state, pie_height);
            ui.separator();
            plot::payload_scatter(ui, &self.state);
        });
    }
}
