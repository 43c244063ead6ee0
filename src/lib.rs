//! SpaceX launch records dashboard: CSV loading, site/payload filtering,
//! success aggregation and the chart specifications rendered by the egui app.

pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod stats;
pub mod state;
