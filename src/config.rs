//! Runtime configuration, read from the environment with fixed defaults.

use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 600.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

pub const ENV_DATA_PATH: &str = "SPACEX_DASH_DATA";
pub const ENV_WINDOW_WIDTH: &str = "SPACEX_DASH_WIDTH";
pub const ENV_WINDOW_HEIGHT: &str = "SPACEX_DASH_HEIGHT";

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    /// CSV file with the launch records.
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            window_size: [DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT],
        }
    }
}

impl DashConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable sizes fall back to
    /// the defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA_PATH).filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path.trim());
        }
        if let Some(width) = parse_size(&lookup, ENV_WINDOW_WIDTH, MIN_WINDOW_WIDTH) {
            config.window_size[0] = width;
        }
        if let Some(height) = parse_size(&lookup, ENV_WINDOW_HEIGHT, MIN_WINDOW_HEIGHT) {
            config.window_size[1] = height;
        }

        config
    }
}

fn parse_size<F>(lookup: &F, key: &str, min: f32) -> Option<f32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v >= min => Some(v),
        _ => {
            log::warn!("Ignoring {key}={raw:?}: expected a number >= {min}");
            None
        }
    }
}
