//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  spacex_launch_dash.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse file → LaunchDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ LaunchDataset │  Vec<LaunchRecord>, site / booster index
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐     ┌───────────┐
//!   │  filter  │ ──▶ │ aggregate │  site + payload predicates, counts
//!   └──────────┘     └───────────┘
//! ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
