//! activity-heatmap: calendar-style activity charts.
//!
//! A series of per-day counts becomes a grid of colored dots, one column per
//! week and one row per weekday, with a title and month/weekday labels.
//! Layout, color bucketing and label placement are pure functions in
//! [`core`]; drawing goes through the [`render::Renderer`] trait so the same
//! pass runs against Cairo or a recording test double.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, render_activity_chart};
pub use error::{ChartError, ChartResult};
