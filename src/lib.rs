//! Sprint metrics: derived reporting values over a hydrated sprint graph.

pub mod analyze;
pub mod calendar;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod model;
pub mod report;

#[cfg(test)]
mod fixtures;

pub use error::{MetricsError, Result};
