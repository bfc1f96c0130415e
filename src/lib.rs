//! # linefit — parallel RANSAC line fitting
//!
//! `linefit` estimates the slope and intercept of a line that best explains
//! a noisy 2D point set, tolerating a high fraction of gross outliers. It
//! runs a fixed budget of RANSAC trials — sample two points of distinct x,
//! fit the line through them, count inliers under a squared-residual
//! threshold — split across independent worker threads whose local bests
//! are reduced into a single global best.
//!
//! ## Quick Start
//!
//! ```rust
//! use linefit::{fit_line, FitSettings, NoopSink, Observation};
//!
//! let observations = vec![
//!     Observation::new(0.0, 0.0),
//!     Observation::new(1.0, 1.0),
//!     Observation::new(2.0, 2.0),
//!     Observation::new(10.0, -5.0), // outlier
//! ];
//!
//! let settings = FitSettings::with_iterations(500);
//! let report = fit_line(&observations, &settings, &NoopSink).unwrap();
//!
//! assert_eq!(report.inlier_count, 3);
//! ```
//!
//! ## Modules
//!
//! - [`api`] — high-level [`fit_line`] entry point
//! - [`core`] — trial runner, workers, and the coordinating reduction
//! - [`estimators`] — exact two-point line fitting
//! - [`scoring`] — inlier counting under the residual threshold
//! - [`samplers`] — distinct-x minimal-sample drawing with bounded retries
//! - [`dataset`] — delimited-text observation loading
//! - [`settings`] — run configuration and validation
//! - [`report`] — progress sinks and run summaries

pub mod api;
pub mod core;
pub mod dataset;
pub mod error;
pub mod estimators;
pub mod models;
pub mod report;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

pub use api::{fit_line, FitReport};
pub use error::{FitError, Result};
pub use models::LineModel;
pub use report::{FitSummary, NoopSink, ProgressRecord, ProgressSink};
pub use settings::FitSettings;
pub use types::Observation;
