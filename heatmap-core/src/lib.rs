//! Core library for the global temperature heat map.
//!
//! This crate provides:
//! - `dataset`: the JSON dataset model and its validation
//! - `fetch`: one-shot HTTP loading of the dataset (feature `fetch`)
//! - `scale`: linear, band and quantize scales derived from a dataset
//! - `ticks`: nice tick values and tick label formatting
//! - `surface`: the drawing root and the elements drawn into it
//! - `render`: the pipeline that clears and redraws the surface
//! - `tooltip`: the hover tooltip state machine
//! - `config`: presentation constants
//!
//! Nothing here touches the DOM. A host (the Dioxus chart app) reads the
//! surface to emit SVG and forwards pointer events to it.
//!
//! # Usage
//!
//! ```rust
//! use heatmap_core::{ChartConfig, Dataset, Renderer};
//!
//! let dataset = Dataset::from_json(
//!     r#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 1753, "month": 1, "variance": 0.06}]}"#,
//! ).unwrap();
//! let mut renderer = Renderer::new(ChartConfig::default());
//! let surface = renderer.render(&dataset).unwrap();
//! assert_eq!(surface.cells().len(), 1);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod months;
pub mod render;
pub mod scale;
pub mod surface;
pub mod ticks;
pub mod tooltip;

pub use config::ChartConfig;
pub use dataset::{Dataset, MonthRecord};
pub use error::{HeatMapError, Result};
pub use render::Renderer;
pub use surface::Surface;
