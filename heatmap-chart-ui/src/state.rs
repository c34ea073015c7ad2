//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use heatmap_core::{ChartConfig, Dataset, Renderer};

/// Shared application state for the heat map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fetched dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Owner of the drawing surface, scales and tooltip
    pub renderer: Signal<Renderer>,
    /// Whether the dataset is still being fetched
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with the default chart configuration.
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    /// Create a new AppState whose renderer uses `config`.
    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            dataset: Signal::new(None),
            renderer: Signal::new(Renderer::new(config)),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}
