//! Global Land Surface Temperature Heat Map
//!
//! Draws monthly temperature variance as a grid of colored cells, one column
//! per year and one row per month, with a color legend and hover tooltips.
//!
//! Data flow:
//! 1. On mount, a task scoped to `App` fetches the dataset JSON once.
//!    Dioxus drops the task if `App` unmounts first, so a late response
//!    never writes into a disposed view.
//! 2. The parsed `Dataset` is published into `AppState::dataset`.
//! 3. The render effect sees the dataset and calls `Renderer::render`, which
//!    clears the drawing surface and rebuilds scales, axes, cells and legend.
//! 4. `HeatMapSvg` draws the surface and feeds hover events back into it.

use anyhow::Context;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, warn};
use heatmap_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, HeatMapSvg, LoadingSpinner,
};
use heatmap_chart_ui::state::AppState;
use heatmap_core::fetch::fetch_dataset;
use heatmap_core::Dataset;

/// Chart container DOM element ID.
const CHART_ID: &str = "heatmap-chart";

const TITLE: &str = "Global land surface temperature by years and months";
const DESCRIPTION: &str = "A heat map visualisation";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("heatmap-root"))
        .launch(App);
}

/// Fetch the dataset, with context for the error box. An empty dataset is
/// not an error here; the renderer reports it as "No data to display".
async fn load_dataset(url: &str) -> anyhow::Result<Dataset> {
    fetch_dataset(url)
        .await
        .with_context(|| format!("Failed to load temperature data from {}", url))
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[Heatmap] App component mounted".into());

    let mut state = use_context_provider(AppState::new);

    // Fetch the dataset once on mount
    use_effect(move || {
        spawn(async move {
            let url = state.renderer.peek().config().dataset_url.clone();
            match load_dataset(&url).await {
                Ok(dataset) => {
                    info!("Loaded {} monthly records", dataset.len());
                    state.dataset.set(Some(dataset));
                }
                Err(e) => {
                    error!("{:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // Rebuild the chart whenever the dataset changes
    use_effect(move || {
        let dataset = state.dataset.read();
        let Some(dataset) = dataset.as_ref() else {
            web_sys::console::log_1(&"[Heatmap Debug] render skipped: no dataset yet".into());
            return;
        };

        web_sys::console::log_1(&format!("[Heatmap Debug] rendering {} records", dataset.len()).into());
        let rendered = state.renderer.write().render(dataset).map(|s| s.cells().len());
        match rendered {
            Ok(cells) => {
                info!("Heat map drawn with {} cells", cells);
                state.error_msg.set(None);
            }
            Err(e) => {
                warn!("Render failed: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
    });

    rsx! {
        div {
            id: "heatmap",
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: TITLE.to_string(),
                description: DESCRIPTION.to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner { label: "Loading temperature data...".to_string() }
            } else {
                ChartContainer {
                    id: CHART_ID.to_string(),
                    min_height: 580,
                    HeatMapSvg {}
                }
            }
        }
    }
}
