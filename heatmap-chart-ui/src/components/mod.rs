//! Reusable Dioxus RSX components for the heat map app.

mod chart_container;
mod chart_header;
mod error_display;
mod heat_map_svg;
mod loading_spinner;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heat_map_svg::HeatMapSvg;
pub use loading_spinner::LoadingSpinner;
