//! Chart container component sized to the drawing surface.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container
    pub id: String,
    /// Minimum height in pixels, so the page does not jump while drawing
    #[props(default = 580)]
    pub min_height: u32,
    /// The chart itself
    pub children: Element,
}

/// A scrollable container for the SVG chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; overflow-x: auto;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            {props.children}
        }
    }
}
