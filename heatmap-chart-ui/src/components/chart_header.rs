//! Chart header with the static title and description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Rendered as `h1#title`
    pub title: String,
    /// Rendered as `p#description`
    #[props(default = String::new())]
    pub description: String,
}

/// Heading and description paragraph above the chart.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            p {
                id: "description",
                style: "margin: 0; font-size: 14px; color: #666;",
                "{props.description}"
            }
        }
    }
}
