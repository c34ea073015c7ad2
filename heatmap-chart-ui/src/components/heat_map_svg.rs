//! SVG view of the renderer's drawing surface.
//!
//! Reads the `Renderer` from `AppState` and emits one SVG element per item on
//! the surface: both axes, the cells, the legend, and the tooltip on top.
//! Hover events on a cell go straight to the surface's tooltip controller.

use crate::state::AppState;
use dioxus::prelude::*;
use heatmap_core::surface::{Axis, AxisOrient, Cell, Tick};

/// The heat map chart. Renders nothing until the first successful render.
#[component]
pub fn HeatMapSvg() -> Element {
    let state = use_context::<AppState>();
    let renderer = state.renderer.read();
    let Some(surface) = renderer.surface() else {
        return rsx! {};
    };
    if surface.is_empty() {
        return rsx! {};
    }

    let tooltip = surface.tooltip();
    let (tooltip_x, tooltip_y) = tooltip.translate();
    let tooltip_box = tooltip.tooltip_box();
    let visibility = if tooltip.is_visible() { "visible" } else { "hidden" };

    rsx! {
        svg {
            width: surface.width().to_string(),
            height: surface.height().to_string(),

            if let Some(legend) = surface.legend() {
                g {
                    id: "legend",
                    transform: legend.transform(),
                    for (i, swatch) in legend.swatches.iter().enumerate() {
                        rect {
                            key: "{i}",
                            x: "{swatch.x}",
                            width: "{swatch.width}",
                            height: "{swatch.height}",
                            fill: "{swatch.fill}",
                        }
                    }
                    {axis_group(&legend.axis)}
                }
            }

            if let Some(axis) = surface.x_axis() {
                {axis_group(axis)}
            }
            if let Some(axis) = surface.y_axis() {
                {axis_group(axis)}
            }

            for (index, cell) in surface.cells().iter().enumerate() {
                CellRect { key: "{index}", index, cell: cell.clone() }
            }

            g {
                id: "tooltip",
                transform: "translate({tooltip_x},{tooltip_y})",
                style: "visibility: {visibility}; pointer-events: none;",
                rect {
                    id: "tooltip-box",
                    y: "0",
                    rx: "5",
                    width: "{tooltip_box.width}",
                    height: "{tooltip_box.height}",
                    fill: "{tooltip_box.fill}",
                    opacity: "{tooltip_box.opacity}",
                    stroke: "black",
                    stroke_width: "1",
                }
                for line in tooltip.lines().iter() {
                    text {
                        key: "{line.id}",
                        id: "{line.id}",
                        x: "5",
                        y: "{line.y}",
                        font_size: "14",
                        "{line.text}"
                    }
                }
            }
        }
    }
}

/// One cell. Props compare by value, so a hover only re-renders the cells
/// whose stroke changed.
#[component]
fn CellRect(index: usize, cell: Cell) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        rect {
            class: "cell",
            x: "{cell.x}",
            y: "{cell.y}",
            width: "{cell.width}",
            height: "{cell.height}",
            fill: "{cell.fill}",
            stroke: cell.stroke.as_ref().map(|s| s.color.clone()),
            stroke_width: cell.stroke.as_ref().map(|s| s.width.to_string()),
            "data-month": cell.data_month().to_string(),
            "data-year": "{cell.record.year}",
            "data-temp": "{cell.temperature}",
            onmouseenter: move |_| {
                log::debug!("pointer entered cell {}", index);
                if let Some(surface) = state.renderer.write().surface_mut() {
                    surface.pointer_enter(index);
                }
            },
            onmouseleave: move |_| {
                if let Some(surface) = state.renderer.write().surface_mut() {
                    surface.pointer_leave(index);
                }
            },
        }
    }
}

/// One axis: domain line, then a tick mark and label per tick.
fn axis_group(axis: &Axis) -> Element {
    let anchor = match axis.orient {
        AxisOrient::Bottom => "middle",
        AxisOrient::Left => "end",
    };

    rsx! {
        g {
            id: axis.id.clone(),
            transform: axis.transform(),
            fill: "none",
            font_size: "10",
            font_family: "sans-serif",
            text_anchor: "{anchor}",
            path {
                class: "domain",
                stroke: "currentColor",
                d: axis.domain_path(),
            }
            for tick in axis.ticks.iter() {
                {tick_group(axis, tick)}
            }
        }
    }
}

fn tick_group(axis: &Axis, tick: &Tick) -> Element {
    let size = Axis::TICK_SIZE;
    let spacing = axis.label_offset();
    match axis.orient {
        AxisOrient::Bottom => rsx! {
            g {
                key: "{tick.value}",
                class: "tick",
                transform: "translate({tick.offset},0)",
                line { stroke: "currentColor", y2: "{size}" }
                text { fill: "currentColor", y: "{spacing}", dy: "0.71em", "{tick.label}" }
            }
        },
        AxisOrient::Left => {
            let (x2, x) = (-size, -spacing);
            rsx! {
                g {
                    key: "{tick.value}",
                    class: "tick",
                    transform: "translate(0,{tick.offset})",
                    line { stroke: "currentColor", x2: "{x2}" }
                    text { fill: "currentColor", x: "{x}", dy: "0.32em", "{tick.label}" }
                }
            }
        }
    }
}
