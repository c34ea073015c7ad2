//! Shared Dioxus state and components for the temperature heat map.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components, including `HeatMapSvg`, which
//!   draws the renderer's surface as SVG and forwards hover events to it

pub mod state;
pub mod components;
