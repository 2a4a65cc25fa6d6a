//! Shared Dioxus components and D3.js bridge for the RDT dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `fetch`: the URL-keyed fetch cache for the JSON/GeoJSON data sources
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (filter panel, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
