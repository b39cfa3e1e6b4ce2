//! Dioxus components and Leaflet bridge for the ocean hazard dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet hazard map via `js_sys::eval()`
//! - `state`: `AppState` holding the view state in a Dioxus Signal
//! - `actions`: spawns controller operations from event handlers
//! - `components`: the RSX building blocks (selector, banner, cards, map, report form)

pub mod actions;
pub mod components;
pub mod js_bridge;
pub mod state;
