//! Shared Dioxus components and D3.js bridge for the SpaceX launch dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand a `ChartSpec` to D3.js via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for the dashboard widgets

pub mod js_bridge;
pub mod state;
pub mod components;
