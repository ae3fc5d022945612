//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use spacex_charts::{DashboardLayout, PayloadRange, SiteSelection, WidgetValues};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Fatal load error, if any
    pub error_msg: Signal<Option<String>>,
    /// Widget tree built from the dataset (None until loaded)
    pub layout: Signal<Option<DashboardLayout>>,
    /// Current site dropdown value
    pub selected_site: Signal<SiteSelection>,
    /// Current payload slider value
    pub payload_range: Signal<PayloadRange>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            layout: Signal::new(None),
            selected_site: Signal::new(SiteSelection::All),
            payload_range: Signal::new(PayloadRange::full()),
        }
    }

    /// Snapshot of all control values without subscribing the caller to them.
    pub fn peek_values(&self) -> WidgetValues {
        WidgetValues {
            site: self.selected_site.peek().clone(),
            payload: *self.payload_range.peek(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
