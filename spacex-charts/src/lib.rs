//! Reactive layer for the SpaceX launch dashboard.
//!
//! Every chart is a pure function of the immutable [`LaunchDataset`] and the
//! current widget values:
//!
//! - [`update::success_pie_chart`]: site selector -> success breakdown pie
//! - [`update::payload_scatter_chart`]: site selector + payload slider ->
//!   payload/outcome scatter
//!
//! The functions are bound to widgets through an explicit dispatch table,
//! [`callbacks::CallbackRegistry`], and the static widget tree is described by
//! [`layout::DashboardLayout`]. Nothing here touches the DOM, so the whole
//! crate is exercised natively by `cargo test`.
//!
//! [`LaunchDataset`]: spacex_launch::LaunchDataset

pub mod callbacks;
pub mod chart;
pub mod layout;
pub mod payload;
pub mod selection;
pub mod update;

pub use callbacks::{dashboard_callbacks, BindingError, CallbackRegistry, WidgetId, WidgetValues};
pub use chart::{ChartKind, ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint};
pub use layout::DashboardLayout;
pub use payload::PayloadRange;
pub use selection::{site_options, SiteOption, SiteSelection};
pub use update::{payload_scatter_chart, success_pie_chart};
