//! Static widget tree for the dashboard, parameterized by the dataset.
//!
//! The UI crate renders exactly what is described here; keeping the
//! description plain data lets it be checked without a browser.

use crate::callbacks::WidgetId;
use crate::payload::{self, PayloadRange, PAYLOAD_DOMAIN_MAX, PAYLOAD_DOMAIN_MIN, PAYLOAD_STEP};
use crate::selection::{site_options, SiteOption, SiteSelection};
use spacex_launch::LaunchDataset;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub id: WidgetId,
    pub options: Vec<SiteOption>,
    pub default: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    pub id: WidgetId,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<(f64, String)>,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSlot {
    pub id: WidgetId,
}

/// Top-to-bottom: title, site dropdown, pie chart, payload slider, scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub pie_chart: GraphSlot,
    pub payload_slider: RangeSlider,
    pub scatter_chart: GraphSlot,
}

impl DashboardLayout {
    pub fn build(dataset: &LaunchDataset) -> Self {
        Self {
            title: DASHBOARD_TITLE.to_string(),
            site_dropdown: Dropdown {
                id: WidgetId::SiteDropdown,
                options: site_options(dataset),
                default: SiteSelection::All,
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            pie_chart: GraphSlot {
                id: WidgetId::SuccessPieChart,
            },
            payload_slider: RangeSlider {
                id: WidgetId::PayloadSlider,
                label: "Payload range (Kg):".to_string(),
                min: PAYLOAD_DOMAIN_MIN,
                max: PAYLOAD_DOMAIN_MAX,
                step: PAYLOAD_STEP,
                marks: payload::slider_marks(),
                value: PayloadRange::from_dataset(dataset),
            },
            scatter_chart: GraphSlot {
                id: WidgetId::SuccessPayloadScatterChart,
            },
        }
    }
}
