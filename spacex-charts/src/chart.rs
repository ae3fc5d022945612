//! Declarative chart descriptions handed to the rendering layer.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend. A `ChartSpec` is rebuilt from scratch on
//! every input change and never cached.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Scatter,
}

/// One chart, tagged by kind in its JSON form (`{"kind": "pie", ...}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Name of the dimension points are coloured by
    pub color_by: String,
    /// Distinct colour groups, in first-seen order
    pub groups: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Payload mass (kg)
    pub x: f64,
    /// Outcome class (0 or 1)
    pub y: u8,
    pub group: String,
    pub flight_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Pie(_) => ChartKind::Pie,
            ChartSpec::Scatter(_) => ChartKind::Scatter,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    /// True when there is nothing to draw (no slices / no points).
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(pie) => pie.slices.is_empty(),
            ChartSpec::Scatter(scatter) => scatter.points.is_empty(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
