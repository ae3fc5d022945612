//! Explicit dispatch table binding widget-value changes to chart updates.
//!
//! Each callback declares the control widgets it reads and the single chart
//! widget it replaces. The host runtime reports which control changed and
//! hands over the current values of all controls; the registry runs every
//! callback listening to that control and returns the fresh chart specs.
//!
//! Update closures capture the dataset when they are registered, so the
//! registry holds no mutable state after construction.

use crate::chart::ChartSpec;
use crate::payload::PayloadRange;
use crate::selection::SiteSelection;
use crate::update::{payload_scatter_chart, success_pie_chart};
use spacex_launch::LaunchDataset;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Widgets on the dashboard. The DOM id doubles as the binding key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    SiteDropdown,
    PayloadSlider,
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl WidgetId {
    pub const fn dom_id(self) -> &'static str {
        match self {
            WidgetId::SiteDropdown => "site-dropdown",
            WidgetId::PayloadSlider => "payload-slider",
            WidgetId::SuccessPieChart => "success-pie-chart",
            WidgetId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }

    /// Controls produce values; everything else displays a chart.
    pub fn is_control(self) -> bool {
        matches!(self, WidgetId::SiteDropdown | WidgetId::PayloadSlider)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Current values of every control widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetValues {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BindingError {
    #[error("output {0} is already bound to a callback")]
    DuplicateOutput(WidgetId),

    #[error("callback for {0} declares no inputs")]
    NoInputs(WidgetId),

    #[error("{0} is not an input control")]
    NotAnInput(WidgetId),

    #[error("{0} is not a chart output")]
    NotAnOutput(WidgetId),
}

type UpdateFn = Box<dyn Fn(&WidgetValues) -> ChartSpec>;

struct Callback {
    output: WidgetId,
    inputs: Vec<WidgetId>,
    update: UpdateFn,
}

/// Ordered set of (inputs -> output) bindings.
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `update` to `output`, to be re-run whenever any of `inputs` changes.
    pub fn register<F>(
        &mut self,
        output: WidgetId,
        inputs: &[WidgetId],
        update: F,
    ) -> Result<(), BindingError>
    where
        F: Fn(&WidgetValues) -> ChartSpec + 'static,
    {
        if output.is_control() {
            return Err(BindingError::NotAnOutput(output));
        }
        if inputs.is_empty() {
            return Err(BindingError::NoInputs(output));
        }
        if let Some(bad) = inputs.iter().find(|id| !id.is_control()) {
            return Err(BindingError::NotAnInput(*bad));
        }
        if self.callbacks.iter().any(|cb| cb.output == output) {
            return Err(BindingError::DuplicateOutput(output));
        }

        log::debug!("Registered callback {:?} -> {}", inputs, output);
        self.callbacks.push(Callback {
            output,
            inputs: inputs.to_vec(),
            update: Box::new(update),
        });
        Ok(())
    }

    /// Outputs affected by a change to `changed`, in registration order.
    pub fn outputs_for(&self, changed: WidgetId) -> Vec<WidgetId> {
        self.callbacks
            .iter()
            .filter(|cb| cb.inputs.contains(&changed))
            .map(|cb| cb.output)
            .collect()
    }

    /// Run every callback listening to `changed` against `values`.
    pub fn dispatch(&self, changed: WidgetId, values: &WidgetValues) -> Vec<(WidgetId, ChartSpec)> {
        let results: Vec<(WidgetId, ChartSpec)> = self
            .callbacks
            .iter()
            .filter(|cb| cb.inputs.contains(&changed))
            .map(|cb| (cb.output, (cb.update)(values)))
            .collect();
        log::info!("Dispatched {} change to {} callback(s)", changed, results.len());
        results
    }

    /// Run every callback once, as on first page load.
    pub fn initial(&self, values: &WidgetValues) -> Vec<(WidgetId, ChartSpec)> {
        self.callbacks
            .iter()
            .map(|cb| (cb.output, (cb.update)(values)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// The dashboard's two bindings, each capturing the shared dataset.
pub fn dashboard_callbacks(dataset: Rc<LaunchDataset>) -> Result<CallbackRegistry, BindingError> {
    let mut registry = CallbackRegistry::new();

    let pie_data = Rc::clone(&dataset);
    registry.register(WidgetId::SuccessPieChart, &[WidgetId::SiteDropdown], move |values| {
        success_pie_chart(&pie_data, &values.site)
    })?;

    let scatter_data = Rc::clone(&dataset);
    registry.register(
        WidgetId::SuccessPayloadScatterChart,
        &[WidgetId::SiteDropdown, WidgetId::PayloadSlider],
        move |values| payload_scatter_chart(&scatter_data, &values.site, &values.payload),
    )?;

    Ok(registry)
}
