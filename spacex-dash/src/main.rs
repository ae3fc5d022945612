//! SpaceX Launch Records Dashboard
//!
//! A site dropdown and a payload range slider drive two D3.js charts: a
//! success breakdown pie and a payload/outcome scatter.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/spacex_launch_dash.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: load the dataset once, build the widget layout and the
//!    callback registry. A load error is fatal and replaces the widgets.
//! 4. On a control change: dispatch that control through the registry and
//!    render every returned chart into the container named by its widget id.

use dioxus::prelude::*;
use spacex_chart_ui::components::{
    ChartContainer, DashboardTitle, ErrorDisplay, LoadingSpinner, PayloadRangeSlider,
    SiteSelector,
};
use spacex_chart_ui::js_bridge;
use spacex_chart_ui::state::AppState;
use spacex_charts::{dashboard_callbacks, CallbackRegistry, ChartSpec, DashboardLayout, WidgetId};
use spacex_launch::LaunchDataset;
use std::rc::Rc;

// Embed the launch records at compile time.
const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("spacex-dash-root"))
        .launch(App);
}

/// Draw every (output, spec) pair a dispatch produced.
fn render_outputs(outputs: Vec<(WidgetId, ChartSpec)>) {
    for (output, spec) in outputs {
        log::debug!("Rendering {} ({} chart)", output, spec.title());
        js_bridge::render_chart(output.dom_id(), &spec);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut registry: Signal<Option<Rc<CallbackRegistry>>> = use_signal(|| None);

    // ─── Effect 1: Load dataset and bind callbacks once on mount ───
    use_effect(move || {
        let dataset = match LaunchDataset::from_csv_str(LAUNCH_CSV) {
            Ok(dataset) => Rc::new(dataset),
            Err(e) => {
                log::error!("Failed to load launch records: {}", e);
                state.error_msg.set(Some(e.to_string()));
                state.loading.set(false);
                return;
            }
        };

        let layout = DashboardLayout::build(&dataset);
        match dashboard_callbacks(Rc::clone(&dataset)) {
            Ok(callbacks) => registry.set(Some(Rc::new(callbacks))),
            Err(e) => {
                log::error!("Failed to bind dashboard callbacks: {}", e);
                state.error_msg.set(Some(e.to_string()));
                state.loading.set(false);
                return;
            }
        }

        state.selected_site.set(layout.site_dropdown.default.clone());
        state.payload_range.set(layout.payload_slider.value);
        state.layout.set(Some(layout));
        state.loading.set(false);

        js_bridge::init_charts();
    });

    // ─── Effect 2: Site dropdown changed ───
    // Subscribes to the site only; the payload range is peeked.
    use_effect(move || {
        let site = (state.selected_site)();
        if (state.loading)() || state.error_msg.peek().is_some() {
            return;
        }
        let Some(callbacks) = registry.read().clone() else {
            return;
        };
        let mut values = state.peek_values();
        values.site = site;
        render_outputs(callbacks.dispatch(WidgetId::SiteDropdown, &values));
    });

    // ─── Effect 3: Payload slider changed ───
    use_effect(move || {
        let payload = (state.payload_range)();
        if (state.loading)() || state.error_msg.peek().is_some() {
            return;
        }
        let Some(callbacks) = registry.read().clone() else {
            return;
        };
        let mut values = state.peek_values();
        values.payload = payload;
        render_outputs(callbacks.dispatch(WidgetId::PayloadSlider, &values));
    });

    let layout = (state.layout)();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(layout) = layout {
                DashboardTitle { title: layout.title.clone() }

                SiteSelector { dropdown: layout.site_dropdown.clone() }
                br {}

                ChartContainer { slot: layout.pie_chart, min_height: 400 }
                br {}

                PayloadRangeSlider { slider: layout.payload_slider.clone() }

                ChartContainer { slot: layout.scatter_chart, min_height: 360 }
            }
        }
    }
}
