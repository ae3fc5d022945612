//! Graph slot that D3.js renders a chart into.

use dioxus::prelude::*;
use spacex_charts::layout::GraphSlot;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Layout slot; its widget id becomes the DOM id D3 renders into
    pub slot: GraphSlot,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// An empty div reserved for one chart. The chart itself is drawn by
/// `js_bridge::render_chart` after every dispatch.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let dom_id = props.slot.id.dom_id();
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin: 8px 0;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{dom_id}",
                style: "width: 100%;",
            }
        }
    }
}
