//! Payload range slider built from two native range inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_charts::layout::RangeSlider;
use spacex_charts::PayloadRange;

#[derive(Props, Clone, PartialEq)]
pub struct PayloadRangeSliderProps {
    pub slider: RangeSlider,
}

/// Low/high handles sharing one domain and step. Crossed handles are
/// normalised by `PayloadRange::new`, so the stored range is always ordered.
#[component]
pub fn PayloadRangeSlider(props: PayloadRangeSliderProps) -> Element {
    let mut state = use_context::<AppState>();
    let range = (state.payload_range)();
    let (low, high) = (range.low(), range.high());
    let slider = props.slider;
    let dom_id = slider.id.dom_id();
    let marks_id = format!("{}-marks", dom_id);

    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let current = *state.payload_range.peek();
            state.payload_range.set(PayloadRange::new(value, current.high()));
        }
    };

    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let current = *state.payload_range.peek();
            state.payload_range.set(PayloadRange::new(current.low(), value));
        }
    };

    rsx! {
        div {
            id: "{dom_id}",
            style: "margin: 12px 0;",
            p {
                style: "margin: 0 0 4px 0;",
                "{slider.label} {low} - {high}"
            }
            datalist {
                id: "{marks_id}",
                for (value, label) in slider.marks.iter() {
                    option { value: "{value}", label: "{label}" }
                }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold;",
                    "Min: "
                    input {
                        r#type: "range",
                        min: "{slider.min}",
                        max: "{slider.max}",
                        step: "{slider.step}",
                        list: "{marks_id}",
                        value: "{low}",
                        onchange: on_low_change,
                    }
                }
                label {
                    style: "font-weight: bold;",
                    "Max: "
                    input {
                        r#type: "range",
                        min: "{slider.min}",
                        max: "{slider.max}",
                        step: "{slider.step}",
                        list: "{marks_id}",
                        value: "{high}",
                        onchange: on_high_change,
                    }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                for (_, label) in slider.marks.iter() {
                    span { "{label}" }
                }
            }
        }
    }
}
