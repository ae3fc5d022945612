//! Searchable dropdown for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_charts::layout::Dropdown;
use spacex_charts::SiteSelection;

#[derive(Props, Clone, PartialEq)]
pub struct SiteSelectorProps {
    pub dropdown: Dropdown,
}

/// Site dropdown. Writes the chosen value to `AppState::selected_site`.
///
/// When the dropdown is searchable, a text box narrows the listed sites by
/// case-insensitive substring; the "All sites" option and the current
/// selection are always listed.
#[component]
pub fn SiteSelector(props: SiteSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let selected = (state.selected_site)();
    let needle = query().to_lowercase();
    let dom_id = props.dropdown.id.dom_id();

    let options: Vec<_> = props
        .dropdown
        .options
        .iter()
        .enumerate()
        .filter(|(i, option)| {
            *i == 0
                || needle.is_empty()
                || option.value == selected.value()
                || option.label.to_lowercase().contains(&needle)
        })
        .map(|(_, option)| option.clone())
        .collect();

    let on_change = move |evt: Event<FormData>| {
        let selection = SiteSelection::from_value(&evt.value());
        log::info!("Site selection changed to {}", selection);
        state.selected_site.set(selection);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            if props.dropdown.searchable {
                input {
                    r#type: "search",
                    placeholder: "{props.dropdown.placeholder}",
                    value: "{query}",
                    style: "flex: 1;",
                    oninput: move |evt: Event<FormData>| query.set(evt.value()),
                }
            }
            select {
                id: "{dom_id}",
                style: "flex: 2;",
                onchange: on_change,
                for site in options.iter() {
                    option {
                        value: "{site.value}",
                        selected: site.value == selected.value(),
                        "{site.label}"
                    }
                }
            }
        }
    }
}
