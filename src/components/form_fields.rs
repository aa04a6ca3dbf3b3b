use crate::models::SelectOption;
use dioxus::prelude::*;

pub const LABEL_STYLE: &str =
    "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;";

/// Dropdown over a fixed option list, with an empty placeholder entry first
#[component]
pub fn LabeledSelect(
    label: String,
    placeholder: String,
    options: &'static [SelectOption],
    value: String,
    #[props(default)] disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { style: LABEL_STYLE, "{label}" }
            select {
                class: "input",
                value: "{value}",
                disabled,
                onchange: move |e| on_change.call(e.value()),
                option { value: "", "{placeholder}" }
                for o in options.iter() {
                    option { key: "{o.value}", value: "{o.value}", "{o.label}" }
                }
            }
        }
    }
}
