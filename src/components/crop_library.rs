use crate::components::navigation::{LoadingCard, ScreenHeader};
use crate::i18n::Language;
use crate::models::{Crop, CropCategory};
use crate::services;
use dioxus::prelude::*;
use dioxus_i18n::t;

fn filter_style(active: bool) -> &'static str {
    if active {
        "padding: 8px 14px; border: none; border-radius: 999px; cursor: pointer; font-size: 13px; background: #f9a825; color: #ffffff;"
    } else {
        "padding: 8px 14px; border: none; border-radius: 999px; cursor: pointer; font-size: 13px; background: #f0f0f0; color: #333;"
    }
}

#[component]
pub fn CropLibraryScreen(language: Language, on_back: EventHandler<()>) -> Element {
    let mut search = use_signal(String::new);
    // None shows every category
    let mut category = use_signal(|| None::<CropCategory>);
    let crops = use_resource(services::load_crops);
    let placeholder = format!("🔍 {}", t!("crops-search-placeholder"));

    rsx! {
        div { style: "min-height: 100vh; padding: 16px; background: linear-gradient(135deg, #fffde7, #e8f5e9);",
            div { style: "max-width: 1200px; margin: 0 auto;",
                ScreenHeader {
                    title: t!("crops-title"),
                    subtitle: t!("crops-subtitle"),
                    accent: "#f57f17",
                    on_back: move |_| on_back.call(()),
                }

                div { class: "card", style: "margin-bottom: 20px; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
                    input {
                        r#type: "search",
                        class: "input",
                        style: "flex: 1; min-width: 220px;",
                        placeholder: placeholder,
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                    div { style: "display: flex; flex-wrap: wrap; gap: 6px;",
                        button {
                            style: filter_style(category().is_none()),
                            onclick: move |_| category.set(None),
                            {t!("crops-all")}
                        }
                        for c in CropCategory::ALL {
                            button {
                                key: "{c.message_key()}",
                                style: filter_style(category() == Some(c)),
                                onclick: move |_| category.set(Some(c)),
                                {t!(c.message_key())}
                            }
                        }
                    }
                }

                match &*crops.read() {
                    None => rsx! {
                        LoadingCard { message: t!("crops-loading") }
                    },
                    Some(all) => {
                        let found = services::filter_crops(all, &search(), category());
                        if found.is_empty() {
                            rsx! {
                                div { class: "card", style: "text-align: center; padding: 48px 16px; color: #777;",
                                    div { style: "font-size: 40px;", "🌾" }
                                    p { {t!("crops-empty")} }
                                }
                            }
                        } else {
                            rsx! {
                                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 20px;",
                                    for crop in found {
                                        CropCard { key: "{crop.id}", crop: crop.clone(), language }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CropCard(crop: Crop, language: Language) -> Element {
    let facts = [
        ("📅", t!("crops-season"), crop.season.clone()),
        ("💧", t!("crops-water"), crop.water_requirement.clone()),
        ("🪨", t!("crops-soil"), crop.soil_type.clone()),
        ("💰", t!("crops-market-price"), crop.market_price.clone()),
        (
            "📈",
            t!("crops-yield"),
            format!("{} {}", crop.yield_potential, t!("crops-per-acre")),
        ),
        (
            "⏱️",
            t!("crops-duration"),
            t!("crops-days", days: crop.growth_duration_days),
        ),
        ("🌡️", t!("crops-climate"), crop.climate.clone()),
    ];

    rsx! {
        div { class: "card",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h2 { style: "font-size: 20px; margin: 0;", "{crop.name.get(language)}" }
                span { class: "badge", {t!(crop.category.message_key())} }
            }
            p { style: "color: #555; font-size: 14px; margin: 0 0 16px 0;", "{crop.description.get(language)}" }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 10px; font-size: 13px;",
                for (icon, label, value) in facts {
                    div { key: "{label}",
                        div { style: "font-weight: 600;", "{icon} {label}" }
                        div { style: "color: #666;", "{value}" }
                    }
                }
            }
        }
    }
}
