use crate::components::form_fields::{LabeledSelect, LABEL_STYLE};
use crate::components::navigation::{LoadingCard, ScreenHeader};
use crate::config::AppConfig;
use crate::models::options;
use crate::models::{ChemicalRecommendation, NutrientLevel};
use crate::services::{self, ChemicalForm, Lookup};
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn ChemicalScreen(on_back: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let mut form = use_signal(ChemicalForm::default);
    let mut lookup = use_signal(|| Lookup::<ChemicalRecommendation>::Idle);

    let submit = move |_| {
        let Ok(request) = form.read().request() else {
            return;
        };
        lookup.set(Lookup::Loading);
        let delay = config.delays.chemical();
        spawn(async move {
            let plan = services::fetch_chemicals(&request, delay).await;
            lookup.set(Lookup::Ready(plan));
        });
    };

    let current = form.read().clone();
    let can_submit = current.is_complete() && !lookup.read().is_loading();

    rsx! {
        div { style: "min-height: 100vh; padding: 16px; background: linear-gradient(135deg, #f3e5f5, #e8f5e9);",
            div { style: "max-width: 1100px; margin: 0 auto;",
                ScreenHeader {
                    title: t!("chemical-title"),
                    subtitle: t!("chemical-subtitle"),
                    accent: "#6a1b9a",
                    on_back: move |_| on_back.call(()),
                }

                div { class: "card", style: "margin-bottom: 20px;",
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; margin-bottom: 16px;",
                        LabeledSelect {
                            label: t!("chemical-crop"),
                            placeholder: t!("chemical-select-crop"),
                            options: options::CHEMICAL_CROPS,
                            value: current.crop.clone(),
                            on_change: move |v| form.write().crop = v,
                        }
                        LabeledSelect {
                            label: t!("chemical-soil"),
                            placeholder: t!("chemical-select-soil"),
                            options: options::SOILS,
                            value: current.soil.clone(),
                            on_change: move |v| form.write().soil = v,
                        }
                        LabeledSelect {
                            label: t!("chemical-stage"),
                            placeholder: t!("chemical-select-stage"),
                            options: options::GROWTH_STAGES,
                            value: current.stage.clone(),
                            on_change: move |v| form.write().stage = v,
                        }
                        div {
                            label { style: LABEL_STYLE, {t!("chemical-field-size")} }
                            input {
                                r#type: "number",
                                class: "input",
                                min: "0",
                                step: "0.1",
                                placeholder: "2.5",
                                value: "{current.field_size}",
                                oninput: move |e| form.write().field_size = e.value(),
                            }
                        }
                    }
                    button {
                        class: "btn-primary",
                        style: "width: 100%; padding: 12px; background: #6a1b9a;",
                        disabled: !can_submit,
                        onclick: submit,
                        "🧪 "
                        {t!("chemical-get-analysis")}
                    }
                }

                match &*lookup.read() {
                    Lookup::Idle => rsx! {},
                    Lookup::Loading => rsx! {
                        LoadingCard { message: t!("chemical-loading") }
                    },
                    Lookup::Ready(plan) => rsx! {
                        ChemicalReport { plan: plan.clone() }
                    },
                }
            }
        }
    }
}

#[component]
fn NutrientBar(label: String, nutrient: NutrientLevel) -> Element {
    let color = nutrient.status.color();
    rsx! {
        div { style: "margin-bottom: 14px;",
            div { style: "display: flex; justify-content: space-between; font-size: 14px;",
                span { style: "font-weight: 600;", "{label}" }
                span { style: "color: {color};",
                    "{nutrient.level}% · "
                    {t!(nutrient.status.message_key())}
                }
            }
            div { class: "progress",
                div { class: "progress-bar", style: "width: {nutrient.level}%; background: {color};" }
            }
        }
    }
}

#[component]
fn ChemicalReport(plan: ChemicalRecommendation) -> Element {
    rsx! {
        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 20px; margin-bottom: 20px;",
            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", {t!("chemical-npk")} }
                NutrientBar { label: t!("chemical-nitrogen"), nutrient: plan.npk.nitrogen }
                NutrientBar { label: t!("chemical-phosphorus"), nutrient: plan.npk.phosphorus }
                NutrientBar { label: t!("chemical-potassium"), nutrient: plan.npk.potassium }
            }

            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", {t!("chemical-micronutrients")} }
                for m in plan.micronutrients.iter() {
                    div { key: "{m.name}", style: "padding: 10px; background: #fafafa; border-radius: 8px; margin-bottom: 8px;",
                        div { style: "display: flex; justify-content: space-between; font-weight: 600; font-size: 14px;",
                            span { "{m.name}" }
                            span { style: "color: {m.status.color()};", {t!(m.status.message_key())} }
                        }
                        p { style: "font-size: 13px; color: #666; margin: 4px 0 0 0;", "{m.recommendation}" }
                    }
                }
            }
        }

        div { class: "card", style: "margin-bottom: 20px;",
            h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "📅 " {t!("chemical-schedule")} }
            for step in plan.schedule.iter() {
                div { key: "{step.week}", style: "display: flex; gap: 16px; align-items: center; padding: 10px 0; border-bottom: 1px solid #eee;",
                    div { class: "badge", style: "min-width: 80px; text-align: center;",
                        {t!("chemical-week", week: step.week)}
                    }
                    div { style: "flex: 1;",
                        div { style: "font-weight: 600;", "{step.fertilizer}" }
                        div { style: "font-size: 13px; color: #666;", "{step.method}" }
                    }
                    div { style: "font-size: 14px;", "{step.quantity}" }
                }
            }
        }

        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 20px;",
            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "💰 " {t!("chemical-cost")} }
                for entry in plan.cost.breakdown.iter() {
                    div { key: "{entry.item}", style: "display: flex; justify-content: space-between; font-size: 14px; padding: 4px 0;",
                        span { "{entry.item}" }
                        span { "₹{entry.cost}" }
                    }
                }
                div { style: "display: flex; justify-content: space-between; font-weight: 700; border-top: 1px solid #ddd; margin-top: 8px; padding-top: 8px;",
                    span { {t!("chemical-total")} }
                    span { "₹{plan.cost.total}" }
                }
            }

            div { class: "card", style: "text-align: center;",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "📈 " {t!("chemical-expected-yield")} }
                div { style: "font-size: 40px; font-weight: 700; color: #2e7d32;", "+{plan.expected_yield_increase}%" }
            }
        }
    }
}
