use crate::components::form_fields::LabeledSelect;
use crate::components::navigation::{LoadingCard, ScreenHeader};
use crate::config::AppConfig;
use crate::models::options;
use crate::models::{PesticideKind, PesticideRecommendation};
use crate::services::{self, Lookup, PesticideForm};
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn PesticideScreen(on_back: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let mut form = use_signal(PesticideForm::default);
    let mut lookup = use_signal(|| Lookup::<Vec<PesticideRecommendation>>::Idle);

    let submit = move |_| {
        let Ok(request) = form.read().request() else {
            return;
        };
        lookup.set(Lookup::Loading);
        let delay = config.delays.pesticide();
        spawn(async move {
            let recommendations = services::fetch_pesticides(&request, delay).await;
            lookup.set(Lookup::Ready(recommendations));
        });
    };

    let current = form.read().clone();
    let can_submit = current.is_complete() && !lookup.read().is_loading();

    rsx! {
        div { style: "min-height: 100vh; padding: 16px; background: linear-gradient(135deg, #ffebee, #e8f5e9);",
            div { style: "max-width: 1100px; margin: 0 auto;",
                ScreenHeader {
                    title: t!("pesticide-title"),
                    subtitle: t!("pesticide-subtitle"),
                    accent: "#c62828",
                    on_back: move |_| on_back.call(()),
                }

                div { class: "card", style: "margin-bottom: 20px;",
                    h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "🐛 " {t!("pesticide-form-title")} }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; margin-bottom: 16px;",
                        LabeledSelect {
                            label: t!("pesticide-crop"),
                            placeholder: t!("pesticide-select-crop"),
                            options: options::PESTICIDE_CROPS,
                            value: current.crop.clone(),
                            on_change: move |v| form.write().crop = v,
                        }
                        LabeledSelect {
                            label: t!("pesticide-pest"),
                            placeholder: t!("pesticide-select-pest"),
                            options: options::PESTS,
                            value: current.pest.clone(),
                            on_change: move |v| form.write().pest = v,
                        }
                        LabeledSelect {
                            label: t!("pesticide-severity"),
                            placeholder: t!("pesticide-select-severity"),
                            options: options::SEVERITIES,
                            value: current.severity.clone(),
                            on_change: move |v| form.write().severity = v,
                        }
                    }
                    button {
                        class: "btn-danger",
                        style: "width: 100%; padding: 12px;",
                        disabled: !can_submit,
                        onclick: submit,
                        {t!("pesticide-get-recommendations")}
                    }
                }

                match &*lookup.read() {
                    Lookup::Idle => rsx! {},
                    Lookup::Loading => rsx! {
                        LoadingCard { message: t!("pesticide-loading") }
                    },
                    Lookup::Ready(recommendations) => rsx! {
                        h2 { style: "font-size: 20px; margin: 0 0 12px 0;", {t!("pesticide-recommendations")} }
                        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 20px;",
                            for rec in recommendations.iter() {
                                RecommendationCard { key: "{rec.name}", rec: rec.clone() }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn RecommendationCard(rec: PesticideRecommendation) -> Element {
    let kind_style = match rec.kind {
        PesticideKind::Organic => "background: #e8f5e9; color: #2e7d32;",
        PesticideKind::Chemical => "background: #e3f2fd; color: #1565c0;",
    };

    rsx! {
        div { class: "card",
            div { style: "display: flex; justify-content: space-between; align-items: start; gap: 8px; margin-bottom: 8px;",
                h3 { style: "font-size: 18px; margin: 0;", "{rec.name}" }
                span { class: "badge", style: "{kind_style}", {t!(rec.kind.message_key())} }
            }
            p { style: "font-size: 13px; color: #666; margin: 0 0 12px 0;", "{rec.active_ingredient}" }

            div { style: "display: flex; justify-content: space-between; font-size: 14px;",
                span { {t!("pesticide-effectiveness")} }
                span { style: "font-weight: 600;", "{rec.effectiveness}%" }
            }
            div { class: "progress", style: "margin-bottom: 12px;",
                div { class: "progress-bar", style: "width: {rec.effectiveness}%;" }
            }

            div { style: "font-size: 14px; margin-bottom: 12px;",
                span { {t!("pesticide-cost")} ": " }
                span { class: "badge", {t!(rec.cost.message_key())} }
            }

            div { style: "font-size: 14px; line-height: 1.6;",
                p { style: "margin: 0;", "💧 " strong { {t!("pesticide-dosage")} } ": {rec.dosage}" }
                p { style: "margin: 0;", "🌿 " strong { {t!("pesticide-application")} } ": {rec.application_method}" }
                p { style: "margin: 0;", "🕒 " strong { {t!("pesticide-timing")} } ": {rec.timing}" }
            }

            div { style: "margin-top: 12px; padding: 10px; background: #fff8e1; border-radius: 8px;",
                p { style: "font-weight: 600; font-size: 14px; margin: 0 0 6px 0;", "⚠️ " {t!("pesticide-precautions")} }
                for precaution in rec.precautions.iter() {
                    p { key: "{precaution}", style: "font-size: 13px; margin: 0;", "• {precaution}" }
                }
            }
        }
    }
}
