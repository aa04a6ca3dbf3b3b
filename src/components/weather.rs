use crate::components::form_fields::LabeledSelect;
use crate::components::navigation::{LoadingCard, ScreenHeader};
use crate::config::AppConfig;
use crate::models::options::{self, SelectOption};
use crate::models::WeatherData;
use crate::services::{self, Lookup, WeatherForm};
use dioxus::prelude::*;
use dioxus_i18n::t;

const ACCENT: &str = "#1565c0";

#[component]
pub fn WeatherScreen(on_back: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let mut form = use_signal(WeatherForm::default);
    let mut lookup = use_signal(|| Lookup::<(String, WeatherData)>::Idle);

    let submit = move |_| {
        let Ok(request) = form.read().request() else {
            return;
        };
        lookup.set(Lookup::Loading);
        let delay = config.delays.weather();
        spawn(async move {
            let data = services::fetch_weather(&request, delay).await;
            lookup.set(Lookup::Ready((request.location_label(), data)));
        });
    };

    let state = form.read().state.clone();
    let city = form.read().city.clone();
    let cities: &'static [SelectOption] = options::cities_for(&state);
    let can_submit = form.read().is_complete() && !lookup.read().is_loading();

    rsx! {
        div { style: "min-height: 100vh; padding: 16px; background: linear-gradient(135deg, #e3f2fd, #e8f5e9);",
            div { style: "max-width: 1100px; margin: 0 auto;",
                ScreenHeader {
                    title: t!("weather-title"),
                    subtitle: t!("weather-subtitle"),
                    accent: ACCENT,
                    on_back: move |_| on_back.call(()),
                }

                div { class: "card", style: "margin-bottom: 20px;",
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; align-items: end;",
                        LabeledSelect {
                            label: t!("weather-state"),
                            placeholder: t!("weather-select-state"),
                            options: options::STATES,
                            value: state,
                            on_change: move |v: String| form.write().set_state(&v),
                        }
                        LabeledSelect {
                            label: t!("weather-city"),
                            placeholder: t!("weather-select-city"),
                            options: cities,
                            value: city,
                            disabled: cities.is_empty(),
                            on_change: move |v| form.write().city = v,
                        }
                        button {
                            class: "btn-primary",
                            style: "padding: 12px;",
                            disabled: !can_submit,
                            onclick: submit,
                            "🌤️ "
                            {t!("weather-get-forecast")}
                        }
                    }
                }

                match &*lookup.read() {
                    Lookup::Idle => rsx! {},
                    Lookup::Loading => rsx! {
                        LoadingCard { message: t!("weather-loading") }
                    },
                    Lookup::Ready((location, data)) => rsx! {
                        WeatherReport { location: location.clone(), data: data.clone() }
                    },
                }
            }
        }
    }
}

#[component]
fn WeatherReport(location: String, data: WeatherData) -> Element {
    let current = &data.current;

    rsx! {
        div { class: "card", style: "margin-bottom: 20px;",
            h2 { style: "font-size: 18px; margin: 0 0 4px 0;", {t!("weather-current")} }
            p { style: "color: #666; margin: 0 0 16px 0;", "📍 {location}" }
            div { style: "display: flex; align-items: center; gap: 16px; margin-bottom: 16px;",
                span { style: "font-size: 48px;", "{current.sky.icon()}" }
                div {
                    div { style: "font-size: 36px; font-weight: 700;", "{current.temperature_c}°C" }
                    div { style: "color: #555;", "{current.condition}" }
                }
            }
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 12px;",
                Metric { icon: "💧", label: t!("weather-humidity"), value: format!("{}%", current.humidity_pct) }
                Metric { icon: "💨", label: t!("weather-wind"), value: format!("{} km/h", current.wind_kmh) }
                Metric { icon: "👁️", label: t!("weather-visibility"), value: format!("{} km", current.visibility_km) }
                Metric { icon: "🌧️", label: t!("weather-rainfall"), value: format!("{} mm", current.rainfall_mm) }
            }
        }

        div { class: "card", style: "margin-bottom: 20px;",
            h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "📅 " {t!("weather-forecast")} }
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); gap: 12px;",
                for (i, day) in data.forecast.iter().enumerate() {
                    div {
                        key: "{day.date}",
                        style: "text-align: center; padding: 12px; background: #f5f9ff; border-radius: 8px;",
                        div { style: "font-weight: 600; font-size: 14px;",
                            if i == 0 {
                                {t!("weather-tomorrow")}
                            } else {
                                "{day.date.format(\"%A\")}"
                            }
                        }
                        div { style: "font-size: 12px; color: #777;", "{day.date.format(\"%d %b\")}" }
                        div { style: "font-size: 28px; margin: 6px 0;", "{day.sky.icon()}" }
                        div { style: "font-size: 14px;", "{day.high_c}° / {day.low_c}°" }
                        div { style: "font-size: 12px; color: #555;", "{day.condition}" }
                        if day.rainfall_mm > 0.0 {
                            div { style: "font-size: 12px; color: #1565c0;", "🌧️ {day.rainfall_mm} mm" }
                        }
                    }
                }
            }
        }

        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 20px; margin-bottom: 20px;",
            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "🌱 " {t!("weather-crop-conditions")} }
                for crop in data.crop_conditions.iter() {
                    div { key: "{crop.crop}", style: "margin-bottom: 14px;",
                        div { style: "display: flex; justify-content: space-between; font-weight: 600;",
                            span { "{crop.crop}" }
                            span { {t!(crop.status.message_key())} " · {crop.score}%" }
                        }
                        div { class: "progress",
                            div { class: "progress-bar", style: "width: {crop.score}%;" }
                        }
                        p { style: "font-size: 13px; color: #666; margin: 4px 0 0 0;", "{crop.advice}" }
                    }
                }
            }

            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "💡 " {t!("weather-farming-tips")} }
                for tip in data.farming_tips.iter() {
                    p { key: "{tip}", style: "margin: 0 0 10px 0; font-size: 14px;", "✅ {tip}" }
                }
            }
        }

        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px;",
            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "⚠️ " {t!("weather-alerts")} }
                for alert in data.alerts.iter() {
                    div { key: "{alert.kind}", style: "padding: 10px; background: #fff8e1; border-radius: 8px; margin-bottom: 8px;",
                        div { style: "font-weight: 600;",
                            "{alert.sky.icon()} {alert.kind} · "
                            {t!(alert.severity.message_key())}
                        }
                        p { style: "font-size: 13px; margin: 4px 0 0 0;", "{alert.message}" }
                    }
                }
            }

            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "💧 " {t!("weather-irrigation")} }
                p { style: "font-weight: 600; margin: 0 0 8px 0;", "{data.irrigation.recommendation}" }
                p { style: "font-size: 14px; margin: 0 0 4px 0;", "{data.irrigation.water_needed}" }
                p { style: "font-size: 14px; color: #666; margin: 0;", "{data.irrigation.timing}" }
            }

            div { class: "card",
                h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "🛡️ " {t!("weather-pest-risk")} }
                p { style: "font-weight: 600; margin: 0 0 8px 0;", {t!(data.pest_risk.level.message_key())} }
                p { style: "font-size: 14px; margin: 0 0 4px 0;", "{data.pest_risk.crops.join(\", \")}" }
                p { style: "font-size: 14px; color: #666; margin: 0;", "{data.pest_risk.prevention}" }
            }
        }
    }
}

#[component]
fn Metric(icon: &'static str, label: String, value: String) -> Element {
    rsx! {
        div { style: "padding: 12px; background: #f5f5f5; border-radius: 8px;",
            div { style: "font-size: 13px; color: #666;", "{icon} {label}" }
            div { style: "font-size: 18px; font-weight: 600;", "{value}" }
        }
    }
}
