use crate::session::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

struct Feature {
    screen: Screen,
    icon: &'static str,
    color: &'static str,
    title_key: &'static str,
    description_key: &'static str,
}

const FEATURES: [Feature; 5] = [
    Feature {
        screen: Screen::Weather,
        icon: "☁️",
        color: "#e3f2fd",
        title_key: "dashboard-weather",
        description_key: "dashboard-weather-desc",
    },
    Feature {
        screen: Screen::CropLibrary,
        icon: "🌾",
        color: "#fff8e1",
        title_key: "dashboard-crop-library",
        description_key: "dashboard-crop-library-desc",
    },
    Feature {
        screen: Screen::Pesticide,
        icon: "🐛",
        color: "#ffebee",
        title_key: "dashboard-pesticides",
        description_key: "dashboard-pesticides-desc",
    },
    Feature {
        screen: Screen::Chemical,
        icon: "🧪",
        color: "#f3e5f5",
        title_key: "dashboard-chemicals",
        description_key: "dashboard-chemicals-desc",
    },
    Feature {
        screen: Screen::ImageAnalysis,
        icon: "📷",
        color: "#e8f5e9",
        title_key: "dashboard-image-analysis",
        description_key: "dashboard-image-analysis-desc",
    },
];

/// (icon, text key, time key)
const RECENT_ACTIVITY: [(&str, &str, &str); 3] = [
    ("☁️", "activity-weather", "activity-weather-time"),
    ("📷", "activity-image", "activity-image-time"),
    ("🌱", "activity-crops", "activity-crops-time"),
];

#[component]
pub fn DashboardScreen(
    user_name: String,
    on_navigate: EventHandler<Screen>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        div { style: "min-height: 100vh; background: linear-gradient(135deg, #f1f8e9, #e3f2fd, #f3e5f5);",

            header { style: "background: rgba(255,255,255,0.85); box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 20px 16px;",
                div { style: "max-width: 1100px; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 12px;",
                    div {
                        h1 { style: "color: #2e7d32; font-size: 28px; margin: 0;", "FarmAI Insights" }
                        p { style: "color: #666; margin: 4px 0 0 0;", {t!("dashboard-title")} }
                    }
                    div { style: "display: flex; align-items: center; gap: 12px;",
                        span { style: "font-size: 14px; font-weight: 600; background: #e8f5e9; padding: 8px 12px; border-radius: 999px;",
                            "👤 "
                            {t!("dashboard-welcome", name: user_name.clone())}
                        }
                        button {
                            class: "btn-secondary",
                            style: "padding: 8px 14px;",
                            onclick: move |_| on_logout.call(()),
                            "⎋ "
                            {t!("action-logout")}
                        }
                    }
                }
            }

            main { style: "max-width: 1100px; margin: 0 auto; padding: 24px 16px;",
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 20px; margin-bottom: 24px;",
                    for feature in FEATURES.iter() {
                        div {
                            key: "{feature.screen.route()}",
                            class: "card feature-card",
                            onclick: {
                                let screen = feature.screen;
                                move |_| on_navigate.call(screen)
                            },
                            div { style: "display: flex; align-items: center; gap: 16px; margin-bottom: 12px;",
                                div { style: "padding: 14px; border-radius: 12px; font-size: 28px; background: {feature.color};",
                                    "{feature.icon}"
                                }
                                h2 { style: "font-size: 20px; margin: 0;", {t!(feature.title_key)} }
                            }
                            p { style: "color: #555; margin: 0;", {t!(feature.description_key)} }
                        }
                    }
                }

                div { class: "card",
                    h2 { style: "font-size: 18px; margin: 0 0 16px 0;", "📈 " {t!("dashboard-recent-activity")} }
                    for (icon, text_key, time_key) in RECENT_ACTIVITY {
                        div {
                            key: "{text_key}",
                            style: "display: flex; align-items: center; gap: 12px; padding: 12px; background: #fafafa; border-radius: 8px; margin-bottom: 8px;",
                            div { style: "font-size: 20px;", "{icon}" }
                            div {
                                p { style: "margin: 0; font-weight: 600; color: #333;", {t!(text_key)} }
                                p { style: "margin: 0; font-size: 13px; color: #777;", {t!(time_key)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
