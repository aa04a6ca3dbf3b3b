use dioxus::prelude::*;
use dioxus_i18n::t;

/// Title bar of every feature screen, with the way back to the dashboard
#[component]
pub fn ScreenHeader(
    title: String,
    subtitle: String,
    accent: &'static str,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div { style: "display: flex; align-items: center; gap: 16px; margin-bottom: 24px; flex-wrap: wrap;",
            button {
                class: "btn-secondary",
                style: "padding: 8px 16px;",
                onclick: move |_| on_back.call(()),
                "← "
                {t!("action-back")}
            }
            div {
                h1 { style: "color: {accent}; font-size: 24px; font-weight: 700; margin: 0;",
                    "{title}"
                }
                p { style: "color: #666; margin: 4px 0 0 0; font-size: 14px;", "{subtitle}" }
            }
        }
    }
}

/// Centered spinner with a caption
#[component]
pub fn LoadingCard(message: String) -> Element {
    rsx! {
        div { class: "card", style: "text-align: center; padding: 48px 16px;",
            div { class: "spinner" }
            p { style: "color: #666; margin-top: 16px;", "{message}" }
        }
    }
}

/// Red notice box
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
            "⚠️ {message}"
        }
    }
}
