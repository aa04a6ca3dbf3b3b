use crate::i18n::Language;
use dioxus::prelude::*;

#[component]
pub fn LanguageSelectScreen(on_select: EventHandler<Language>) -> Element {
    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 16px; background: linear-gradient(135deg, #f1f8e9, #e3f2fd);",
            div { class: "card", style: "width: 100%; max-width: 900px; text-align: center;",
                div { style: "font-size: 40px; margin-bottom: 8px;", "🌐" }
                h1 { style: "color: #1b5e20; font-size: 30px; margin: 0 0 8px 0;", "FarmAI Insights" }
                // shown before any language is chosen, so both languages at once
                p { style: "color: #666; font-size: 18px; margin-bottom: 24px;",
                    "Select your preferred language / अपनी भाषा चुनें"
                }

                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 12px;",
                    for language in Language::ALL {
                        button {
                            key: "{language.code()}",
                            class: "btn-secondary",
                            style: "height: 64px; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                            onclick: move |_| on_select.call(language),
                            span { style: "font-weight: 600; font-size: 18px;", "{language.native_name()}" }
                            span { style: "font-size: 13px; color: #666;", "{language.english_name()}" }
                        }
                    }
                }
            }
        }
    }
}
