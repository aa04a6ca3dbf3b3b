use dioxus::prelude::*;
use dioxus_i18n::prelude::*;
use dioxus_i18n::t;
use voice_assistant::{
    AssistantLabels, AssistantReplies, Command, CommandKeywords, VoiceAssistantOverlay,
};

mod camera;
mod components;
mod config;
mod error;
mod filesystem;
mod i18n;
mod image_processing;
mod models;
mod services;
mod session;

use components::{
    ChemicalScreen, CropLibraryScreen, DashboardScreen, ImageAnalysisScreen,
    LanguageSelectScreen, LoginScreen, PesticideScreen, WeatherScreen,
};
use config::AppConfig;
use i18n::Language;
use services::LoginRequest;
use session::{Screen, Session};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = AppConfig::load();
    init_logging(&config.log_level);
    log::info!(
        "Starting KrishiVeda (language {}, voice assistant {})",
        config.default_language,
        if config.voice_assistant { "on" } else { "off" }
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[cfg(target_os = "android")]
fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Info);
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(filter)
            .with_tag("krishiveda"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Overlay texts in the active UI language
fn assistant_labels() -> AssistantLabels {
    AssistantLabels {
        title: t!("voice-title"),
        listening: t!("voice-listening"),
        start_listening: t!("voice-start"),
        stop_listening: t!("voice-stop"),
        mute: t!("voice-mute"),
        unmute: t!("voice-unmute"),
        greeting: t!("voice-greeting"),
        replies: AssistantReplies {
            weather: t!("voice-reply-weather"),
            crops: t!("voice-reply-crops"),
            pesticides: t!("voice-reply-pesticides"),
            chemicals: t!("voice-reply-chemicals"),
            analysis: t!("voice-reply-analysis"),
            dashboard: t!("voice-reply-dashboard"),
            help: t!("voice-reply-help"),
            unknown: t!("voice-reply-unknown"),
        },
        keywords: CommandKeywords {
            weather: t!("voice-keyword-weather"),
            crops: t!("voice-keyword-crops"),
            pesticides: t!("voice-keyword-pesticides"),
            chemicals: t!("voice-keyword-chemicals"),
            analysis: t!("voice-keyword-analysis"),
            dashboard: t!("voice-keyword-dashboard"),
            help: t!("voice-keyword-help"),
        },
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    let start_language = config.language();
    let mut translations = use_init_i18n(move || i18n::init_i18n(start_language));
    let mut session = use_signal(move || Session::new(start_language));

    let current = session();
    let language = current.language();
    let screen = current.screen();

    let on_command = move |command: Command| {
        let Some(route) = command.route() else {
            return;
        };
        match session().navigate_route(route) {
            Ok(next) => session.set(next),
            Err(e) => log::warn!("Voice command ignored: {}", e),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "min-height: 100vh; font-family: sans-serif;",
            match screen {
                Screen::LanguageSelect => rsx! {
                    LanguageSelectScreen {
                        on_select: move |lang: Language| {
                            if !lang.has_translations() {
                                log::info!("No translations for {}, showing English", lang.code());
                            }
                            session.set(session().select_language(lang.code()));
                            translations.set_language(lang.locale());
                        },
                    }
                },
                Screen::Login => rsx! {
                    LoginScreen {
                        on_login: move |req: LoginRequest| {
                            session.set(session().login(&req.display_name, &req.phone_number));
                        },
                    }
                },
                Screen::Dashboard => rsx! {
                    DashboardScreen {
                        user_name: current.user().map(|u| u.display_name.clone()).unwrap_or_default(),
                        on_navigate: move |s| session.set(session().navigate(s)),
                        on_logout: move |_| session.set(session().logout()),
                    }
                },
                Screen::Weather => rsx! {
                    WeatherScreen { on_back: move |_| session.set(session().back()) }
                },
                Screen::Pesticide => rsx! {
                    PesticideScreen { on_back: move |_| session.set(session().back()) }
                },
                Screen::Chemical => rsx! {
                    ChemicalScreen { on_back: move |_| session.set(session().back()) }
                },
                Screen::ImageAnalysis => rsx! {
                    ImageAnalysisScreen { on_back: move |_| session.set(session().back()) }
                },
                Screen::CropLibrary => rsx! {
                    CropLibraryScreen { language, on_back: move |_| session.set(session().back()) }
                },
            }

            if config.voice_assistant && screen.requires_user() {
                VoiceAssistantOverlay {
                    key: "{language.code()}",
                    language_tag: language.speech_tag().to_string(),
                    navigation_delay_ms: config.delays.voice_navigation_ms,
                    labels: Some(assistant_labels()),
                    on_command,
                }
            }
        }
    }
}
