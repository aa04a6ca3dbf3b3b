use crate::interpreter::CommandKeywords;
use crate::models::{Capability, Command, Speaker, SpeechSupport};
use crate::service::{AssistantReplies, VoiceSession};
use crate::web_speech::{self, WebSpeechSynthesizer};
use dioxus::prelude::*;
use std::time::Duration;

/// Props for the VoiceAssistantOverlay
#[derive(Props, Clone, PartialEq)]
pub struct VoiceAssistantProps {
    /// BCP 47 tag used for recognition and synthesis, e.g. "hi-IN"
    pub language_tag: String,
    /// Called with the recognised command once the navigation delay has passed
    pub on_command: EventHandler<Command>,
    /// Delay between the spoken reply and the navigation request
    #[props(default = 2000)]
    pub navigation_delay_ms: u64,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<AssistantLabels>,
}

/// Labels, replies and keywords for the overlay
#[derive(Clone, PartialEq)]
pub struct AssistantLabels {
    pub title: String,
    pub listening: String,
    pub start_listening: String,
    pub stop_listening: String,
    pub mute: String,
    pub unmute: String,
    pub greeting: String,
    pub replies: AssistantReplies,
    pub keywords: CommandKeywords,
}

impl Default for AssistantLabels {
    fn default() -> Self {
        Self {
            title: "Voice Assistant".to_string(),
            listening: "Listening...".to_string(),
            start_listening: "Start listening".to_string(),
            stop_listening: "Stop listening".to_string(),
            mute: "Mute".to_string(),
            unmute: "Unmute".to_string(),
            greeting: "Hello! I'm your FarmAI assistant. How can I help you today?".to_string(),
            replies: AssistantReplies::default(),
            keywords: CommandKeywords::english(),
        }
    }
}

fn synthesizer(support: Option<SpeechSupport>) -> Capability<WebSpeechSynthesizer> {
    support
        .filter(|s| s.synthesis)
        .map(|_| WebSpeechSynthesizer)
        .into()
}

/// Floating voice assistant
///
/// Renders nothing until speech recognition support has been confirmed, and
/// nothing at all on platforms without it.
#[component]
pub fn VoiceAssistantOverlay(props: VoiceAssistantProps) -> Element {
    let labels = props.labels.clone().unwrap_or_default();
    let mut support = use_signal(|| None::<SpeechSupport>);
    let mut session = use_signal(|| VoiceSession::new(props.language_tag.clone()));
    let mut expanded = use_signal(|| false);

    let greeting = labels.greeting.clone();
    use_future(move || {
        let greeting = greeting.clone();
        async move {
            let detected = web_speech::detect_support().await;
            support.set(Some(detected));
            if detected.recognition {
                let mut synth = synthesizer(Some(detected));
                session.write().greet(&greeting, &mut synth);
            } else {
                log::warn!("Speech recognition not supported, voice assistant hidden");
            }
        }
    });

    if !support().map(|s| s.recognition).unwrap_or(false) {
        return rsx! {};
    }

    let on_command = props.on_command;
    let delay = Duration::from_millis(props.navigation_delay_ms);
    let listen_labels = labels.clone();

    let start_listening = move |_| {
        if !session.write().begin_listening() {
            return;
        }
        let tag = session.read().language_tag().to_string();
        let labels = listen_labels.clone();
        spawn(async move {
            let outcome = web_speech::listen(&tag).await;
            let mut synth = synthesizer(support());
            let reply = session.write().finish_listening(
                outcome,
                &labels.keywords,
                &labels.replies,
                &mut synth,
            );
            if let Some(reply) = reply {
                if reply.navigation().is_some() {
                    tokio::time::sleep(delay).await;
                    on_command.call(reply.command);
                }
            }
        });
    };

    let stop_listening = move |_| {
        if session.write().stop_listening() {
            web_speech::stop_listening();
        }
    };

    let listening = session.read().is_listening();
    let muted = session.read().is_muted();
    let messages = session.read().visible_messages().to_vec();

    rsx! {
        div { style: "position: fixed; bottom: 16px; right: 16px; z-index: 50; display: flex; flex-direction: column; align-items: flex-end;",

            if expanded() {
                div { class: "card", style: "width: 320px; max-height: 384px; overflow: hidden; margin-bottom: 16px; box-shadow: 0 4px 16px rgba(0,0,0,0.15);",
                    div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                        h3 { style: "margin: 0; font-size: 16px; font-weight: 600;",
                            "🤖 {labels.title}"
                        }
                        button {
                            class: "btn-secondary",
                            style: "padding: 6px 10px;",
                            title: if muted { labels.unmute.clone() } else { labels.mute.clone() },
                            onclick: move |_| {
                                let mut synth = synthesizer(support());
                                session.write().toggle_mute(&mut synth);
                            },
                            if muted { "🔇" } else { "🔊" }
                        }
                    }

                    div { style: "display: flex; flex-direction: column; gap: 8px; max-height: 192px; overflow-y: auto; margin-bottom: 16px;",
                        for message in messages {
                            div {
                                key: "{message.id}",
                                style: if message.speaker == Speaker::User {
                                    "display: flex; justify-content: flex-end;"
                                } else {
                                    "display: flex; justify-content: flex-start;"
                                },
                                div {
                                    style: if message.speaker == Speaker::User {
                                        "padding: 8px; border-radius: 8px; max-width: 240px; font-size: 14px; background: #2563eb; color: #ffffff;"
                                    } else {
                                        "padding: 8px; border-radius: 8px; max-width: 240px; font-size: 14px; background: #f3f4f6; color: #111827;"
                                    },
                                    "{message.text}"
                                }
                            }
                        }
                    }

                    if listening {
                        button {
                            class: "btn-danger",
                            style: "width: 100%; padding: 10px;",
                            onclick: stop_listening,
                            "🎙️ {labels.stop_listening}"
                        }
                        p { style: "margin: 8px 0 0 0; text-align: center; font-size: 14px; color: #2563eb;",
                            "{labels.listening}"
                        }
                    } else {
                        button {
                            class: "btn-primary",
                            style: "width: 100%; padding: 10px;",
                            onclick: start_listening,
                            "🎤 {labels.start_listening}"
                        }
                    }
                }
            }

            div { style: "position: relative;",
                button {
                    style: "width: 56px; height: 56px; border-radius: 50%; border: none; cursor: pointer; font-size: 24px; color: #ffffff; background: linear-gradient(to right, #2563eb, #16a34a); box-shadow: 0 4px 12px rgba(0,0,0,0.2);",
                    onclick: move |_| expanded.set(!expanded()),
                    "🤖"
                }
                if listening && !expanded() {
                    div { style: "position: absolute; top: -8px; right: -8px; width: 16px; height: 16px; border-radius: 50%; background: #ef4444;" }
                }
            }
        }
    }
}
