//! # Voice Assistant
//!
//! A small keyword-driven voice command assistant.
//!
//! This crate provides:
//! - An ordered keyword interpreter mapping a transcript to a [`Command`]
//! - A [`VoiceSession`] holding the transcript log, mute and listening state
//! - Web Speech API bindings and a Dioxus overlay component (`components` feature)
//!
//! ## Separation of Concerns
//!
//! This crate does **not** know the host application's screens. A command
//! carries a route name ([`Command::route`]) and the host decides what to
//! open for it. Translations are supplied by the host through
//! [`CommandKeywords`] and [`AssistantReplies`].
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use voice_assistant::{interpret, Command, CommandKeywords};
//!
//! let command = interpret("show me the weather please", &CommandKeywords::english());
//! assert_eq!(command, Command::Weather);
//!
//! // UI component usage
//! VoiceAssistantOverlay {
//!     language_tag: "en-US".to_string(),
//!     on_command: move |command: Command| {
//!         // open command.route()
//!     },
//! }
//! ```

#[cfg(feature = "components")]
pub mod component;
pub mod interpreter;
pub mod models;
pub mod service;
#[cfg(feature = "components")]
pub mod web_speech;

#[cfg(feature = "components")]
pub use component::{AssistantLabels, VoiceAssistantOverlay, VoiceAssistantProps};
pub use interpreter::{interpret, CommandKeywords};
pub use models::{
    Capability, Command, Message, RecognitionError, RecognitionOutcome, Speaker, SpeechSupport,
};
pub use service::{AssistantReplies, Reply, SpeechSynthesizer, VoiceSession, VISIBLE_MESSAGES};
