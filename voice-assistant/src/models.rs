use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One entry of the assistant's transcript log
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

/// A recognised voice command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Weather,
    Crops,
    Pesticides,
    Chemicals,
    Analysis,
    Dashboard,
    Help,
    Unknown,
}

impl Command {
    /// Order in which commands are tested against a transcript. First match wins.
    pub const MATCH_ORDER: [Command; 7] = [
        Command::Weather,
        Command::Crops,
        Command::Pesticides,
        Command::Chemicals,
        Command::Analysis,
        Command::Dashboard,
        Command::Help,
    ];

    /// English keyword that is always accepted, whatever the UI language
    pub fn english_alias(&self) -> &'static str {
        match self {
            Command::Weather => "weather",
            Command::Crops => "crop",
            Command::Pesticides => "pesticide",
            Command::Chemicals => "chemical",
            Command::Analysis => "image",
            Command::Dashboard => "home",
            Command::Help => "help",
            Command::Unknown => "",
        }
    }

    /// Route the host application should open for this command, if any
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Command::Weather => Some("weather"),
            Command::Crops => Some("crop-library"),
            Command::Pesticides => Some("pesticides"),
            Command::Chemicals => Some("chemicals"),
            Command::Analysis => Some("image-analysis"),
            Command::Dashboard => Some("dashboard"),
            Command::Help | Command::Unknown => None,
        }
    }
}

/// A platform feature that may or may not exist at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Capability::Available(handle) => Some(handle),
            Capability::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(handle) => Capability::Available(handle),
            None => Capability::Unavailable,
        }
    }
}

/// Failure reported by the speech-to-text capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionError {
    NoPermission,
    NoDevice,
    DeviceUnreadable,
}

impl RecognitionError {
    /// Maps a Web Speech API error code. Codes that only mean "nothing was
    /// heard" return `None`.
    pub fn from_platform_code(code: &str) -> Option<Self> {
        match code {
            "no-speech" | "aborted" => None,
            "not-allowed" | "service-not-allowed" => Some(RecognitionError::NoPermission),
            "audio-capture" | "unsupported" => Some(RecognitionError::NoDevice),
            _ => Some(RecognitionError::DeviceUnreadable),
        }
    }
}

impl std::fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionError::NoPermission => write!(f, "microphone permission denied"),
            RecognitionError::NoDevice => write!(f, "no microphone available"),
            RecognitionError::DeviceUnreadable => write!(f, "microphone could not be read"),
        }
    }
}

impl std::error::Error for RecognitionError {}

/// Result of one listening session
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionOutcome {
    Transcript(String),
    /// Listening ended without a final transcript
    Ended,
    Failed(RecognitionError),
}

/// Raw event posted back by the speech recognition script
#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionEvent {
    pub kind: String,
    #[serde(default)]
    pub value: String,
}

impl From<RecognitionEvent> for RecognitionOutcome {
    fn from(event: RecognitionEvent) -> Self {
        match event.kind.as_str() {
            "transcript" => RecognitionOutcome::Transcript(event.value),
            "error" => match RecognitionError::from_platform_code(&event.value) {
                Some(error) => RecognitionOutcome::Failed(error),
                None => RecognitionOutcome::Ended,
            },
            _ => RecognitionOutcome::Ended,
        }
    }
}

/// Which speech capabilities the platform offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SpeechSupport {
    pub recognition: bool,
    pub synthesis: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(Command::Crops.route(), Some("crop-library"));
        assert_eq!(Command::Analysis.route(), Some("image-analysis"));
        assert_eq!(Command::Help.route(), None);
        assert_eq!(Command::Unknown.route(), None);
    }

    #[test]
    fn test_recognition_error_codes() {
        assert_eq!(
            RecognitionError::from_platform_code("not-allowed"),
            Some(RecognitionError::NoPermission)
        );
        assert_eq!(
            RecognitionError::from_platform_code("audio-capture"),
            Some(RecognitionError::NoDevice)
        );
        assert_eq!(
            RecognitionError::from_platform_code("network"),
            Some(RecognitionError::DeviceUnreadable)
        );
        assert_eq!(RecognitionError::from_platform_code("no-speech"), None);
    }

    #[test]
    fn test_event_into_outcome() {
        let event: RecognitionEvent =
            serde_json::from_str(r#"{"kind":"transcript","value":"open weather"}"#).unwrap();
        assert_eq!(
            RecognitionOutcome::from(event),
            RecognitionOutcome::Transcript("open weather".to_string())
        );

        let event: RecognitionEvent =
            serde_json::from_str(r#"{"kind":"error","value":"aborted"}"#).unwrap();
        assert_eq!(RecognitionOutcome::from(event), RecognitionOutcome::Ended);

        let event: RecognitionEvent = serde_json::from_str(r#"{"kind":"end"}"#).unwrap();
        assert_eq!(RecognitionOutcome::from(event), RecognitionOutcome::Ended);
    }

    #[test]
    fn test_capability_from_option() {
        let mut cap: Capability<u8> = Some(3).into();
        assert!(cap.is_available());
        assert_eq!(cap.as_mut(), Some(&mut 3));

        let cap: Capability<u8> = None.into();
        assert!(!cap.is_available());
    }
}
