use crate::interpreter::{interpret, CommandKeywords};
use crate::models::{Capability, Command, Message, RecognitionOutcome, Speaker};

/// Number of transcript entries shown in the overlay
pub const VISIBLE_MESSAGES: usize = 5;

/// Older entries are dropped beyond this
const MAX_HISTORY: usize = 50;

/// Text-to-speech capability
pub trait SpeechSynthesizer {
    /// Speaks `text`. Implementations may assume nothing else is playing.
    fn speak(&mut self, text: &str, language_tag: &str);
    /// Stops the utterance in flight, if any
    fn cancel(&mut self);
}

/// Canned reply for each command
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReplies {
    pub weather: String,
    pub crops: String,
    pub pesticides: String,
    pub chemicals: String,
    pub analysis: String,
    pub dashboard: String,
    pub help: String,
    pub unknown: String,
}

impl Default for AssistantReplies {
    fn default() -> Self {
        Self {
            weather: "Opening weather prediction page...".to_string(),
            crops: "Opening crop library...".to_string(),
            pesticides: "Opening pesticide recommendations...".to_string(),
            chemicals: "Opening chemical analysis...".to_string(),
            analysis: "Opening image analysis...".to_string(),
            dashboard: "Going back to dashboard...".to_string(),
            help: "You can say: weather, crops, pesticides, chemicals, analysis, or dashboard"
                .to_string(),
            unknown: "I didn't understand. Please say 'help' for available commands.".to_string(),
        }
    }
}

impl AssistantReplies {
    pub fn for_command(&self, command: Command) -> &str {
        match command {
            Command::Weather => &self.weather,
            Command::Crops => &self.crops,
            Command::Pesticides => &self.pesticides,
            Command::Chemicals => &self.chemicals,
            Command::Analysis => &self.analysis,
            Command::Dashboard => &self.dashboard,
            Command::Help => &self.help,
            Command::Unknown => &self.unknown,
        }
    }
}

/// What the assistant decided for one transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub command: Command,
    pub text: String,
}

impl Reply {
    /// Route to open once the reply has been given
    pub fn navigation(&self) -> Option<&'static str> {
        self.command.route()
    }
}

/// State of one assistant instance: transcript log, mute flag, listening flag
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSession {
    messages: Vec<Message>,
    muted: bool,
    listening: bool,
    language_tag: String,
}

impl VoiceSession {
    pub fn new(language_tag: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            muted: false,
            listening: false,
            language_tag: language_tag.into(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent entries, oldest first
    pub fn visible_messages(&self) -> &[Message] {
        let start = self.messages.len().saturating_sub(VISIBLE_MESSAGES);
        &self.messages[start..]
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    /// Flips the mute flag and returns the new value. Muting cuts off the
    /// current utterance.
    pub fn toggle_mute<S: SpeechSynthesizer>(&mut self, synth: &mut Capability<S>) -> bool {
        self.muted = !self.muted;
        if self.muted {
            if let Some(synth) = synth.as_mut() {
                synth.cancel();
            }
        }
        self.muted
    }

    /// Adds the greeting once, on an empty log
    pub fn greet<S: SpeechSynthesizer>(&mut self, greeting: &str, synth: &mut Capability<S>) {
        if self.messages.is_empty() {
            self.say(greeting, synth);
        }
    }

    /// Marks the session as listening. Returns `false` if it already was.
    pub fn begin_listening(&mut self) -> bool {
        if self.listening {
            return false;
        }
        self.listening = true;
        true
    }

    /// Returns `false` if the session was not listening
    pub fn stop_listening(&mut self) -> bool {
        std::mem::replace(&mut self.listening, false)
    }

    /// Ends a listening session and handles its transcript, if one arrived
    pub fn finish_listening<S: SpeechSynthesizer>(
        &mut self,
        outcome: RecognitionOutcome,
        keywords: &CommandKeywords,
        replies: &AssistantReplies,
        synth: &mut Capability<S>,
    ) -> Option<Reply> {
        self.listening = false;
        match outcome {
            RecognitionOutcome::Transcript(transcript) => {
                Some(self.handle_transcript(&transcript, keywords, replies, synth))
            }
            RecognitionOutcome::Ended => {
                log::debug!("Speech recognition ended without a transcript");
                None
            }
            RecognitionOutcome::Failed(error) => {
                log::error!("Speech recognition error: {}", error);
                None
            }
        }
    }

    /// Logs the user's transcript, picks the reply and speaks it
    pub fn handle_transcript<S: SpeechSynthesizer>(
        &mut self,
        transcript: &str,
        keywords: &CommandKeywords,
        replies: &AssistantReplies,
        synth: &mut Capability<S>,
    ) -> Reply {
        let transcript = transcript.trim();
        self.push(Message::new(Speaker::User, transcript));

        let command = interpret(transcript, keywords);
        log::info!("Voice command {:?} from transcript {:?}", command, transcript);

        let text = replies.for_command(command).to_string();
        self.say(&text, synth);
        Reply { command, text }
    }

    fn say<S: SpeechSynthesizer>(&mut self, text: &str, synth: &mut Capability<S>) {
        self.push(Message::new(Speaker::Assistant, text));
        if self.muted {
            return;
        }
        if let Some(synth) = synth.as_mut() {
            synth.cancel();
            synth.speak(text, &self.language_tag);
        }
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        if self.messages.len() > MAX_HISTORY {
            let overflow = self.messages.len() - MAX_HISTORY;
            self.messages.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecognitionError;

    #[derive(Default)]
    struct FakeSynth {
        spoken: Vec<(String, String)>,
        cancels: usize,
    }

    impl SpeechSynthesizer for FakeSynth {
        fn speak(&mut self, text: &str, language_tag: &str) {
            self.spoken.push((text.to_string(), language_tag.to_string()));
        }

        fn cancel(&mut self) {
            self.cancels += 1;
        }
    }

    fn spoken(synth: &Capability<FakeSynth>) -> Vec<String> {
        match synth {
            Capability::Available(s) => s.spoken.iter().map(|(t, _)| t.clone()).collect(),
            Capability::Unavailable => Vec::new(),
        }
    }

    #[test]
    fn test_weather_transcript_replies_and_navigates() {
        let mut session = VoiceSession::new("en-US");
        let mut synth = Capability::Available(FakeSynth::default());
        let replies = AssistantReplies::default();

        let reply = session.handle_transcript(
            "show me the weather please",
            &CommandKeywords::english(),
            &replies,
            &mut synth,
        );

        assert_eq!(reply.command, Command::Weather);
        assert_eq!(reply.navigation(), Some("weather"));
        assert_eq!(reply.text, replies.weather);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].speaker, Speaker::User);
        assert_eq!(session.messages()[1].speaker, Speaker::Assistant);
        assert_eq!(spoken(&synth), vec![replies.weather.clone()]);
        if let Capability::Available(s) = &synth {
            assert_eq!(s.spoken[0].1, "en-US");
        }
    }

    #[test]
    fn test_help_does_not_navigate() {
        let mut session = VoiceSession::new("en-US");
        let mut synth: Capability<FakeSynth> = Capability::Unavailable;
        let reply = session.handle_transcript(
            "help",
            &CommandKeywords::english(),
            &AssistantReplies::default(),
            &mut synth,
        );
        assert_eq!(reply.command, Command::Help);
        assert_eq!(reply.navigation(), None);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_muted_session_logs_but_does_not_speak() {
        let mut session = VoiceSession::new("hi-IN");
        let mut synth = Capability::Available(FakeSynth::default());
        assert!(session.toggle_mute(&mut synth));

        session.handle_transcript(
            "crops",
            &CommandKeywords::english(),
            &AssistantReplies::default(),
            &mut synth,
        );
        assert!(spoken(&synth).is_empty());
        assert_eq!(session.messages().len(), 2);

        assert!(!session.toggle_mute(&mut synth));
    }

    #[test]
    fn test_greeting_only_once() {
        let mut session = VoiceSession::new("en-US");
        let mut synth = Capability::Available(FakeSynth::default());
        session.greet("Hello!", &mut synth);
        session.greet("Hello!", &mut synth);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(spoken(&synth), vec!["Hello!".to_string()]);
    }

    #[test]
    fn test_visible_messages_show_most_recent_five() {
        let mut session = VoiceSession::new("en-US");
        let mut synth: Capability<FakeSynth> = Capability::Unavailable;
        for i in 0..4 {
            session.handle_transcript(
                &format!("question {}", i),
                &CommandKeywords::english(),
                &AssistantReplies::default(),
                &mut synth,
            );
        }
        assert_eq!(session.messages().len(), 8);
        let visible = session.visible_messages();
        assert_eq!(visible.len(), VISIBLE_MESSAGES);
        assert_eq!(visible[0].text, "question 2");
        assert_eq!(visible[4].speaker, Speaker::Assistant);
    }

    #[test]
    fn test_history_is_capped() {
        let mut session = VoiceSession::new("en-US");
        let mut synth: Capability<FakeSynth> = Capability::Unavailable;
        for _ in 0..40 {
            session.handle_transcript(
                "hello",
                &CommandKeywords::english(),
                &AssistantReplies::default(),
                &mut synth,
            );
        }
        assert_eq!(session.messages().len(), MAX_HISTORY);
    }

    #[test]
    fn test_listening_lifecycle() {
        let mut session = VoiceSession::new("en-US");
        let mut synth: Capability<FakeSynth> = Capability::Unavailable;
        assert!(session.begin_listening());
        assert!(!session.begin_listening());

        let reply = session.finish_listening(
            RecognitionOutcome::Failed(RecognitionError::NoPermission),
            &CommandKeywords::english(),
            &AssistantReplies::default(),
            &mut synth,
        );
        assert!(reply.is_none());
        assert!(!session.is_listening());
        assert!(session.messages().is_empty());

        assert!(session.begin_listening());
        let reply = session.finish_listening(
            RecognitionOutcome::Transcript("open chemicals".to_string()),
            &CommandKeywords::english(),
            &AssistantReplies::default(),
            &mut synth,
        );
        assert_eq!(reply.map(|r| r.command), Some(Command::Chemicals));
        assert!(!session.is_listening());
    }

    #[test]
    fn test_stop_listening() {
        let mut session = VoiceSession::new("en-US");
        assert!(!session.stop_listening());
        session.begin_listening();
        assert!(session.stop_listening());
        assert!(!session.is_listening());
    }
}
