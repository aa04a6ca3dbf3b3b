use crate::models::Command;

/// Localized trigger word per command.
///
/// Each command also accepts its English alias (see [`Command::english_alias`]),
/// so a Hindi-speaking user can still say "weather".
#[derive(Debug, Clone, PartialEq)]
pub struct CommandKeywords {
    pub weather: String,
    pub crops: String,
    pub pesticides: String,
    pub chemicals: String,
    pub analysis: String,
    pub dashboard: String,
    pub help: String,
}

impl Default for CommandKeywords {
    fn default() -> Self {
        Self::english()
    }
}

impl CommandKeywords {
    pub fn english() -> Self {
        Self {
            weather: "weather".to_string(),
            crops: "crops".to_string(),
            pesticides: "pesticides".to_string(),
            chemicals: "chemicals".to_string(),
            analysis: "analysis".to_string(),
            dashboard: "dashboard".to_string(),
            help: "help".to_string(),
        }
    }

    pub fn keyword(&self, command: Command) -> &str {
        match command {
            Command::Weather => &self.weather,
            Command::Crops => &self.crops,
            Command::Pesticides => &self.pesticides,
            Command::Chemicals => &self.chemicals,
            Command::Analysis => &self.analysis,
            Command::Dashboard => &self.dashboard,
            Command::Help => &self.help,
            Command::Unknown => "",
        }
    }

    /// `transcript` must already be lowercased
    fn matches(&self, command: Command, transcript: &str) -> bool {
        [self.keyword(command), command.english_alias()]
            .iter()
            .map(|k| k.trim().to_lowercase())
            // an empty keyword would match every transcript
            .filter(|k| !k.is_empty())
            .any(|k| transcript.contains(&k))
    }
}

/// Picks the command for a transcript.
///
/// Commands are tested in [`Command::MATCH_ORDER`]; the first one whose keyword
/// is contained in the transcript wins, regardless of where in the sentence it
/// appears.
pub fn interpret(transcript: &str, keywords: &CommandKeywords) -> Command {
    let transcript = transcript.to_lowercase();
    Command::MATCH_ORDER
        .into_iter()
        .find(|command| keywords.matches(*command, &transcript))
        .unwrap_or(Command::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hindi() -> CommandKeywords {
        CommandKeywords {
            weather: "मौसम".to_string(),
            crops: "फसल".to_string(),
            pesticides: "कीटनाशक".to_string(),
            chemicals: "रसायन".to_string(),
            analysis: "विश्लेषण".to_string(),
            dashboard: "डैशबोर्ड".to_string(),
            help: "मदद".to_string(),
        }
    }

    #[test]
    fn test_substring_match() {
        let keywords = CommandKeywords::english();
        assert_eq!(
            interpret("show me the weather please", &keywords),
            Command::Weather
        );
        assert_eq!(interpret("Open the CROP library", &keywords), Command::Crops);
    }

    #[test]
    fn test_check_order_beats_position() {
        let keywords = CommandKeywords::english();
        assert_eq!(
            interpret("help me with the weather", &keywords),
            Command::Weather
        );
        assert_eq!(
            interpret("home or pesticide", &keywords),
            Command::Pesticides
        );
    }

    #[test]
    fn test_aliases() {
        let keywords = CommandKeywords::english();
        assert_eq!(interpret("analyse this image", &keywords), Command::Analysis);
        assert_eq!(interpret("take me home", &keywords), Command::Dashboard);
        assert_eq!(interpret("chemical advice", &keywords), Command::Chemicals);
    }

    #[test]
    fn test_unknown() {
        let keywords = CommandKeywords::english();
        assert_eq!(interpret("good morning", &keywords), Command::Unknown);
        assert_eq!(interpret("", &keywords), Command::Unknown);
    }

    #[test]
    fn test_localized_keywords_keep_english_aliases() {
        let keywords = hindi();
        assert_eq!(interpret("आज का मौसम बताओ", &keywords), Command::Weather);
        assert_eq!(interpret("मदद", &keywords), Command::Help);
        assert_eq!(interpret("weather", &keywords), Command::Weather);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let mut keywords = CommandKeywords::english();
        keywords.weather = String::new();
        assert_eq!(interpret("tell me about crops", &keywords), Command::Crops);
    }
}
