use crate::error::AppError;
use crate::i18n::Language;

/// Screens the router can show
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    LanguageSelect,
    Login,
    Dashboard,
    Weather,
    Pesticide,
    Chemical,
    ImageAnalysis,
    CropLibrary,
}

impl Screen {
    pub const FEATURES: [Screen; 5] = [
        Screen::Weather,
        Screen::CropLibrary,
        Screen::Pesticide,
        Screen::Chemical,
        Screen::ImageAnalysis,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            Screen::LanguageSelect => "language",
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
            Screen::Weather => "weather",
            Screen::Pesticide => "pesticides",
            Screen::Chemical => "chemicals",
            Screen::ImageAnalysis => "image-analysis",
            Screen::CropLibrary => "crop-library",
        }
    }

    /// Parses a route name. Unknown names are an error, never a fallback.
    pub fn from_route(route: &str) -> Result<Self, AppError> {
        match route.trim() {
            "language" => Ok(Screen::LanguageSelect),
            "login" => Ok(Screen::Login),
            "dashboard" => Ok(Screen::Dashboard),
            "weather" => Ok(Screen::Weather),
            "pesticides" => Ok(Screen::Pesticide),
            "chemicals" => Ok(Screen::Chemical),
            "image-analysis" => Ok(Screen::ImageAnalysis),
            "crop-library" => Ok(Screen::CropLibrary),
            other => Err(AppError::UnknownScreen(other.to_string())),
        }
    }

    pub fn is_feature(&self) -> bool {
        Self::FEATURES.contains(self)
    }

    /// Screens that need a logged-in user
    pub fn requires_user(&self) -> bool {
        *self == Screen::Dashboard || self.is_feature()
    }
}

/// The logged-in farmer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub display_name: String,
    pub phone_number: String,
}

impl User {
    pub fn new(display_name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Current screen, chosen language and user.
///
/// Every transition is a pure function returning the next session. A
/// transition whose precondition does not hold returns the session unchanged,
/// which keeps `user.is_some() == screen.requires_user()` true at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    language: Language,
    user: Option<User>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            screen: Screen::LanguageSelect,
            language,
            user: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn select_language(&self, code: &str) -> Session {
        if self.screen != Screen::LanguageSelect {
            return self.rejected("select_language");
        }
        let language = Language::from_code(code);
        log::info!("Language selected: {}", language.code());
        Session {
            screen: Screen::Login,
            language,
            user: None,
        }
    }

    /// No credential check happens here: any user handed in by the login form is accepted.
    pub fn login(&self, display_name: &str, phone_number: &str) -> Session {
        if self.screen != Screen::Login {
            return self.rejected("login");
        }
        log::info!("User logged in: {}", display_name);
        Session {
            screen: Screen::Dashboard,
            language: self.language,
            user: Some(User::new(display_name, phone_number)),
        }
    }

    pub fn navigate(&self, target: Screen) -> Session {
        if !self.screen.requires_user() {
            return self.rejected("navigate");
        }
        log::info!("Navigating {:?} -> {:?}", self.screen, target);
        Session {
            screen: target,
            language: self.language,
            user: if target.requires_user() {
                self.user.clone()
            } else {
                None
            },
        }
    }

    /// Like [`Session::navigate`] for a route name; unknown routes leave the session as it is
    pub fn navigate_route(&self, route: &str) -> Result<Session, AppError> {
        let target = Screen::from_route(route)?;
        Ok(self.navigate(target))
    }

    pub fn back(&self) -> Session {
        if !self.screen.is_feature() {
            return self.rejected("back");
        }
        Session {
            screen: Screen::Dashboard,
            language: self.language,
            user: self.user.clone(),
        }
    }

    pub fn logout(&self) -> Session {
        if self.screen != Screen::Dashboard {
            return self.rejected("logout");
        }
        log::info!("User logged out");
        Session {
            screen: Screen::LanguageSelect,
            language: self.language,
            user: None,
        }
    }

    fn rejected(&self, operation: &str) -> Session {
        log::debug!("Ignoring {} on screen {:?}", operation, self.screen);
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Session {
        Session::default()
            .select_language("en")
            .login("Farmer User", "9999999999")
    }

    fn assert_invariant(session: &Session) {
        assert_eq!(session.user().is_some(), session.screen().requires_user());
    }

    #[test]
    fn test_initial_session() {
        let session = Session::default();
        assert_eq!(session.screen(), Screen::LanguageSelect);
        assert_eq!(session.language(), Language::English);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_happy_path() {
        let session = Session::default().select_language("hi");
        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(session.language(), Language::Hindi);

        let session = session.login("Ramesh", "9876543210");
        assert_eq!(session.screen(), Screen::Dashboard);
        assert_eq!(
            session.user(),
            Some(&User::new("Ramesh", "9876543210"))
        );
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let session = Session::default().select_language("xx");
        assert_eq!(session.language(), Language::English);
        assert_eq!(session.screen(), Screen::Login);
    }

    #[test]
    fn test_feature_navigation_keeps_user() {
        let mut session = dashboard();
        for target in Screen::FEATURES.iter().chain(Screen::FEATURES.iter()) {
            session = session.navigate(*target);
            assert_eq!(session.screen(), *target);
            assert!(session.user().is_some());
            session = session.back();
            assert_eq!(session.screen(), Screen::Dashboard);
            assert!(session.user().is_some());
        }
        session = session.navigate(Screen::Weather).navigate(Screen::Chemical);
        assert_eq!(session.screen(), Screen::Chemical);
        assert!(session.user().is_some());
    }

    #[test]
    fn test_logout_cannot_be_undone_by_navigation() {
        let session = dashboard().logout();
        assert_eq!(session.screen(), Screen::LanguageSelect);
        assert!(session.user().is_none());

        let after = session.navigate(Screen::Weather);
        assert_eq!(after.screen(), Screen::LanguageSelect);
        assert!(after.user().is_none());

        let after = session.back();
        assert_eq!(after.screen(), Screen::LanguageSelect);
        assert!(after.user().is_none());
    }

    #[test]
    fn test_preconditions() {
        let start = Session::default();
        assert_eq!(start.login("a", "1"), start);
        assert_eq!(start.logout(), start);

        let login = start.select_language("en");
        assert_eq!(login.select_language("hi"), login);
        assert_eq!(login.navigate(Screen::Dashboard), login);

        let dash = dashboard();
        assert_eq!(dash.back(), dash);

        let weather = dash.navigate(Screen::Weather);
        assert_eq!(weather.logout(), weather);
    }

    #[test]
    fn test_navigating_to_entry_screens_clears_user() {
        let session = dashboard().navigate(Screen::Login);
        assert_eq!(session.screen(), Screen::Login);
        assert!(session.user().is_none());

        let session = dashboard()
            .navigate(Screen::Pesticide)
            .navigate(Screen::LanguageSelect);
        assert!(session.user().is_none());
        assert_invariant(&session);
    }

    #[test]
    fn test_navigate_route() {
        let session = dashboard();
        let next = session.navigate_route("image-analysis").unwrap();
        assert_eq!(next.screen(), Screen::ImageAnalysis);

        let err = session.navigate_route("settings").unwrap_err();
        assert!(matches!(err, AppError::UnknownScreen(r) if r == "settings"));
    }

    #[test]
    fn test_voice_command_routes_name_screens() {
        let session = dashboard();
        for command in voice_assistant::Command::MATCH_ORDER {
            if let Some(route) = command.route() {
                let next = session.navigate_route(route).unwrap();
                assert_eq!(next.screen().route(), route, "{:?}", command);
                assert!(next.user().is_some());
            }
        }
    }

    #[test]
    fn test_route_names_round_trip() {
        for screen in [
            Screen::LanguageSelect,
            Screen::Login,
            Screen::Dashboard,
            Screen::Weather,
            Screen::Pesticide,
            Screen::Chemical,
            Screen::ImageAnalysis,
            Screen::CropLibrary,
        ] {
            assert_eq!(Screen::from_route(screen.route()).unwrap(), screen);
        }
    }

    #[test]
    fn test_invariant_over_mixed_sequence() {
        let steps: Vec<Box<dyn Fn(&Session) -> Session>> = vec![
            Box::new(|s| s.navigate(Screen::Weather)),
            Box::new(|s| s.select_language("ta")),
            Box::new(|s| s.login("Farmer User", "9999999999")),
            Box::new(|s| s.navigate(Screen::CropLibrary)),
            Box::new(|s| s.logout()),
            Box::new(|s| s.back()),
            Box::new(|s| s.logout()),
            Box::new(|s| s.select_language("ml")),
            Box::new(|s| s.back()),
        ];
        let mut session = Session::default();
        for step in &steps {
            session = step(&session);
            assert_invariant(&session);
        }
        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(session.language(), Language::Malayalam);
    }
}
