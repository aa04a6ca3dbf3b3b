use crate::error::AppError;
use crate::models::options::{self, english_label};

/// Name given to users who sign in without registering
pub const DEFAULT_USER_NAME: &str = "Farmer User";

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn missing(what: &str) -> AppError {
    AppError::Validation(format!("{} is required", what))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherForm {
    pub state: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub state: String,
    pub city: String,
}

impl WeatherRequest {
    /// "City, State" heading, e.g. "Mumbai, Maharashtra"
    pub fn location_label(&self) -> String {
        format!(
            "{}, {}",
            english_label(options::cities_for(&self.state), &self.city),
            english_label(options::STATES, &self.state)
        )
    }
}

impl WeatherForm {
    /// A different state invalidates the chosen city
    pub fn set_state(&mut self, state: &str) {
        if self.state != state {
            self.city.clear();
        }
        self.state = state.to_string();
    }

    pub fn is_complete(&self) -> bool {
        filled(&self.state) && filled(&self.city)
    }

    pub fn request(&self) -> Result<WeatherRequest, AppError> {
        if !filled(&self.state) {
            return Err(missing("state"));
        }
        if !filled(&self.city) {
            return Err(missing("city"));
        }
        Ok(WeatherRequest {
            state: self.state.clone(),
            city: self.city.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PesticideForm {
    pub crop: String,
    pub pest: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PesticideRequest {
    pub crop: String,
    pub pest: String,
    pub severity: String,
}

impl PesticideForm {
    pub fn is_complete(&self) -> bool {
        self.request().is_ok()
    }

    pub fn request(&self) -> Result<PesticideRequest, AppError> {
        for (value, what) in [
            (&self.crop, "crop"),
            (&self.pest, "pest"),
            (&self.severity, "severity"),
        ] {
            if !filled(value) {
                return Err(missing(what));
            }
        }
        Ok(PesticideRequest {
            crop: self.crop.clone(),
            pest: self.pest.clone(),
            severity: self.severity.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChemicalForm {
    pub crop: String,
    pub soil: String,
    pub stage: String,
    /// Raw text of the acreage field
    pub field_size: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalRequest {
    pub crop: String,
    pub soil: String,
    pub stage: String,
    pub field_size_acres: f64,
}

impl ChemicalForm {
    pub fn is_complete(&self) -> bool {
        self.request().is_ok()
    }

    /// The field size must be a positive number of acres
    pub fn request(&self) -> Result<ChemicalRequest, AppError> {
        for (value, what) in [
            (&self.crop, "crop"),
            (&self.soil, "soil type"),
            (&self.stage, "growth stage"),
        ] {
            if !filled(value) {
                return Err(missing(what));
            }
        }
        let field_size_acres = self
            .field_size
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|acres| acres.is_finite() && *acres > 0.0)
            .ok_or_else(|| missing("field size"))?;

        Ok(ChemicalRequest {
            crop: self.crop.clone(),
            soil: self.soil.clone(),
            stage: self.stage.clone(),
            field_size_acres,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub name: String,
    pub phone: String,
    /// Optional, sign up only
    pub email: String,
    pub password: String,
}

/// Who logs in, as handed to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub display_name: String,
    pub phone_number: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        self.request().is_ok()
    }

    /// Credentials are not verified. Signing in yields the default user name.
    pub fn request(&self) -> Result<LoginRequest, AppError> {
        if self.mode == LoginMode::SignUp && !filled(&self.name) {
            return Err(missing("name"));
        }
        if !filled(&self.phone) {
            return Err(missing("phone number"));
        }
        if !filled(&self.password) {
            return Err(missing("password"));
        }

        let display_name = match self.mode {
            LoginMode::SignIn => DEFAULT_USER_NAME.to_string(),
            LoginMode::SignUp => self.name.trim().to_string(),
        };
        Ok(LoginRequest {
            display_name,
            phone_number: self.phone.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_form_requires_state_and_city() {
        let mut form = WeatherForm::default();
        assert!(!form.is_complete());
        form.set_state("maharashtra");
        assert!(!form.is_complete());
        form.city = "mumbai".to_string();
        assert!(form.is_complete());
        form.city = "   ".to_string();
        assert!(matches!(form.request(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_changing_state_clears_city() {
        let mut form = WeatherForm::default();
        form.set_state("maharashtra");
        form.city = "pune".to_string();
        form.set_state("maharashtra");
        assert_eq!(form.city, "pune");
        form.set_state("gujarat");
        assert!(form.city.is_empty());
    }

    #[test]
    fn test_location_label() {
        let request = WeatherRequest {
            state: "maharashtra".to_string(),
            city: "mumbai".to_string(),
        };
        assert_eq!(request.location_label(), "Mumbai, Maharashtra");
    }

    #[test]
    fn test_pesticide_form_each_field_required() {
        let full = PesticideForm {
            crop: "wheat".to_string(),
            pest: "aphids".to_string(),
            severity: "low".to_string(),
        };
        assert!(full.is_complete());

        let mut blank_crop = full.clone();
        blank_crop.crop.clear();
        let mut blank_pest = full.clone();
        blank_pest.pest.clear();
        let mut blank_severity = full.clone();
        blank_severity.severity = " ".to_string();
        for form in [blank_crop, blank_pest, blank_severity] {
            assert!(form.request().is_err());
        }
    }

    #[test]
    fn test_chemical_form_field_size() {
        let mut form = ChemicalForm {
            crop: "rice".to_string(),
            soil: "clay".to_string(),
            stage: "sowing".to_string(),
            field_size: "2.5".to_string(),
        };
        assert_eq!(form.request().unwrap().field_size_acres, 2.5);

        for bad in ["", "0", "-1", "abc", "NaN"] {
            form.field_size = bad.to_string();
            assert!(!form.is_complete(), "accepted field size {:?}", bad);
        }
    }

    #[test]
    fn test_sign_in_uses_default_name() {
        let form = LoginForm {
            phone: "9999999999".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        let request = form.request().unwrap();
        assert_eq!(request.display_name, DEFAULT_USER_NAME);
        assert_eq!(request.phone_number, "9999999999");
    }

    #[test]
    fn test_sign_up_requires_name_not_email() {
        let mut form = LoginForm {
            mode: LoginMode::SignUp,
            phone: "9876543210".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(!form.is_complete());
        form.name = " Asha ".to_string();
        let request = form.request().unwrap();
        assert_eq!(request.display_name, "Asha");
    }

    #[test]
    fn test_login_requires_password() {
        let form = LoginForm {
            phone: "9999999999".to_string(),
            ..Default::default()
        };
        assert!(!form.is_complete());
    }
}
