use crate::image_processing::SelectedImage;
use crate::models::{
    AnalysisResult, ChemicalRecommendation, Crop, CropCategory, PesticideRecommendation,
    WeatherData,
};
use crate::services::forms::{ChemicalRequest, PesticideRequest, WeatherRequest};
use std::time::Duration;

/// Result slot of a screen that looks something up
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lookup<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
}

impl<T> Lookup<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lookup::Loading)
    }
}

/// Forecast for the requested location, after `delay`
pub async fn fetch_weather(request: &WeatherRequest, delay: Duration) -> WeatherData {
    log::info!("Fetching weather for {}", request.location_label());
    tokio::time::sleep(delay).await;
    WeatherData::sample(chrono::Local::now().date_naive())
}

pub async fn fetch_pesticides(
    request: &PesticideRequest,
    delay: Duration,
) -> Vec<PesticideRecommendation> {
    log::info!(
        "Fetching pesticide advice: crop={}, pest={}, severity={}",
        request.crop,
        request.pest,
        request.severity
    );
    tokio::time::sleep(delay).await;
    PesticideRecommendation::samples()
}

pub async fn fetch_chemicals(request: &ChemicalRequest, delay: Duration) -> ChemicalRecommendation {
    log::info!(
        "Fetching fertilizer plan: crop={}, soil={}, stage={}, {} acres",
        request.crop,
        request.soil,
        request.stage,
        request.field_size_acres
    );
    tokio::time::sleep(delay).await;
    ChemicalRecommendation::sample()
}

pub async fn analyze_image(image: &SelectedImage, delay: Duration) -> AnalysisResult {
    log::info!(
        "Analyzing {} image ({})",
        image.mime,
        image.summary()
    );
    tokio::time::sleep(delay).await;
    AnalysisResult::sample()
}

pub async fn load_crops() -> Vec<Crop> {
    let crops = Crop::catalogue();
    log::debug!("Loaded {} crops", crops.len());
    crops
}

/// Crops matching the search text and category, in catalogue order
pub fn filter_crops<'a>(
    crops: &'a [Crop],
    search: &str,
    category: Option<CropCategory>,
) -> Vec<&'a Crop> {
    crops.iter().filter(|c| c.matches(search, category)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::forms::{LoginForm, WeatherForm};
    use crate::session::{Screen, Session};

    #[test]
    fn test_lookup_states() {
        let mut lookup: Lookup<u8> = Lookup::default();
        assert_eq!(lookup, Lookup::Idle);
        lookup = Lookup::Loading;
        assert!(lookup.is_loading());
        lookup = Lookup::Ready(7);
        assert!(!lookup.is_loading());
    }

    #[tokio::test]
    async fn test_fetch_pesticides() {
        let request = PesticideRequest {
            crop: "cotton".to_string(),
            pest: "whitefly".to_string(),
            severity: "high".to_string(),
        };
        let recs = fetch_pesticides(&request, Duration::ZERO).await;
        let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Neem Oil", "Bacillus thuringiensis (Bt)", "Imidacloprid"]
        );
    }

    #[tokio::test]
    async fn test_fetch_chemicals() {
        let request = ChemicalRequest {
            crop: "wheat".to_string(),
            soil: "loamy".to_string(),
            stage: "sowing".to_string(),
            field_size_acres: 1.0,
        };
        let plan = fetch_chemicals(&request, Duration::ZERO).await;
        assert_eq!(plan.cost.total, 4500);
    }

    #[tokio::test]
    async fn test_analyze_image() {
        let image = SelectedImage {
            data_url: String::new(),
            mime: "image/png".to_string(),
            dimensions: None,
            byte_len: 10,
        };
        let result = analyze_image(&image, Duration::ZERO).await;
        assert_eq!(result.soil_type, "Loamy Soil");
        assert_eq!(result.confidence, 87);
    }

    #[tokio::test]
    async fn test_crop_filter() {
        let crops = load_crops().await;
        assert_eq!(crops.len(), 6);

        let ids = |found: Vec<&Crop>| found.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
        assert_eq!(
            ids(filter_crops(&crops, "", Some(CropCategory::Vegetables))),
            ["tomato", "potato"]
        );
        assert_eq!(ids(filter_crops(&crops, "cot", None)), ["cotton"]);
        assert_eq!(ids(filter_crops(&crops, "गन्ना", None)), ["sugarcane"]);
        assert!(filter_crops(&crops, "", Some(CropCategory::Spices)).is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_weather_lookup() {
        let session = Session::default().select_language("en");
        assert_eq!(session.screen(), Screen::Login);

        let login = LoginForm {
            phone: "9999999999".to_string(),
            password: "password".to_string(),
            ..Default::default()
        }
        .request()
        .unwrap();
        let session = session.login(&login.display_name, &login.phone_number);
        assert_eq!(session.screen(), Screen::Dashboard);

        let session = session.navigate(Screen::Weather);
        assert_eq!(session.screen(), Screen::Weather);

        let mut form = WeatherForm::default();
        assert!(form.request().is_err());
        form.set_state("maharashtra");
        form.city = "mumbai".to_string();
        let request = form.request().unwrap();

        let data = fetch_weather(&request, Duration::ZERO).await;
        assert_eq!(data.current.temperature_c, 28);
        assert_eq!(data.current.humidity_pct, 65);
        assert_eq!(data.current.condition, "Partly Cloudy");
        assert_eq!(session.user().map(|u| u.phone_number.as_str()), Some("9999999999"));
    }
}
