use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl Sky {
    pub fn icon(&self) -> &'static str {
        match self {
            Sky::Sunny => "☀️",
            Sky::PartlyCloudy => "⛅",
            Sky::Cloudy => "☁️",
            Sky::Rainy => "🌧️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn message_key(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

/// How well a crop grows under the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthStatus {
    Optimal,
    Good,
    Moderate,
    Poor,
}

impl GrowthStatus {
    pub fn message_key(&self) -> &'static str {
        match self {
            GrowthStatus::Optimal => "growth-optimal",
            GrowthStatus::Good => "growth-good",
            GrowthStatus::Moderate => "growth-moderate",
            GrowthStatus::Poor => "growth-poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature_c: i32,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kmh: u32,
    pub visibility_km: u32,
    pub rainfall_mm: f32,
    pub sky: Sky,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: String,
    pub sky: Sky,
    pub rainfall_mm: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropCondition {
    pub crop: String,
    pub status: GrowthStatus,
    pub score: u8,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherAlert {
    pub kind: String,
    pub severity: RiskLevel,
    pub message: String,
    pub sky: Sky,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IrrigationAdvice {
    pub recommendation: String,
    pub water_needed: String,
    pub timing: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PestRisk {
    pub level: RiskLevel,
    pub crops: Vec<String>,
    pub prevention: String,
}

/// Forecast and farming advice for one location
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherData {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub farming_tips: Vec<String>,
    pub crop_conditions: Vec<CropCondition>,
    pub alerts: Vec<WeatherAlert>,
    pub irrigation: IrrigationAdvice,
    pub pest_risk: PestRisk,
}

fn condition(crop: &str, status: GrowthStatus, score: u8, advice: &str) -> CropCondition {
    CropCondition {
        crop: crop.to_string(),
        status,
        score,
        advice: advice.to_string(),
    }
}

impl WeatherData {
    /// The fixed demo forecast. The seven forecast days start the day after `today`.
    pub fn sample(today: NaiveDate) -> Self {
        let days: [(i32, i32, &str, Sky, f32); 7] = [
            (30, 22, "Sunny", Sky::Sunny, 0.0),
            (32, 24, "Partly Cloudy", Sky::PartlyCloudy, 0.0),
            (29, 21, "Rainy", Sky::Rainy, 15.0),
            (26, 19, "Cloudy", Sky::Cloudy, 5.0),
            (28, 20, "Sunny", Sky::Sunny, 0.0),
            (31, 23, "Partly Cloudy", Sky::PartlyCloudy, 0.0),
            (33, 25, "Hot", Sky::Sunny, 0.0),
        ];
        let forecast = days
            .iter()
            .zip(1u64..)
            .map(|(&(high_c, low_c, text, sky, rainfall_mm), offset)| ForecastDay {
                date: today.checked_add_days(Days::new(offset)).unwrap_or(today),
                high_c,
                low_c,
                condition: text.to_string(),
                sky,
                rainfall_mm,
            })
            .collect();

        Self {
            current: CurrentWeather {
                temperature_c: 28,
                condition: "Partly Cloudy".to_string(),
                humidity_pct: 65,
                wind_kmh: 12,
                visibility_km: 10,
                rainfall_mm: 2.5,
                sky: Sky::PartlyCloudy,
            },
            forecast,
            farming_tips: vec![
                "Good conditions for wheat sowing in the next 3 days".to_string(),
                "Light rain expected in three days - ideal for recently planted crops".to_string(),
                "High temperatures later in the week - ensure adequate irrigation".to_string(),
                "Low humidity levels - monitor for pest activity".to_string(),
            ],
            crop_conditions: vec![
                condition(
                    "Wheat",
                    GrowthStatus::Optimal,
                    85,
                    "Perfect temperature and humidity for germination. Sow seeds now.",
                ),
                condition(
                    "Rice",
                    GrowthStatus::Good,
                    75,
                    "Adequate moisture levels. Monitor water levels in fields.",
                ),
                condition(
                    "Cotton",
                    GrowthStatus::Moderate,
                    60,
                    "Temperature suitable but humidity could be higher. Consider irrigation.",
                ),
                condition(
                    "Sugarcane",
                    GrowthStatus::Good,
                    78,
                    "Good growing conditions. Ensure regular watering.",
                ),
            ],
            alerts: vec![
                WeatherAlert {
                    kind: "Heat Wave".to_string(),
                    severity: RiskLevel::Medium,
                    message: "High temperatures expected at the end of the week. Increase irrigation frequency.".to_string(),
                    sky: Sky::Sunny,
                },
                WeatherAlert {
                    kind: "Rain".to_string(),
                    severity: RiskLevel::Low,
                    message: "Light to moderate rain expected in three days. Good for crop growth.".to_string(),
                    sky: Sky::Rainy,
                },
            ],
            irrigation: IrrigationAdvice {
                recommendation: "Moderate irrigation required".to_string(),
                water_needed: "15-20mm per day".to_string(),
                timing: "Early morning (6-8 AM) and evening (6-8 PM)".to_string(),
            },
            pest_risk: PestRisk {
                level: RiskLevel::Medium,
                crops: vec!["Cotton".to_string(), "Wheat".to_string()],
                prevention: "Monitor crop regularly. Apply organic neem-based pesticides if needed."
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sample_current_conditions() {
        let data = WeatherData::sample(day(2025, 9, 12));
        assert_eq!(data.current.temperature_c, 28);
        assert_eq!(data.current.humidity_pct, 65);
        assert_eq!(data.current.condition, "Partly Cloudy");
        assert_eq!(data.crop_conditions.len(), 4);
        assert_eq!(data.pest_risk.level, RiskLevel::Medium);
    }

    #[test]
    fn test_forecast_starts_tomorrow() {
        let data = WeatherData::sample(day(2025, 12, 30));
        assert_eq!(data.forecast.len(), 7);
        assert_eq!(data.forecast[0].date, day(2025, 12, 31));
        assert_eq!(data.forecast[6].date, day(2026, 1, 6));
        assert_eq!(data.forecast[2].rainfall_mm, 15.0);
    }
}
