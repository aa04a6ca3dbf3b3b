/// What the analysis reads from a field photo
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub soil_type: String,
    pub soil_health: String,
    pub crop_type: String,
    pub crop_health: String,
    pub weather_recommendations: Vec<String>,
    pub pesticide_recommendations: Vec<String>,
    pub chemical_requirements: Vec<String>,
    /// Percent
    pub confidence: u8,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl AnalysisResult {
    pub fn sample() -> Self {
        Self {
            soil_type: "Loamy Soil".to_string(),
            soil_health: "Good".to_string(),
            crop_type: "Wheat".to_string(),
            crop_health: "Healthy".to_string(),
            weather_recommendations: strings(&[
                "Optimal temperature: 15-25°C",
                "Required rainfall: 50-75cm annually",
                "Humidity: 50-70%",
            ]),
            pesticide_recommendations: strings(&[
                "Neem-based organic pesticide",
                "Bacillus thuringiensis for caterpillars",
                "Copper oxychloride for fungal diseases",
            ]),
            chemical_requirements: strings(&[
                "NPK fertilizer (12:32:16)",
                "Phosphorus boost during flowering",
                "Potassium supplement for grain filling",
            ]),
            confidence: 87,
        }
    }
}
