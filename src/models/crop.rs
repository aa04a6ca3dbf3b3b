use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropCategory {
    Cereals,
    Vegetables,
    Fruits,
    Pulses,
    Spices,
}

impl CropCategory {
    pub const ALL: [CropCategory; 5] = [
        CropCategory::Cereals,
        CropCategory::Vegetables,
        CropCategory::Fruits,
        CropCategory::Pulses,
        CropCategory::Spices,
    ];

    pub fn message_key(&self) -> &'static str {
        match self {
            CropCategory::Cereals => "crops-cereals",
            CropCategory::Vegetables => "crops-vegetables",
            CropCategory::Fruits => "crops-fruits",
            CropCategory::Pulses => "crops-pulses",
            CropCategory::Spices => "crops-spices",
        }
    }
}

/// Text kept in English and Hindi
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: String,
    pub hi: String,
}

impl LocalizedText {
    pub fn new(en: &str, hi: &str) -> Self {
        Self {
            en: en.to_string(),
            hi: hi.to_string(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        language.pick(&self.en, &self.hi)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    pub id: String,
    pub name: LocalizedText,
    pub category: CropCategory,
    pub season: String,
    pub water_requirement: String,
    pub soil_type: String,
    pub market_price: String,
    /// Quintals per acre
    pub yield_potential: String,
    pub growth_duration_days: u32,
    pub climate: String,
    pub description: LocalizedText,
}

impl Crop {
    /// True if `search` occurs in the English name (ignoring case) or in the
    /// Hindi name, and the crop is in `category` when one is given
    pub fn matches(&self, search: &str, category: Option<CropCategory>) -> bool {
        let needle = search.trim();
        let by_name = needle.is_empty()
            || self.name.en.to_lowercase().contains(&needle.to_lowercase())
            || self.name.hi.contains(needle);
        let by_category = category.is_none_or(|c| c == self.category);
        by_name && by_category
    }

    /// The bundled catalogue
    pub fn catalogue() -> Vec<Crop> {
        vec![
            Crop {
                id: "wheat".to_string(),
                name: LocalizedText::new("Wheat", "गेहूं"),
                category: CropCategory::Cereals,
                season: "Rabi (Nov-Mar)".to_string(),
                water_requirement: "Medium (300-400mm)".to_string(),
                soil_type: "Well-drained loamy soil".to_string(),
                market_price: "₹2,200-2,500".to_string(),
                yield_potential: "25-35 quintals".to_string(),
                growth_duration_days: 120,
                climate: "Cool and dry".to_string(),
                description: LocalizedText::new(
                    "Wheat is the second most important cereal crop in India after rice.",
                    "गेहूं चावल के बाद भारत की दूसरी सबसे महत्वपूर्ण अनाज फसल है।",
                ),
            },
            Crop {
                id: "rice".to_string(),
                name: LocalizedText::new("Rice", "चावल"),
                category: CropCategory::Cereals,
                season: "Kharif (Jun-Oct)".to_string(),
                water_requirement: "High (1000-1200mm)".to_string(),
                soil_type: "Clay or clay loam".to_string(),
                market_price: "₹1,800-2,200".to_string(),
                yield_potential: "30-40 quintals".to_string(),
                growth_duration_days: 90,
                climate: "Warm and humid".to_string(),
                description: LocalizedText::new(
                    "Rice is the staple food crop of India and feeds more than half of the population.",
                    "चावल भारत की मुख्य खाद्य फसल है और आधी से अधिक आबादी का भरण-पोषण करती है।",
                ),
            },
            Crop {
                id: "tomato".to_string(),
                name: LocalizedText::new("Tomato", "टमाटर"),
                category: CropCategory::Vegetables,
                season: "Year round".to_string(),
                water_requirement: "Medium (400-600mm)".to_string(),
                soil_type: "Well-drained sandy loam".to_string(),
                market_price: "₹15-25 per kg".to_string(),
                yield_potential: "200-300 quintals".to_string(),
                growth_duration_days: 75,
                climate: "Warm temperate".to_string(),
                description: LocalizedText::new(
                    "Tomato is one of the most important vegetable crops worldwide.",
                    "टमाटर दुनिया भर में सबसे महत्वपूर्ण सब्जी फसलों में से एक है।",
                ),
            },
            Crop {
                id: "potato".to_string(),
                name: LocalizedText::new("Potato", "आलू"),
                category: CropCategory::Vegetables,
                season: "Rabi (Oct-Mar)".to_string(),
                water_requirement: "Medium (500-700mm)".to_string(),
                soil_type: "Sandy loam".to_string(),
                market_price: "₹8-15 per kg".to_string(),
                yield_potential: "150-250 quintals".to_string(),
                growth_duration_days: 90,
                climate: "Cool and dry".to_string(),
                description: LocalizedText::new(
                    "Potato is the fourth most important food crop in the world.",
                    "आलू दुनिया की चौथी सबसे महत्वपूर्ण खाद्य फसल है।",
                ),
            },
            Crop {
                id: "sugarcane".to_string(),
                name: LocalizedText::new("Sugarcane", "गन्ना"),
                category: CropCategory::Cereals,
                season: "Year round".to_string(),
                water_requirement: "High (1500-2500mm)".to_string(),
                soil_type: "Deep, well-drained soil".to_string(),
                market_price: "₹280-350 per quintal".to_string(),
                yield_potential: "600-800 quintals".to_string(),
                growth_duration_days: 365,
                climate: "Tropical and subtropical".to_string(),
                description: LocalizedText::new(
                    "Sugarcane is the main source of sugar and ethanol production.",
                    "गन्ना चीनी और इथेनॉल उत्पादन का मुख्य स्रोत है।",
                ),
            },
            Crop {
                id: "cotton".to_string(),
                name: LocalizedText::new("Cotton", "कपास"),
                category: CropCategory::Cereals,
                season: "Kharif (Apr-Oct)".to_string(),
                water_requirement: "Medium (500-1000mm)".to_string(),
                soil_type: "Black cotton soil".to_string(),
                market_price: "₹5,500-6,500 per quintal".to_string(),
                yield_potential: "15-25 quintals".to_string(),
                growth_duration_days: 180,
                climate: "Warm and humid".to_string(),
                description: LocalizedText::new(
                    "Cotton is the most important cash crop and fiber crop of India.",
                    "कपास भारत की सबसे महत्वपूर्ण नकदी फसल और रेशा फसल है।",
                ),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> Crop {
        Crop::catalogue().remove(0)
    }

    #[test]
    fn test_match_english_ignores_case() {
        assert!(wheat().matches("WHE", None));
        assert!(wheat().matches("", None));
        assert!(!wheat().matches("rice", None));
    }

    #[test]
    fn test_match_hindi() {
        assert!(wheat().matches("गेहूं", None));
        assert!(!wheat().matches("आलू", None));
    }

    #[test]
    fn test_match_category() {
        assert!(wheat().matches("", Some(CropCategory::Cereals)));
        assert!(!wheat().matches("wheat", Some(CropCategory::Fruits)));
    }

    #[test]
    fn test_localized_name() {
        assert_eq!(wheat().name.get(Language::Hindi), "गेहूं");
        assert_eq!(wheat().name.get(Language::Tamil), "Wheat");
    }
}
