pub mod chemical;
pub mod crop;
pub mod image_analysis;
pub mod options;
pub mod pesticide;
pub mod weather;

pub use chemical::{ChemicalRecommendation, NutrientLevel, NutrientStatus};
pub use crop::{Crop, CropCategory, LocalizedText};
pub use image_analysis::AnalysisResult;
pub use options::SelectOption;
pub use pesticide::{CostLevel, PesticideKind, PesticideRecommendation};
pub use weather::{GrowthStatus, RiskLevel, Sky, WeatherData};
