pub mod chemical;
pub mod crop_library;
pub mod dashboard;
pub mod form_fields;
pub mod image_analysis;
pub mod language_select;
pub mod login;
pub mod navigation;
pub mod pesticide;
pub mod weather;

pub use chemical::ChemicalScreen;
pub use crop_library::CropLibraryScreen;
pub use dashboard::DashboardScreen;
pub use image_analysis::ImageAnalysisScreen;
pub use language_select::LanguageSelectScreen;
pub use login::LoginScreen;
pub use pesticide::PesticideScreen;
pub use weather::WeatherScreen;
