use crate::camera::CameraError;
use std::fmt;

/// Central error types for the KrishiVeda app
#[derive(Debug)]
pub enum AppError {
    /// Configuration file could not be parsed
    Config(String),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Validation error (e.g. incomplete form)
    Validation(String),
    /// Navigation target that names no screen
    UnknownScreen(String),
    /// Camera could not be opened
    Camera(CameraError),
    /// Image decoding error
    ImageProcessing(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::UnknownScreen(route) => write!(f, "Unknown screen: {:?}", route),
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::ImageProcessing(msg) => write!(f, "Image processing error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<CameraError> for AppError {
    fn from(e: CameraError) -> Self {
        AppError::Camera(e)
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(e: base64::DecodeError) -> Self {
        AppError::ImageProcessing(format!("invalid base64 payload: {}", e))
    }
}

/// Translation key of the user-facing message for an error
impl AppError {
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::Config(_) | AppError::Filesystem(_) => "error-generic",
            AppError::Validation(_) => "error-incomplete-form",
            AppError::UnknownScreen(_) => "error-generic",
            AppError::Camera(e) => e.message_key(),
            AppError::ImageProcessing(_) => "error-image-unreadable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = AppError::UnknownScreen("settings".to_string());
        assert_eq!(e.to_string(), "Unknown screen: \"settings\"");
    }

    #[test]
    fn test_camera_error_message_key() {
        let e: AppError = CameraError::PermissionDenied.into();
        assert_eq!(e.message_key(), "camera-permission-denied");
    }
}
