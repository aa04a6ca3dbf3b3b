use crate::error::AppError;
use base64::Engine;

/// An uploaded or captured picture
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub data_url: String,
    pub mime: String,
    /// Width and height, known only when the decoder understands the format
    pub dimensions: Option<(u32, u32)>,
    pub byte_len: usize,
}

impl SelectedImage {
    /// "640 × 480 · 1.2 MB", or just the size when the dimensions are unknown
    pub fn summary(&self) -> String {
        match self.dimensions {
            Some((width, height)) => format!("{} × {} · {}", width, height, self.size_label()),
            None => self.size_label(),
        }
    }

    /// Human readable size, e.g. "1.2 MB"
    pub fn size_label(&self) -> String {
        let bytes = self.byte_len as f64;
        if bytes >= 1024.0 * 1024.0 {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        } else if bytes >= 1024.0 {
            format!("{:.0} KB", bytes / 1024.0)
        } else {
            format!("{} B", self.byte_len)
        }
    }
}

/// Splits `data:<mime>;base64,<payload>` into mime type and payload
fn split_data_url(data_url: &str) -> Result<(&str, &str), AppError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| AppError::ImageProcessing("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AppError::ImageProcessing("data URL without payload".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| AppError::ImageProcessing("data URL is not base64".to_string()))?;
    if !mime.starts_with("image/") {
        return Err(AppError::ImageProcessing(format!(
            "unsupported file type {}",
            mime
        )));
    }
    Ok((mime, payload))
}

/// Decodes a data URL and reads the picture dimensions.
///
/// Only a malformed data URL is an error. A picture the decoder cannot read
/// (HEIC, AVIF, a truncated file) is still accepted, without dimensions.
pub fn inspect_data_url(data_url: &str) -> Result<SelectedImage, AppError> {
    let (mime, payload) = split_data_url(data_url)?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
    let dimensions = match image::load_from_memory(&bytes) {
        Ok(image) => Some((image.width(), image.height())),
        Err(e) => {
            log::debug!("Could not decode {} image: {}", mime, e);
            None
        }
    };

    Ok(SelectedImage {
        data_url: data_url.to_string(),
        mime: mime.to_string(),
        dimensions,
        byte_len: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encoded_data_url(width: u32, height: u32, format: image::ImageFormat, mime: &str) -> String {
        let img = image::RgbImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        format!(
            "data:{};base64,{}",
            mime,
            base64::engine::general_purpose::STANDARD.encode(bytes)
        )
    }

    fn png_data_url(width: u32, height: u32) -> String {
        encoded_data_url(width, height, image::ImageFormat::Png, "image/png")
    }

    #[test]
    fn test_inspect_png() {
        let url = png_data_url(4, 3);
        let image = inspect_data_url(&url).unwrap();
        assert_eq!(image.mime, "image/png");
        assert_eq!(image.dimensions, Some((4, 3)));
        assert!(image.byte_len > 0);
    }

    #[test]
    fn test_inspect_gif_and_bmp() {
        let gif = encoded_data_url(2, 5, image::ImageFormat::Gif, "image/gif");
        assert_eq!(inspect_data_url(&gif).unwrap().dimensions, Some((2, 5)));

        let bmp = encoded_data_url(6, 1, image::ImageFormat::Bmp, "image/bmp");
        assert_eq!(inspect_data_url(&bmp).unwrap().dimensions, Some((6, 1)));
    }

    #[test]
    fn test_undecodable_image_is_still_accepted() {
        let truncated_gif = inspect_data_url("data:image/gif;base64,R0lGODlhAQABAAAAACw=").unwrap();
        assert_eq!(truncated_gif.mime, "image/gif");
        assert_eq!(truncated_gif.dimensions, None);

        let heic = inspect_data_url("data:image/heic;base64,aGVsbG8=").unwrap();
        assert_eq!(heic.dimensions, None);
        assert_eq!(heic.byte_len, 5);
        assert_eq!(heic.summary(), "5 B");
    }

    #[test]
    fn test_rejects_malformed_data_urls() {
        assert!(inspect_data_url("hello").is_err());
        assert!(inspect_data_url("data:text/plain;base64,aGVsbG8=").is_err());
        assert!(inspect_data_url("data:image/png,rawdata").is_err());
        assert!(matches!(
            inspect_data_url("data:image/png;base64,!!not base64!!"),
            Err(AppError::ImageProcessing(_))
        ));
    }

    #[test]
    fn test_summary_with_dimensions() {
        let image = inspect_data_url(&png_data_url(4, 3)).unwrap();
        assert_eq!(image.summary(), format!("4 × 3 · {}", image.size_label()));
    }

    #[test]
    fn test_size_label() {
        let mut image = inspect_data_url(&png_data_url(1, 1)).unwrap();
        image.byte_len = 512;
        assert_eq!(image.size_label(), "512 B");
        image.byte_len = 2048;
        assert_eq!(image.size_label(), "2 KB");
        image.byte_len = 3 * 1024 * 1024;
        assert_eq!(image.size_label(), "3.0 MB");
    }
}
