// Camera and image picking through the webview.
//
// The flows are written against the `CameraDevice` trait so the screen logic
// can be tested without a browser; `WebCamera` is the getUserMedia backend.

use dioxus::prelude::*;
use serde::Deserialize;
use std::future::Future;

/// DOM id of the live preview element
pub const PREVIEW_ELEMENT_ID: &str = "camera-preview";
/// DOM id of the hidden file input
pub const UPLOAD_ELEMENT_ID: &str = "image-upload";

/// Why the camera could not be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The user or the platform refused camera access
    PermissionDenied,
    /// No camera, or no camera API at all
    Unavailable,
    /// Any other failure, e.g. the device is busy. Keeps the platform error name.
    AccessFailed(String),
    /// The stream was open but gave no frame
    CaptureFailed,
}

impl CameraError {
    /// Classifies a DOMException name reported by getUserMedia
    pub fn from_dom_error(name: &str) -> Self {
        match name {
            "NotAllowedError" => CameraError::PermissionDenied,
            "NotFoundError" | "Unsupported" => CameraError::Unavailable,
            other => CameraError::AccessFailed(other.to_string()),
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            CameraError::PermissionDenied => "camera-permission-denied",
            CameraError::Unavailable => "camera-unavailable",
            CameraError::AccessFailed(_) | CameraError::CaptureFailed => "camera-error",
        }
    }
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraError::PermissionDenied => write!(f, "permission denied"),
            CameraError::Unavailable => write!(f, "no camera available"),
            CameraError::AccessFailed(name) => write!(f, "camera access failed ({})", name),
            CameraError::CaptureFailed => write!(f, "no frame captured"),
        }
    }
}

impl std::error::Error for CameraError {}

/// Which camera to ask for; field photos always use the back camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    Environment,
}

impl FacingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacingMode::Environment => "environment",
        }
    }
}

/// Camera stream lifecycle as seen by the image analysis screen
#[derive(Debug, Clone, PartialEq)]
pub enum CameraState {
    Closed,
    Opening,
    Streaming,
    Failed(CameraError),
}

/// Video capture capability
pub trait CameraDevice {
    /// Requests a stream and attaches it to the preview
    fn open(&mut self, facing: FacingMode) -> impl Future<Output = Result<(), CameraError>>;
    /// Grabs the current frame as a PNG data URL
    fn capture_frame(&mut self) -> impl Future<Output = Option<String>>;
    /// Stops every track of the stream
    fn release(&mut self);
}

/// Opens the back camera and reports the resulting state
pub async fn start_camera<C: CameraDevice>(device: &mut C) -> CameraState {
    match device.open(FacingMode::Environment).await {
        Ok(()) => {
            log::info!("Camera stream started");
            CameraState::Streaming
        }
        Err(e) => {
            log::error!("Error accessing camera: {}", e);
            CameraState::Failed(e)
        }
    }
}

/// Captures one frame and releases the stream, whether or not a frame came back
pub async fn take_photo<C: CameraDevice>(device: &mut C) -> Result<String, CameraError> {
    let frame = device.capture_frame().await;
    device.release();
    frame.ok_or_else(|| {
        log::warn!("Camera returned no frame");
        CameraError::CaptureFailed
    })
}

#[derive(Debug, Deserialize)]
struct OpenResult {
    error: Option<String>,
}

/// getUserMedia backed camera bound to the preview element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebCamera {
    video_id: &'static str,
}

impl Default for WebCamera {
    fn default() -> Self {
        Self {
            video_id: PREVIEW_ELEMENT_ID,
        }
    }
}

impl CameraDevice for WebCamera {
    async fn open(&mut self, facing: FacingMode) -> Result<(), CameraError> {
        let script = format!(
            r#"
if (!navigator.mediaDevices || !navigator.mediaDevices.getUserMedia) {{
    return {{ error: "Unsupported" }};
}}
try {{
    const stream = await navigator.mediaDevices.getUserMedia({{ video: {{ facingMode: "{facing}" }} }});
    const video = document.getElementById("{id}");
    if (!video) {{
        stream.getTracks().forEach((track) => track.stop());
        return {{ error: "PreviewMissing" }};
    }}
    video.srcObject = stream;
    await video.play();
    return {{ error: null }};
}} catch (e) {{
    return {{ error: (e && e.name) ? e.name : "Error" }};
}}
"#,
            facing = facing.as_str(),
            id = self.video_id
        );

        match document::eval(&script).join::<OpenResult>().await {
            Ok(OpenResult { error: None }) => Ok(()),
            Ok(OpenResult { error: Some(name) }) => Err(CameraError::from_dom_error(&name)),
            Err(e) => Err(CameraError::AccessFailed(format!("{:?}", e))),
        }
    }

    async fn capture_frame(&mut self) -> Option<String> {
        let script = format!(
            r#"
const video = document.getElementById("{id}");
if (!video || !video.srcObject || !video.videoWidth) {{
    return null;
}}
const canvas = document.createElement("canvas");
canvas.width = video.videoWidth;
canvas.height = video.videoHeight;
const context = canvas.getContext("2d");
if (!context) {{
    return null;
}}
context.drawImage(video, 0, 0);
return canvas.toDataURL("image/png");
"#,
            id = self.video_id
        );

        match document::eval(&script).join::<Option<String>>().await {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Frame capture failed: {:?}", e);
                None
            }
        }
    }

    fn release(&mut self) {
        let script = format!(
            r#"
const video = document.getElementById("{id}");
if (video && video.srcObject) {{
    video.srcObject.getTracks().forEach((track) => track.stop());
    video.srcObject = null;
}}
"#,
            id = self.video_id
        );
        let _ = document::eval(&script);
    }
}

/// Lets the user pick an image file and returns it as a data URL.
///
/// Resolves to `None` if the file could not be read. If the dialog is
/// cancelled the browser never reports back and the future stays pending.
pub async fn pick_image() -> Option<String> {
    let script = format!(
        r#"
const input = document.getElementById("{id}");
if (!input) {{
    return null;
}}
input.value = "";
const file = await new Promise((resolve) => {{
    input.onchange = () => resolve(input.files && input.files[0] ? input.files[0] : null);
    input.click();
}});
if (!file) {{
    return null;
}}
return await new Promise((resolve) => {{
    const reader = new FileReader();
    reader.onload = () => resolve(reader.result);
    reader.onerror = () => resolve(null);
    reader.readAsDataURL(file);
}});
"#,
        id = UPLOAD_ELEMENT_ID
    );

    match document::eval(&script).join::<Option<String>>().await {
        Ok(data_url) => data_url,
        Err(e) => {
            log::error!("Image picker failed: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeCamera {
        open_result: Result<(), CameraError>,
        frame: Option<String>,
        releases: usize,
        requested: Option<FacingMode>,
    }

    impl FakeCamera {
        fn new(open_result: Result<(), CameraError>) -> Self {
            Self {
                open_result,
                frame: Some("data:image/png;base64,AAAA".to_string()),
                releases: 0,
                requested: None,
            }
        }
    }

    impl CameraDevice for FakeCamera {
        async fn open(&mut self, facing: FacingMode) -> Result<(), CameraError> {
            self.requested = Some(facing);
            self.open_result.clone()
        }

        async fn capture_frame(&mut self) -> Option<String> {
            self.frame.clone()
        }

        fn release(&mut self) {
            self.releases += 1;
        }
    }

    #[test]
    fn test_dom_error_classification() {
        assert_eq!(
            CameraError::from_dom_error("NotAllowedError"),
            CameraError::PermissionDenied
        );
        assert_eq!(
            CameraError::from_dom_error("NotFoundError"),
            CameraError::Unavailable
        );
        assert_eq!(
            CameraError::from_dom_error("NotReadableError"),
            CameraError::AccessFailed("NotReadableError".to_string())
        );
        assert_eq!(
            CameraError::from_dom_error("OverconstrainedError"),
            CameraError::AccessFailed("OverconstrainedError".to_string())
        );
    }

    #[test]
    fn test_distinct_messages() {
        assert_eq!(
            CameraError::from_dom_error("NotAllowedError").message_key(),
            "camera-permission-denied"
        );
        assert_eq!(
            CameraError::from_dom_error("NotFoundError").message_key(),
            "camera-unavailable"
        );
        assert_eq!(
            CameraError::from_dom_error("Unsupported").message_key(),
            "camera-unavailable"
        );
        assert_eq!(
            CameraError::from_dom_error("NotReadableError").message_key(),
            "camera-error"
        );
    }

    #[tokio::test]
    async fn test_start_camera_prefers_back_camera() {
        let mut camera = FakeCamera::new(Ok(()));
        assert_eq!(start_camera(&mut camera).await, CameraState::Streaming);
        assert_eq!(camera.requested, Some(FacingMode::Environment));
    }

    #[tokio::test]
    async fn test_start_camera_denied() {
        let mut camera = FakeCamera::new(Err(CameraError::PermissionDenied));
        assert_eq!(
            start_camera(&mut camera).await,
            CameraState::Failed(CameraError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn test_take_photo_releases_stream() {
        let mut camera = FakeCamera::new(Ok(()));
        start_camera(&mut camera).await;
        let frame = take_photo(&mut camera).await;
        assert!(frame.is_ok());
        assert_eq!(camera.releases, 1);

        camera.frame = None;
        assert_eq!(take_photo(&mut camera).await, Err(CameraError::CaptureFailed));
        assert_eq!(camera.releases, 2);
    }

    #[tokio::test]
    async fn test_empty_frame_reports_camera_error() {
        let mut camera = FakeCamera::new(Ok(()));
        camera.frame = None;
        let err = take_photo(&mut camera).await.unwrap_err();
        assert_eq!(err.message_key(), "camera-error");
    }
}
