use crate::camera::{
    self, CameraDevice, CameraState, WebCamera, PREVIEW_ELEMENT_ID, UPLOAD_ELEMENT_ID,
};
use crate::components::navigation::{ErrorBanner, LoadingCard, ScreenHeader};
use crate::config::AppConfig;
use crate::image_processing::{self, SelectedImage};
use crate::models::AnalysisResult;
use crate::services::{self, Lookup};
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::time::Duration;

/// Checks the picture and, if it decodes, runs the analysis on it
async fn start_analysis(
    data_url: String,
    delay: Duration,
    mut selected: Signal<Option<SelectedImage>>,
    mut analysis: Signal<Lookup<AnalysisResult>>,
    mut image_error: Signal<Option<String>>,
) {
    match image_processing::inspect_data_url(&data_url) {
        Ok(image) => {
            image_error.set(None);
            selected.set(Some(image.clone()));
            analysis.set(Lookup::Loading);
            let result = services::analyze_image(&image, delay).await;
            analysis.set(Lookup::Ready(result));
        }
        Err(e) => {
            log::warn!("Rejected image: {}", e);
            selected.set(None);
            analysis.set(Lookup::Idle);
            image_error.set(Some(t!(e.message_key())));
        }
    }
}

#[component]
pub fn ImageAnalysisScreen(on_back: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let delay = config.delays.image_analysis();
    let mut camera_state = use_signal(|| CameraState::Closed);
    let selected = use_signal(|| None::<SelectedImage>);
    let analysis = use_signal(|| Lookup::<AnalysisResult>::Idle);
    let mut image_error = use_signal(|| None::<String>);

    // the stream must not outlive the screen
    use_drop(|| WebCamera::default().release());

    let open_camera = move |_| {
        camera_state.set(CameraState::Opening);
        spawn(async move {
            let mut device = WebCamera::default();
            camera_state.set(camera::start_camera(&mut device).await);
        });
    };

    let capture = move |_| {
        spawn(async move {
            let mut device = WebCamera::default();
            let frame = camera::take_photo(&mut device).await;
            camera_state.set(CameraState::Closed);
            match frame {
                Ok(data_url) => {
                    start_analysis(data_url, delay, selected, analysis, image_error).await
                }
                Err(e) => image_error.set(Some(t!(e.message_key()))),
            }
        });
    };

    let close_camera = move |_| {
        WebCamera::default().release();
        camera_state.set(CameraState::Closed);
    };

    let upload = move |_| {
        spawn(async move {
            if let Some(data_url) = camera::pick_image().await {
                start_analysis(data_url, delay, selected, analysis, image_error).await;
            }
        });
    };

    let state = camera_state.read().clone();
    let preview_visible = matches!(state, CameraState::Opening | CameraState::Streaming);
    let busy = analysis.read().is_loading();

    rsx! {
        div { style: "min-height: 100vh; padding: 16px; background: linear-gradient(135deg, #e8f5e9, #e3f2fd);",
            div { style: "max-width: 1100px; margin: 0 auto;",
                ScreenHeader {
                    title: t!("image-title"),
                    subtitle: t!("image-subtitle"),
                    accent: "#2e7d32",
                    on_back: move |_| on_back.call(()),
                }

                if let Some(message) = image_error() {
                    ErrorBanner { message }
                }

                div { class: "card", style: "margin-bottom: 20px;",
                    input {
                        id: UPLOAD_ELEMENT_ID,
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none;",
                    }

                    div { style: if preview_visible { "margin-bottom: 16px;" } else { "display: none;" },
                        video {
                            id: PREVIEW_ELEMENT_ID,
                            autoplay: true,
                            playsinline: true,
                            muted: true,
                            style: "width: 100%; max-height: 420px; border-radius: 8px; background: #000;",
                        }
                    }

                    if let CameraState::Failed(err) = &state {
                        div { style: "background: #fff3e0; border: 1px solid #ffcc80; color: #e65100; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                            "📷 "
                            {t!(err.message_key())}
                        }
                    }

                    div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
                        match &state {
                            CameraState::Streaming => rsx! {
                                button { class: "btn-success", style: "flex: 1; padding: 12px;", onclick: capture,
                                    "📸 "
                                    {t!("image-capture")}
                                }
                                button { class: "btn-secondary", style: "flex: 1; padding: 12px;", onclick: close_camera,
                                    {t!("image-close-camera")}
                                }
                            },
                            CameraState::Opening => rsx! {
                                button { class: "btn-secondary", style: "flex: 1; padding: 12px;", disabled: true,
                                    {t!("image-opening-camera")}
                                }
                            },
                            CameraState::Failed(_) => rsx! {
                                button { class: "btn-secondary", style: "flex: 1; padding: 12px;", disabled: busy, onclick: open_camera,
                                    "🔄 "
                                    {t!("image-try-again")}
                                }
                            },
                            CameraState::Closed => rsx! {
                                button { class: "btn-primary", style: "flex: 1; padding: 12px;", disabled: busy, onclick: open_camera,
                                    "📷 "
                                    {t!("image-camera")}
                                }
                            },
                        }
                        if !matches!(state, CameraState::Streaming | CameraState::Opening) {
                            button { class: "btn-secondary", style: "flex: 1; padding: 12px;", disabled: busy, onclick: upload,
                                "⬆️ "
                                {t!("image-upload")}
                            }
                        }
                    }

                    if let Some(image) = selected() {
                        div { style: "margin-top: 16px; text-align: center;",
                            img {
                                src: "{image.data_url}",
                                style: "max-width: 100%; max-height: 320px; border-radius: 8px;",
                            }
                            p { style: "font-size: 12px; color: #777;",
                                "{image.summary()}"
                            }
                        }
                    }
                }

                match &*analysis.read() {
                    Lookup::Idle => rsx! {},
                    Lookup::Loading => rsx! {
                        LoadingCard { message: t!("image-analyzing") }
                    },
                    Lookup::Ready(result) => rsx! {
                        AnalysisReport { result: result.clone() }
                    },
                }
            }
        }
    }
}

#[component]
fn AnalysisReport(result: AnalysisResult) -> Element {
    rsx! {
        div { class: "card",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h2 { style: "font-size: 18px; margin: 0;", "✅ " {t!("image-results")} }
                span { class: "badge", {t!("image-confidence", confidence: result.confidence)} }
            }

            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 12px; margin-bottom: 16px;",
                div { style: "padding: 12px; background: #efebe9; border-radius: 8px;",
                    div { style: "font-size: 13px; color: #666;", {t!("image-soil-type")} }
                    div { style: "font-weight: 600;", "{result.soil_type} · {result.soil_health}" }
                }
                div { style: "padding: 12px; background: #e8f5e9; border-radius: 8px;",
                    div { style: "font-size: 13px; color: #666;", {t!("image-crop-health")} }
                    div { style: "font-weight: 600;", "{result.crop_type} · {result.crop_health}" }
                }
            }

            h3 { style: "font-size: 16px; margin: 0 0 12px 0;", {t!("image-recommendations")} }
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 12px;",
                RecommendationList { icon: "🌡️", title: t!("image-weather"), items: result.weather_recommendations.clone() }
                RecommendationList { icon: "🐛", title: t!("image-pesticides"), items: result.pesticide_recommendations.clone() }
                RecommendationList { icon: "🧪", title: t!("image-chemicals"), items: result.chemical_requirements.clone() }
            }
        }
    }
}

#[component]
fn RecommendationList(icon: &'static str, title: String, items: Vec<String>) -> Element {
    rsx! {
        div { style: "padding: 12px; background: #fafafa; border-radius: 8px;",
            div { style: "font-weight: 600; margin-bottom: 8px;", "{icon} {title}" }
            for item in items.iter() {
                p { key: "{item}", style: "font-size: 13px; margin: 0 0 4px 0;", "• {item}" }
            }
        }
    }
}
