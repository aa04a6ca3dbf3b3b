// Web Speech API bindings
//
// Runs small scripts in the webview through `document::eval`. Works on the web
// renderer and on desktop/mobile webviews that expose the API; elsewhere the
// detection reports nothing available.

use crate::models::{RecognitionError, RecognitionEvent, RecognitionOutcome, SpeechSupport};
use crate::service::SpeechSynthesizer;
use dioxus::prelude::*;

const DETECT_SCRIPT: &str = r#"
return {
    recognition: ('SpeechRecognition' in window) || ('webkitSpeechRecognition' in window),
    synthesis: 'speechSynthesis' in window,
};
"#;

const STOP_SCRIPT: &str = r#"
if (window.__voiceAssistantRecognition) {
    window.__voiceAssistantRecognition.stop();
}
"#;

const CANCEL_SCRIPT: &str = r#"
if ('speechSynthesis' in window) {
    window.speechSynthesis.cancel();
}
"#;

/// Encodes a Rust string as a JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Asks the webview which speech features it has
pub async fn detect_support() -> SpeechSupport {
    match document::eval(DETECT_SCRIPT).join::<SpeechSupport>().await {
        Ok(support) => {
            log::debug!("Speech support detected: {:?}", support);
            support
        }
        Err(e) => {
            log::warn!("Speech capability detection failed: {:?}", e);
            SpeechSupport::default()
        }
    }
}

/// Runs one recognition session and waits for its single final result
pub async fn listen(language_tag: &str) -> RecognitionOutcome {
    let script = format!(
        r#"
const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
if (!Recognition) {{
    dioxus.send({{ kind: "error", value: "unsupported" }});
}} else {{
    const recognition = new Recognition();
    window.__voiceAssistantRecognition = recognition;
    recognition.continuous = false;
    recognition.interimResults = false;
    recognition.lang = {lang};
    let settled = false;
    recognition.onresult = (event) => {{
        settled = true;
        dioxus.send({{ kind: "transcript", value: event.results[0][0].transcript }});
    }};
    recognition.onerror = (event) => {{
        settled = true;
        dioxus.send({{ kind: "error", value: event.error }});
    }};
    recognition.onend = () => {{
        window.__voiceAssistantRecognition = null;
        if (!settled) {{
            dioxus.send({{ kind: "end", value: "" }});
        }}
    }};
    recognition.start();
}}
"#,
        lang = js_string(language_tag)
    );

    let mut eval = document::eval(&script);
    match eval.recv::<RecognitionEvent>().await {
        Ok(event) => event.into(),
        Err(e) => {
            log::error!("Speech recognition bridge failed: {:?}", e);
            RecognitionOutcome::Failed(RecognitionError::DeviceUnreadable)
        }
    }
}

/// Stops a running recognition session. The pending [`listen`] resolves
/// with [`RecognitionOutcome::Ended`].
pub fn stop_listening() {
    let _ = document::eval(STOP_SCRIPT);
}

/// `speechSynthesis` backed synthesizer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebSpeechSynthesizer;

impl SpeechSynthesizer for WebSpeechSynthesizer {
    fn speak(&mut self, text: &str, language_tag: &str) {
        let script = format!(
            r#"
if ('speechSynthesis' in window) {{
    const utterance = new SpeechSynthesisUtterance({text});
    utterance.lang = {lang};
    utterance.rate = 0.9;
    window.speechSynthesis.speak(utterance);
}}
"#,
            text = js_string(text),
            lang = js_string(language_tag)
        );
        let _ = document::eval(&script);
    }

    fn cancel(&mut self) {
        let _ = document::eval(CANCEL_SCRIPT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(js_string("मौसम"), "\"मौसम\"");
    }
}
