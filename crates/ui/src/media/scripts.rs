pub(super) fn image_probe_script(src: &str) -> String {
    format!(
        r#"return await new Promise((resolve) => {{
                const img = new Image();
                img.onload = () => resolve(true);
                img.onerror = () => resolve(false);
                img.src = {src:?};
            }});"#
    )
}

// Resolves to "ok" or the DOMException name (NotAllowedError, NotSupportedError, ...).
pub(super) fn audio_play_script(src: &str) -> String {
    format!(
        r#"try {{
                await new Audio({src:?}).play();
                return "ok";
            }} catch (err) {{
                return String((err && err.name) || err);
            }}"#
    )
}

pub(super) fn speech_available_script() -> &'static str {
    r#"return "speechSynthesis" in window;"#
}

pub(super) fn speak_script(text: &str, lang: &str) -> String {
    format!(
        r#"const utterance = new SpeechSynthesisUtterance({text:?});
            utterance.lang = {lang:?};
            window.speechSynthesis.speak(utterance);
            return true;"#
    )
}
