//
// ─── MEDIA PATHS ───────────────────────────────────────────────────────────────
//

/// Image shown when an entry's own image fails to load.
pub const FALLBACK_IMAGE_PATH: &str = "FlashCards/assets/images/placeholder.jpg";

/// Locale used for the speech-synthesis fallback.
pub const SPEECH_LANG: &str = "en-US";

/// Prefix under which relative image/audio paths are resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetRoot(String);

impl AssetRoot {
    /// Build a root from a directory or URL prefix. Trailing slashes are dropped.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        let raw = root.into();
        Self(raw.trim().trim_end_matches('/').to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve a relative resource path. Empty roots leave the path untouched.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.0.is_empty() {
            path.to_string()
        } else {
            format!("{}/{path}", self.0)
        }
    }

    #[must_use]
    pub fn fallback_image(&self) -> String {
        self.resolve(FALLBACK_IMAGE_PATH)
    }
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of the image step: the primary source, or the declared fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded { src: String },
    Fallback { src: String },
}

impl ImageOutcome {
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            ImageOutcome::Loaded { src } | ImageOutcome::Fallback { src } => src,
        }
    }
}

/// Result of the audio chain: file playback, speech, or nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioOutcome {
    Played,
    Spoken,
    Silent,
}
