use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::error::{PixmorphError, PixmorphResult};

const MAX_PAUSE_MS: u64 = 60 * 60 * 1000;

/// Playback pacing, loadable from JSON. Missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackSettings {
    /// Pause after each morph frame, in milliseconds.
    pub frame_pause_ms: u64,
    /// Pause between showing the input and output of a one-shot comparison, in milliseconds.
    pub compare_pause_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            frame_pause_ms: 500,
            compare_pause_ms: 3000,
        }
    }
}

impl PlaybackSettings {
    pub fn validate(&self) -> PixmorphResult<()> {
        for (name, v) in [
            ("frame_pause_ms", self.frame_pause_ms),
            ("compare_pause_ms", self.compare_pause_ms),
        ] {
            if v > MAX_PAUSE_MS {
                return Err(PixmorphError::validation(format!(
                    "{name} must be at most {MAX_PAUSE_MS}, got {v}"
                )));
            }
        }
        Ok(())
    }

    pub fn frame_pause(&self) -> Duration {
        Duration::from_millis(self.frame_pause_ms)
    }

    pub fn compare_pause(&self) -> Duration {
        Duration::from_millis(self.compare_pause_ms)
    }

    pub fn from_json_str(json: &str) -> PixmorphResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| PixmorphError::validation(format!("invalid playback settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: &Path) -> PixmorphResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("open playback settings '{}'", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
