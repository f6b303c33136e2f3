//! Capture configuration
//!
//! Loaded from the following sources, lowest to highest priority:
//! 1. built-in defaults
//! 2. `capture.toml` in the working directory (optional)
//! 3. Environment variables (`TRAZAPP_CAPTURE_KEY`)

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureConfig {
    /// Logical viewport width in CSS pixels
    pub width: u32,
    /// Logical viewport height in CSS pixels
    pub height: u32,
    /// Device pixel ratio applied to the output image
    pub scale: f32,
    /// Frames simulated before the capture
    pub warmup_frames: u32,
    /// Seed for particle placement
    pub seed: u64,
    /// Optional pointer position in logical pixels
    pub pointer: Option<[f32; 2]>,
    /// Page background behind the particles, `#RRGGBB`
    pub background: String,
    /// Output PNG path
    pub output: PathBuf,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            scale: 2.0,
            warmup_frames: 240,
            seed: 42,
            pointer: None,
            background: "#020617".to_string(),
            output: PathBuf::from("Graficos/Fondo_Aurora_Antigravity.png"),
        }
    }
}

impl CaptureConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from("capture.toml")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(CaptureConfig::default()));
        if path.as_ref().exists() {
            figment = figment.merge(Toml::file(path.as_ref()));
        }
        figment
            .merge(Env::prefixed("TRAZAPP_CAPTURE_"))
            .extract()
    }

    /// Device pixels per logical pixel, never below 0.1.
    pub fn effective_scale(&self) -> f32 {
        self.scale.max(0.1)
    }

    /// Output image size in device pixels.
    pub fn output_size(&self) -> (u32, u32) {
        let scale = self.effective_scale();
        (
            ((self.width as f32) * scale).round().max(1.0) as u32,
            ((self.height as f32) * scale).round().max(1.0) as u32,
        )
    }
}
