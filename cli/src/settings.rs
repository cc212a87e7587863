//! Composer settings
//!
//! Settings are read from a JSON file. Every field has a default, so a
//! partial file only overrides what it names. A missing file gives the
//! defaults; a file that cannot be parsed logs a warning and gives the
//! defaults too.

use layout_engine::{CanvasSize, LayoutConfig};
use quiz_model::RevealTiming;
use render_model::Palette;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use text_engine::discovery::DEFAULT_FONT_CANDIDATES;
use text_engine::{FontProbe, FontSizes};

/// Font lookup and sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Font files tried in order
    pub candidates: Vec<PathBuf>,
    /// Ask the system for a monospace face when no candidate loads
    pub use_system_fallback: bool,
    pub sizes: FontSizes,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            use_system_fallback: true,
            sizes: FontSizes::default(),
        }
    }
}

impl FontSettings {
    pub fn probe(&self) -> FontProbe {
        let probe = FontProbe::new(self.candidates.iter().cloned());
        if self.use_system_fallback {
            probe
        } else {
            probe.without_system_fallback()
        }
    }
}

/// Where results are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// The card image; `.jpg`/`.jpeg` selects JPEG, anything else PNG
    pub image: PathBuf,
    /// Copy of the record the card was made from
    pub record: PathBuf,
    /// Answer-reveal sidecar for the video stage
    pub overlay: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            image: PathBuf::from("output/question_image.png"),
            record: PathBuf::from("output/question_data.json"),
            overlay: PathBuf::from("output/answer_overlay.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas: CanvasSize,
    pub fonts: FontSettings,
    /// Background image; a flat color is used if it cannot be read
    pub background: PathBuf,
    pub output: OutputPaths,
    pub timing: RevealTiming,
    pub layout: LayoutConfig,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            fonts: FontSettings::default(),
            background: PathBuf::from("assets/background.jpg"),
            output: OutputPaths::default(),
            timing: RevealTiming::default(),
            layout: LayoutConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read settings file, using defaults: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.canvas, CanvasSize::new(1080, 1920));
        assert_eq!(settings.timing.reveal_duration_secs(), 3.0);
        assert_eq!(settings.fonts.sizes.title, 65.0);
        assert!(settings.fonts.use_system_fallback);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"canvas": {"width": 720, "height": 1280}, "timing": {"duration_secs": 20.0}}"#,
        )
        .unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.canvas, CanvasSize::new(720, 1280));
        assert_eq!(settings.timing.duration_secs, 20.0);
        assert_eq!(settings.timing.reveal_start_secs, 12.0);
        assert_eq!(settings.layout, LayoutConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut settings = Settings::default();
        settings.fonts.use_system_fallback = false;
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_probe_follows_settings() {
        let settings = FontSettings {
            candidates: vec![PathBuf::from("a.ttf")],
            use_system_fallback: false,
            sizes: FontSizes::default(),
        };
        assert_eq!(settings.probe().candidates(), &[PathBuf::from("a.ttf")]);
    }
}
