//! Optional YAML preferences, so a favourite narrator or output folder doesn't have to be typed
//! every time. Anything given on the command line wins.
//!
//! ```yaml
//! narrator: f2
//! emotion: happy
//! speed: 110
//! output: ~/voicepeak-out
//! ```

use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use yaml_merge_keys::merge_keys_serde;

use crate::error::{Result, VpeakError};
use crate::fileutils::resolve_relative;
use crate::options::RawOptions;
use crate::platform::Settings;

const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub narrator: Option<String>,
    pub emotion: Option<String>,
    pub speed: Option<i32>,
    pub pitch: Option<i32>,
    pub output: Option<PathBuf>,
    pub silent: Option<bool>,
    /// Set to false for engine builds without `--speed`/`--pitch`.
    pub speed_pitch: Option<bool>,
}

/// `~/.config/vpeak/config.yaml` on Linux, the platform equivalents elsewhere.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "savageogre", "vpeak").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl Preferences {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::parse(text).map_err(VpeakError::Config)
    }

    fn parse(text: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
        // An empty file parses as null.
        if value.is_null() {
            return Ok(Self::default());
        }
        let merged = merge_keys_serde(value).map_err(|e| e.to_string())?;
        serde_yaml::from_value(merged).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let context = |e: String| VpeakError::Config(format!("{}: {}", path.display(), e));
        let text = fs::read_to_string(path).map_err(|e| context(e.to_string()))?;
        let mut prefs = Self::parse(&text).map_err(context)?;
        prefs.normalize_paths(path);
        Ok(prefs)
    }

    /// An explicit path must exist. The default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.is_file() => {
                debug!("loading preferences from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn normalize_paths(&mut self, config_path: &Path) {
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        self.output = resolve_relative(base_dir, self.output.as_deref());
    }

    /// Fill in whatever the command line left unset.
    pub fn fill(&self, mut raw: RawOptions) -> RawOptions {
        if raw.narrator.is_empty()
            && let Some(n) = &self.narrator
        {
            raw.narrator = n.clone();
        }
        if raw.emotion.is_empty()
            && let Some(e) = &self.emotion
        {
            raw.emotion = e.clone();
        }
        raw.speed = raw.speed.or_else(|| self.speed.map(|v| v.to_string()));
        raw.pitch = raw.pitch.or_else(|| self.pitch.map(|v| v.to_string()));
        raw.output = raw.output.or_else(|| self.output.clone());
        raw.silent = raw.silent.or(self.silent);
        raw
    }

    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(speed_pitch) = self.speed_pitch {
            settings.capabilities.speed_pitch = speed_pitch;
        }
    }
}
