/// Per-OS constants: where the engine lives, how audio is played, and the default output name.
use std::path::PathBuf;

use crate::error::{Result, VpeakError};

/// File the engine writes when no output path is given.
pub const DEFAULT_WAV_NAME: &str = "output.wav";
pub const AUDIO_EXT: &str = "wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
}

impl Platform {
    pub fn current() -> Result<Self> {
        if cfg!(target_os = "macos") {
            Ok(Platform::MacOs)
        } else if cfg!(target_os = "windows") {
            Ok(Platform::Windows)
        } else {
            Err(VpeakError::UnsupportedPlatform(std::env::consts::OS))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    /// Arguments placed before the file path.
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub speed_pitch: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub engine_path: PathBuf,
    pub player: PlayerCommand,
    pub default_output: PathBuf,
    pub audio_ext: &'static str,
    pub capabilities: Capabilities,
}

impl Settings {
    pub fn for_platform(platform: Platform) -> Self {
        let (engine_path, player) = match platform {
            Platform::MacOs => (
                "/Applications/voicepeak.app/Contents/MacOS/voicepeak",
                PlayerCommand {
                    program: "afplay".to_string(),
                    args: vec![],
                },
            ),
            Platform::Windows => (
                r"C:\Program Files\VOICEPEAK\voicepeak.exe",
                PlayerCommand {
                    program: "cmd".to_string(),
                    args: vec!["/c".to_string(), "start".to_string(), "".to_string()],
                },
            ),
        };
        Settings {
            engine_path: PathBuf::from(engine_path),
            player,
            default_output: PathBuf::from(DEFAULT_WAV_NAME),
            audio_ext: AUDIO_EXT,
            capabilities: Capabilities { speed_pitch: true },
        }
    }

    pub fn current() -> Result<Self> {
        Ok(Self::for_platform(Platform::current()?))
    }
}
