/// Stand-ins for the engine and the player, so tests never need VOICEPEAK installed.
use hound::{SampleFormat, WavSpec, WavWriter};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::engine::Synthesizer;
use crate::error::{Result, VpeakError};
use crate::platform::{Platform, Settings};
use crate::playback::Player;

/// macOS settings, but with the transient output inside `dir`.
pub fn test_settings(dir: &TempDir) -> Settings {
    let mut settings = Settings::for_platform(Platform::MacOs);
    settings.default_output = dir.path().join("output.wav");
    settings
}

/// Writes a short silent WAV wherever `-o` points (or the default name), and fails for any
/// text containing `FAIL`.
pub struct FakeEngine {
    default_output: PathBuf,
    write_output: bool,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeEngine {
    pub fn new(default_output: &Path) -> Self {
        Self {
            default_output: default_output.to_path_buf(),
            write_output: true,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Exits cleanly without producing a file.
    pub fn writing_nothing(mut self) -> Self {
        self.write_output = false;
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

impl Synthesizer for FakeEngine {
    fn synthesize(&self, args: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(args.to_vec());
        let text = flag_value(args, "-s").unwrap_or_default();
        if text.contains("FAIL") {
            return Err(VpeakError::EngineExecutionFailed("exit status: 1".into()));
        }
        if !self.write_output {
            return Ok(());
        }
        let out = flag_value(args, "-o")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.default_output.clone());
        let spec = WavSpec {
            channels: 1,
            sample_rate: 48_000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&out, spec).map_err(|e| VpeakError::EngineExecutionFailed(e.to_string()))?;
        for _ in 0..4_800 {
            writer
                .write_sample(0i16)
                .map_err(|e| VpeakError::EngineExecutionFailed(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| VpeakError::EngineExecutionFailed(e.to_string()))
    }
}

#[derive(Default)]
pub struct FakePlayer {
    played: RefCell<Vec<PathBuf>>,
}

impl FakePlayer {
    pub fn played(&self) -> Vec<PathBuf> {
        self.played.borrow().clone()
    }
}

impl Player for FakePlayer {
    fn play(&self, path: &Path) -> Result<()> {
        self.played.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
