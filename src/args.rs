/// Builds the engine's argument vector and decides where its output lands.
use std::path::{Path, PathBuf};

use crate::options::SynthesisRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Written to the default name for this run only, removed once it has been played.
    Transient,
    /// The user asked for this file, so it stays.
    Kept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub ownership: Ownership,
}

impl OutputTarget {
    /// Single-text mode.
    pub fn for_text(output: Option<&Path>, default_output: &Path) -> Self {
        match output {
            Some(path) => OutputTarget {
                path: path.to_path_buf(),
                ownership: Ownership::Kept,
            },
            None => OutputTarget {
                path: default_output.to_path_buf(),
                ownership: Ownership::Transient,
            },
        }
    }

    /// Batch mode: `file_name` goes in the configured output directory, or next to the input.
    pub fn for_batch_item(output_dir: Option<&Path>, input_dir: &Path, file_name: &Path) -> Self {
        OutputTarget {
            path: output_dir.unwrap_or(input_dir).join(file_name),
            ownership: Ownership::Kept,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.ownership == Ownership::Transient
    }
}

/// Option flags first, `-s <text>` always last. A transient target gets no `-o`; the engine
/// already writes to the default name on its own.
pub fn build_arguments(request: &SynthesisRequest, target: &OutputTarget) -> Vec<String> {
    let voice = &request.voice;
    let mut args: Vec<String> = Vec::new();

    if !target.is_transient() {
        args.push("-o".to_string());
        args.push(target.path.to_string_lossy().into_owned());
    }
    if let Some(emotion) = voice.emotion {
        args.push("--emotion".to_string());
        args.push(emotion.intensity());
    }
    if let Some(narrator) = voice.narrator {
        args.push("--narrator".to_string());
        args.push(narrator.label().to_string());
    }
    if let Some(speed) = voice.speed {
        args.push("--speed".to_string());
        args.push(speed.to_string());
    }
    if let Some(pitch) = voice.pitch {
        args.push("--pitch".to_string());
        args.push(pitch.to_string());
    }

    args.push("-s".to_string());
    args.push(request.text.clone());
    args
}
