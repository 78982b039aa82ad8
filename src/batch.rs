/// Batch mode: every `.txt` in a directory becomes a `.wav` of the same name.
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::OutputTarget;
use crate::error::{Result, VpeakError};
use crate::fileutils::{audio_file_name, list_text_files};
use crate::options::VoiceOptions;
use crate::speech::Pipeline;

#[derive(Debug, Default)]
pub struct BatchReport {
    pub produced: Vec<PathBuf>,
    /// Input file and why it was skipped.
    pub skipped: Vec<(PathBuf, String)>,
}

/// `voice.output`, when set, is a directory to write into instead of `dir`.
///
/// A file that can't be read or synthesized is logged and skipped. Listing `dir`, creating the
/// output directory, or a missing engine stops the whole batch.
pub fn process_text_files(dir: &Path, voice: &VoiceOptions, pipeline: &Pipeline) -> Result<BatchReport> {
    let files = list_text_files(dir)?;
    let output_dir = voice.output.as_deref();
    if let Some(out) = output_dir {
        fs::create_dir_all(out).map_err(|source| VpeakError::OutputDirFailed {
            path: out.to_path_buf(),
            source,
        })?;
    }
    info!("found {} text file(s) in {}", files.len(), dir.display());

    let mut report = BatchReport::default();
    for file in files {
        match process_one(&file, dir, output_dir, voice, pipeline) {
            Ok(produced) => report.produced.push(produced),
            Err(e) if e.is_batch_recoverable() => {
                warn!("skipping {}: {}", file.display(), e);
                report.skipped.push((file, e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

fn process_one(
    file: &Path,
    dir: &Path,
    output_dir: Option<&Path>,
    voice: &VoiceOptions,
    pipeline: &Pipeline,
) -> Result<PathBuf> {
    let text = fs::read_to_string(file).map_err(|source| VpeakError::FileReadFailed {
        path: file.to_path_buf(),
        source,
    })?;
    let request = voice.with_text(text)?;

    // list_text_files only returns paths with a file name.
    let name = file.file_name().map(Path::new).unwrap_or(file);
    let target = OutputTarget::for_batch_item(
        output_dir,
        dir,
        &audio_file_name(name, pipeline.settings.audio_ext),
    );
    pipeline.speak(&request, &target)?;
    Ok(target.path)
}
