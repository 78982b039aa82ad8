use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::args::{OutputTarget, build_arguments};
use crate::audio::inspect_wav;
use crate::engine::Synthesizer;
use crate::error::{Result, VpeakError};
use crate::options::SynthesisRequest;
use crate::platform::Settings;
use crate::playback::{Player, finish};

/// One text in, one audio file out. Shared by single-text and batch mode.
pub struct Pipeline<'a> {
    pub settings: &'a Settings,
    pub engine: &'a dyn Synthesizer,
    pub player: &'a dyn Player,
}

impl<'a> Pipeline<'a> {
    pub fn new(settings: &'a Settings, engine: &'a dyn Synthesizer, player: &'a dyn Player) -> Self {
        Self {
            settings,
            engine,
            player,
        }
    }

    /// Single-text mode. Returns where the audio was written; a transient file is already gone
    /// by then unless the run was silent.
    pub fn generate_speech(&self, request: &SynthesisRequest) -> Result<PathBuf> {
        let target = OutputTarget::for_text(request.voice.output.as_deref(), &self.settings.default_output);
        self.speak(request, &target)?;
        Ok(target.path)
    }

    pub fn speak(&self, request: &SynthesisRequest, target: &OutputTarget) -> Result<()> {
        let args = build_arguments(request, target);
        self.engine.synthesize(&args)?;
        report_output(&target.path)?;
        finish(target, request.voice.silent, self.player)
    }
}

/// The engine has been seen to exit 0 without writing anything, so check.
fn report_output(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(VpeakError::EngineExecutionFailed(format!(
            "engine produced no output at {}",
            path.display()
        )));
    }
    match inspect_wav(path) {
        Ok(audio) => info!(
            "wrote {} ({:.1}s, {} Hz)",
            path.display(),
            audio.duration().as_secs_f32(),
            audio.sample_rate
        ),
        Err(e) => warn!("wrote {} but could not read it as WAV: {}", path.display(), e),
    }
    Ok(())
}
