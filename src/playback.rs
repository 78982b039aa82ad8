use log::{debug, info};
use std::fs;
use std::path::Path;
use std::process::Command;

use crate::args::OutputTarget;
use crate::error::{Result, VpeakError};
use crate::platform::PlayerCommand;

pub trait Player {
    /// Play `path` and return once playback has finished.
    fn play(&self, path: &Path) -> Result<()>;
}

/// Shells out to the OS player, eg: `afplay output.wav`.
#[derive(Debug, Clone)]
pub struct NativePlayer {
    command: PlayerCommand,
}

impl NativePlayer {
    pub fn new(command: PlayerCommand) -> Self {
        Self { command }
    }
}

impl Player for NativePlayer {
    fn play(&self, path: &Path) -> Result<()> {
        debug!("playing {} with {}", path.display(), self.command.program);
        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(path)
            .status()
            .map_err(|e| VpeakError::PlaybackFailed(e.to_string()))?;
        if !status.success() {
            return Err(VpeakError::PlaybackFailed(status.to_string()));
        }
        Ok(())
    }
}

/// Play the result unless silent, then drop it if this run owns it. A silent run keeps even a
/// transient file.
pub fn finish(target: &OutputTarget, silent: bool, player: &dyn Player) -> Result<()> {
    if silent {
        return Ok(());
    }
    player.play(&target.path)?;

    if target.is_transient() {
        fs::remove_file(&target.path).map_err(|source| VpeakError::CleanupFailed {
            path: target.path.clone(),
            source,
        })?;
        info!("removed {}", target.path.display());
    }
    Ok(())
}
