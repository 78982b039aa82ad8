/// Runs the VOICEPEAK executable.
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, VpeakError};

pub trait Synthesizer {
    /// Run one synthesis to completion.
    fn synthesize(&self, args: &[String]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct VoicepeakEngine {
    path: PathBuf,
}

impl VoicepeakEngine {
    /// Fails with `EngineNotFound` if nothing runnable is installed at `path`.
    pub fn locate(path: &Path) -> Result<Self> {
        if !is_executable(path) {
            return Err(VpeakError::EngineNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!("using engine at {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl Synthesizer for VoicepeakEngine {
    fn synthesize(&self, args: &[String]) -> Result<()> {
        debug!("{} {:?}", self.path.display(), args);
        let output = Command::new(&self.path)
            .args(args)
            .output()
            .map_err(|e| VpeakError::EngineExecutionFailed(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            debug!("engine stdout: {}", stdout.trim());
        }
        if !stderr.trim().is_empty() {
            debug!("engine stderr: {}", stderr.trim());
        }

        if !output.status.success() {
            let mut msg = output.status.to_string();
            if !stderr.trim().is_empty() {
                msg = format!("{msg}: {}", stderr.trim());
            }
            return Err(VpeakError::EngineExecutionFailed(msg));
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_locate_missing_engine() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("voicepeak");
        assert!(matches!(
            VoicepeakEngine::locate(&missing),
            Err(VpeakError::EngineNotFound { path }) if path == missing
        ));
    }

    #[test]
    fn test_locate_rejects_non_executable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("voicepeak");
        fs::write(&path, "not a program").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(VoicepeakEngine::locate(&path).is_err());
    }

    #[test]
    fn test_synthesize_passes_arguments_in_order() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("args.log");
        let engine_path = script(
            &dir,
            "voicepeak",
            &format!("for a in \"$@\"; do echo \"$a\" >> '{}'; done", log.display()),
        );
        let engine = VoicepeakEngine::locate(&engine_path).unwrap();
        let args: Vec<String> = ["--narrator", "Japanese Female 1", "-s", "hello world"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        engine.synthesize(&args).unwrap();

        let logged = fs::read_to_string(&log).unwrap();
        assert_eq!(logged.lines().collect::<Vec<_>>(), args);
    }

    #[test]
    fn test_non_zero_exit_is_execution_failure() {
        let dir = TempDir::new().unwrap();
        let engine_path = script(&dir, "voicepeak", "echo 'license expired' >&2\nexit 3");
        let engine = VoicepeakEngine::locate(&engine_path).unwrap();
        let err = engine.synthesize(&["-s".to_string(), "x".to_string()]).unwrap_err();
        match err {
            VpeakError::EngineExecutionFailed(msg) => assert!(msg.contains("license expired")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
