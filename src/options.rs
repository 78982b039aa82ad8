/// Turns user-typed settings into a validated synthesis request.
use std::path::PathBuf;

use crate::error::{Result, VpeakError};
use crate::fileutils::expand_tilde;
use crate::platform::Capabilities;
use crate::voice::{Emotion, Narrator, Pitch, Speed};

/// Settings exactly as typed. Empty strings mean "not given".
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub narrator: String,
    pub emotion: String,
    pub speed: Option<String>,
    pub pitch: Option<String>,
    pub output: Option<PathBuf>,
    /// `None` when neither `--silent` nor `--play` was given.
    pub silent: Option<bool>,
}

/// Everything about a synthesis except the text. Shared by every file of a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceOptions {
    pub narrator: Option<Narrator>,
    pub emotion: Option<Emotion>,
    pub speed: Option<Speed>,
    pub pitch: Option<Pitch>,
    pub output: Option<PathBuf>,
    pub silent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: VoiceOptions,
}

fn parse_code<T: std::str::FromStr<Err = VpeakError>>(raw: &str) -> Result<Option<T>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

fn parse_number<T: std::str::FromStr<Err = VpeakError>>(raw: Option<&str>) -> Result<Option<T>> {
    raw.map(str::parse::<T>).transpose()
}

impl RawOptions {
    pub fn resolve(&self, capabilities: Capabilities) -> Result<VoiceOptions> {
        let narrator = parse_code::<Narrator>(&self.narrator)?;
        let emotion = parse_code::<Emotion>(&self.emotion)?;
        let speed = parse_number::<Speed>(self.speed.as_deref())?;
        let pitch = parse_number::<Pitch>(self.pitch.as_deref())?;

        if !capabilities.speed_pitch {
            if let Some(s) = speed {
                return Err(VpeakError::invalid("speed", s.to_string(), "engine does not accept speed"));
            }
            if let Some(p) = pitch {
                return Err(VpeakError::invalid("pitch", p.to_string(), "engine does not accept pitch"));
            }
        }

        Ok(VoiceOptions {
            narrator,
            emotion,
            speed,
            pitch,
            output: self.output.as_deref().map(expand_tilde),
            silent: self.silent.unwrap_or(false),
        })
    }
}

impl VoiceOptions {
    pub fn with_text(&self, text: impl Into<String>) -> Result<SynthesisRequest> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(VpeakError::invalid("text", text, "nothing to synthesize"));
        }
        Ok(SynthesisRequest {
            text,
            voice: self.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: Capabilities = Capabilities { speed_pitch: true };

    fn raw(narrator: &str, emotion: &str) -> RawOptions {
        RawOptions {
            narrator: narrator.to_string(),
            emotion: emotion.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_codes_mean_engine_default() {
        let opts = raw("", "").resolve(FULL).unwrap();
        assert_eq!(opts, VoiceOptions::default());
    }

    #[test]
    fn test_valid_codes_resolve() {
        let opts = raw("m2", "sad").resolve(FULL).unwrap();
        assert_eq!(opts.narrator, Some(Narrator::Male2));
        assert_eq!(opts.emotion, Some(Emotion::Sad));
    }

    #[test]
    fn test_bad_narrator_aborts_even_with_good_emotion() {
        let err = raw("zz", "happy").resolve(FULL).unwrap_err();
        assert!(matches!(err, VpeakError::InvalidOption { field: "narrator", ref value, .. } if value == "zz"));
    }

    #[test]
    fn test_bad_emotion_is_rejected() {
        let err = raw("f1", "furious").resolve(FULL).unwrap_err();
        assert!(matches!(err, VpeakError::InvalidOption { field: "emotion", .. }));
    }

    #[test]
    fn test_speed_and_pitch_validated() {
        let mut r = raw("", "");
        r.speed = Some("125".to_string());
        r.pitch = Some("-300".to_string());
        let opts = r.resolve(FULL).unwrap();
        assert_eq!(opts.speed.map(Speed::value), Some(125));
        assert_eq!(opts.pitch.map(Pitch::value), Some(-300));

        r.pitch = Some("301".to_string());
        assert!(matches!(
            r.resolve(FULL),
            Err(VpeakError::InvalidOption { field: "pitch", .. })
        ));
    }

    #[test]
    fn test_speed_without_capability_is_rejected() {
        let mut r = raw("", "");
        r.speed = Some("100".to_string());
        let err = r.resolve(Capabilities { speed_pitch: false }).unwrap_err();
        assert!(matches!(err, VpeakError::InvalidOption { field: "speed", .. }));

        // Nothing requested, nothing to reject.
        assert!(raw("", "").resolve(Capabilities { speed_pitch: false }).is_ok());
    }

    #[test]
    fn test_with_text_rejects_blank() {
        let opts = VoiceOptions::default();
        assert!(matches!(
            opts.with_text("  \n"),
            Err(VpeakError::InvalidOption { field: "text", .. })
        ));
        let req = opts.with_text("hello").unwrap();
        assert_eq!(req.text, "hello");
    }
}
