/// Voice parameters understood by the VOICEPEAK engine: narrators, emotions, speed and pitch.
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::VpeakError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrator {
    Female1,
    Female2,
    Female3,
    Male1,
    Male2,
    Male3,
    Child,
}

impl Narrator {
    pub const ALL: [Narrator; 7] = [
        Narrator::Female1,
        Narrator::Female2,
        Narrator::Female3,
        Narrator::Male1,
        Narrator::Male2,
        Narrator::Male3,
        Narrator::Child,
    ];

    /// Short code typed on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Narrator::Female1 => "f1",
            Narrator::Female2 => "f2",
            Narrator::Female3 => "f3",
            Narrator::Male1 => "m1",
            Narrator::Male2 => "m2",
            Narrator::Male3 => "m3",
            Narrator::Child => "c",
        }
    }

    /// Voice name as the engine knows it.
    pub fn label(self) -> &'static str {
        match self {
            Narrator::Female1 => "Japanese Female 1",
            Narrator::Female2 => "Japanese Female 2",
            Narrator::Female3 => "Japanese Female 3",
            Narrator::Male1 => "Japanese Male 1",
            Narrator::Male2 => "Japanese Male 2",
            Narrator::Male3 => "Japanese Male 3",
            Narrator::Child => "Japanese Female Child",
        }
    }
}

impl FromStr for Narrator {
    type Err = VpeakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Narrator::ALL
            .into_iter()
            .find(|n| n.code() == s)
            .ok_or_else(|| VpeakError::invalid("narrator", s, "expected one of f1, f2, f3, m1, m2, m3, c"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Happy,
    Fun,
    Angry,
    Sad,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [Emotion::Happy, Emotion::Fun, Emotion::Angry, Emotion::Sad];

    pub fn name(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Fun => "fun",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
        }
    }

    /// Engine argument, always at full intensity.
    pub fn intensity(self) -> String {
        format!("{}=100", self.name())
    }
}

impl FromStr for Emotion {
    type Err = VpeakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| VpeakError::invalid("emotion", s, "expected one of happy, fun, angry, sad"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed(i32);

impl Speed {
    pub const RANGE: RangeInclusive<i32> = 50..=200;

    pub fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for Speed {
    type Err = VpeakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ranged("speed", s, Self::RANGE).map(Speed)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch(i32);

impl Pitch {
    pub const RANGE: RangeInclusive<i32> = -300..=300;

    pub fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for Pitch {
    type Err = VpeakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ranged("pitch", s, Self::RANGE).map(Pitch)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_ranged(field: &'static str, s: &str, range: RangeInclusive<i32>) -> Result<i32, VpeakError> {
    let value: i32 = s
        .parse()
        .map_err(|_| VpeakError::invalid(field, s, "not an integer"))?;
    if !range.contains(&value) {
        return Err(VpeakError::invalid(
            field,
            s,
            format!("must be between {} and {}", range.start(), range.end()),
        ));
    }
    Ok(value)
}
