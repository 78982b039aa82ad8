//! vpeak: speak text through the VOICEPEAK engine from the command line.

pub mod args;
pub mod audio;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod fileutils;
pub mod logger;
pub mod options;
pub mod platform;
pub mod playback;
pub mod speech;
pub mod voice;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Result, VpeakError};
