use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

use vpeak::batch::process_text_files;
use vpeak::config::Preferences;
use vpeak::engine::{Synthesizer, VoicepeakEngine};
use vpeak::logger;
use vpeak::options::RawOptions;
use vpeak::platform::Settings;
use vpeak::playback::{NativePlayer, Player};
use vpeak::speech::Pipeline;
use vpeak::Result;

const VOICE_HELP: &str = "\
Narrator options:
  f1: Japanese Female 1
  f2: Japanese Female 2
  f3: Japanese Female 3
  m1: Japanese Male 1
  m2: Japanese Male 2
  m3: Japanese Male 3
  c:  Japanese Female Child

Emotion options:
  happy, fun, angry, sad";

/// Long flags that also work with a single dash, eg: `-speed 120`.
const SINGLE_DASH_LONG: [&str; 7] = ["speed", "pitch", "silent", "play", "help", "verbose", "config"];

#[derive(Parser, Debug)]
#[command(
    author = "Savage Ogre",
    version,
    about = "speak text through VOICEPEAK",
    after_help = VOICE_HELP
)]
struct Args {
    #[arg(short = 'd', long = "dir", help = "Directory to read .txt files from")]
    dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "out",
        help = "Output file, or output directory when used with -d"
    )]
    out: Option<PathBuf>,

    #[arg(
        short = 'n',
        long = "narrator",
        default_value = "",
        hide_default_value = true,
        help = "Specify the narrator. See below for options."
    )]
    narrator: String,

    #[arg(
        short = 'e',
        long = "emotion",
        default_value = "",
        hide_default_value = true,
        help = "Specify the emotion. See below for options."
    )]
    emotion: String,

    #[arg(long = "speed", help = "Speech speed (50 - 200)")]
    speed: Option<String>,

    #[arg(
        long = "pitch",
        allow_negative_numbers = true,
        help = "Speech pitch (-300 - 300)"
    )]
    pitch: Option<String>,

    #[arg(long = "silent", help = "Do not play the generated audio")]
    silent: bool,

    #[arg(
        long = "play",
        conflicts_with = "silent",
        help = "Play the generated audio even if preferences say silent"
    )]
    play: bool,

    #[arg(short = 'c', long = "config", help = "optional path to a YAML preferences file")]
    config: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "verbose level logging")]
    verbose: bool,

    #[arg(required_unless_present = "dir", help = "Text to speak")]
    text: Option<String>,
}

/// Rewrites `-speed` to `--speed` and friends. Anything after a bare `--` is left alone.
fn normalize_flags(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let rewritten = arg
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .filter(|rest| {
                let name = rest.split('=').next().unwrap_or(rest);
                SINGLE_DASH_LONG.contains(&name)
            })
            .map(|rest| format!("--{rest}"));
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

type Tools = (Box<dyn Synthesizer>, Box<dyn Player>);

fn native_tools(settings: &Settings) -> Result<Tools> {
    let engine: Box<dyn Synthesizer> = Box::new(VoicepeakEngine::locate(&settings.engine_path)?);
    let player: Box<dyn Player> = Box::new(NativePlayer::new(settings.player.clone()));
    Ok((engine, player))
}

fn run(args: Args) -> Result<()> {
    let prefs = Preferences::discover(args.config.as_deref())?;
    let mut settings = Settings::current()?;
    prefs.apply_to(&mut settings);
    run_with(args, &prefs, &settings, native_tools)
}

/// `tools` is only called once every option and the text have been validated.
fn run_with(
    args: Args,
    prefs: &Preferences,
    settings: &Settings,
    tools: impl FnOnce(&Settings) -> Result<Tools>,
) -> Result<()> {
    let silent = match (args.silent, args.play) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let raw = prefs.fill(RawOptions {
        narrator: args.narrator,
        emotion: args.emotion,
        speed: args.speed,
        pitch: args.pitch,
        output: args.out,
        silent,
    });
    let voice = raw.resolve(settings.capabilities)?;

    match args.dir {
        Some(dir) => with_pipeline(settings, tools, |pipeline| {
            let report = process_text_files(&dir, &voice, pipeline)?;
            info!(
                "{} produced, {} skipped",
                report.produced.len(),
                report.skipped.len()
            );
            Ok(())
        }),
        None => {
            let request = voice.with_text(args.text.unwrap_or_default())?;
            with_pipeline(settings, tools, |pipeline| {
                let path = pipeline.generate_speech(&request)?;
                debug!("done with {}", path.display());
                Ok(())
            })
        }
    }
}

fn with_pipeline(
    settings: &Settings,
    tools: impl FnOnce(&Settings) -> Result<Tools>,
    f: impl FnOnce(&Pipeline) -> Result<()>,
) -> Result<()> {
    let (engine, player) = tools(settings)?;
    f(&Pipeline::new(settings, engine.as_ref(), player.as_ref()))
}

/// Prints the outcome and picks the process exit status.
fn report(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => {
            println!("Commands executed successfully");
            0
        }
        Err(e) => {
            eprintln!("vpeak: {e}");
            1
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_flags(std::env::args()));
    logger::init(args.verbose);
    ExitCode::from(report(&run(args)))
}
