use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Logs go to stderr so stdout only carries the final confirmation line. `RUST_LOG` still wins
/// over `verbose` when it is set.
pub fn init(verbose: bool) {
    let mut builder = Builder::new();

    builder
        .format_timestamp_secs()
        .target(Target::Stderr)
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .format(|buf, record| {
            let ts = buf.timestamp();
            writeln!(buf, "[{}] {}: {}", ts, record.level(), record.args())
        });

    builder.init();
}
