//! Log setup for the `luach` binary.

use tracing_subscriber::EnvFilter;

/// Crates whose events follow `-v`; everything else stays at the default.
const TARGETS: [&str; 2] = ["luach", "luach_cli"];

/// `-v` count to level: none is warn, then info, debug, trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` when set, else the `-v` level for the calendar crates.
fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_for(verbosity);
        EnvFilter::new(TARGETS.map(|target| format!("{target}={level}")).join(","))
    })
}

/// Install the global subscriber. Events are written to stderr; stdout
/// carries only command output, so `--json` stays parseable.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}
