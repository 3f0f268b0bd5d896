//! Log setup for the TUI.
//!
//! The terminal belongs to the interface, so events go to `stint.log` in the
//! data directory instead of stderr. `STINT_LOG` takes `EnvFilter` directives;
//! `--verbose` overrides it with debug output for this crate.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "STINT_LOG";
pub const LOG_FILE: &str = "stint.log";

/// Filter directive used when `STINT_LOG` is unset or invalid
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "stint=debug" } else { "stint=warn" }
}

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(default_directive(true));
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
}

/// Install the global subscriber, appending to `<data_dir>/stint.log`.
///
/// An error means the log file could not be opened; the caller carries on
/// without logging. A subscriber that is already installed is left alone.
pub fn init_logging(data_dir: &Path, verbose: bool) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init();
    Ok(())
}
