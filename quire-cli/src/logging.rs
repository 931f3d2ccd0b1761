//! Logging setup.
//!
//! Logs go to stderr so stdout stays clean for the rendered lines.
//! `RUST_LOG` wins over the verbosity flag when set.

use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quire={level},quire_cli={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
