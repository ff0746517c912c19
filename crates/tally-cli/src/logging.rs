//! `tracing` subscriber setup for the binary.

use tracing_subscriber::filter::EnvFilter;

/// Installs a stderr subscriber. `RUST_LOG` wins over `level`; an invalid
/// `level` falls back to `warn`.
pub fn init_log(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| match EnvFilter::try_new(level) {
            Ok(filter) => Ok(filter),
            Err(e) => {
                eprintln!("invalid log level: {level}, using warn, err is: {e}");
                EnvFilter::try_new("warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
    {
        eprintln!("failed to init logger: {e}");
    }
}
