//! tracing subscriber setup for the binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `LITEX_LOG` (default `warn`).
/// `LITEX_LOG_FORMAT=json` emits JSON lines instead of text.
pub fn init() {
    let env_filter = EnvFilter::try_from_env("LITEX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_format = std::env::var("LITEX_LOG_FORMAT").unwrap_or_default();

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
