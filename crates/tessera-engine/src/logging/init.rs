use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tessera_engine=debug,tessera_studio=trace"). When unset, `RUST_LOG` is
/// consulted, then the level falls back to `Info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Picks the filter string: explicit config, then `env`, else `None` for the
/// `Info` default.
fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> Option<String> {
    config.env_filter.clone().or(env)
}

fn builder(config: &LoggingConfig) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    match resolve_filter(config, std::env::var("RUST_LOG").ok()) {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => {
            builder.filter_level(log::LevelFilter::Info);
        }
    }
    builder.write_style(config.write_style);
    builder
}

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // Another logger may already be installed (e.g. by a test harness).
        if builder(&config).try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
