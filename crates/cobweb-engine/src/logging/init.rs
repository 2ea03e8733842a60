use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once, at info level by default.
///
/// Idempotent; subsequent calls are ignored. Intended usage is early in
/// `main`.
pub fn init() {
    init_with_filter("info");
}

/// Initializes the global logger once with a default filter.
///
/// `default_filter` follows `env_logger` syntax (e.g. "info",
/// "cobweb_clock=debug"). A `RUST_LOG` environment variable, when set,
/// wins over the default.
pub fn init_with_filter(default_filter: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.parse_filters(default_filter),
        };

        builder.init();

        log::debug!("logging initialized");
    });
}
