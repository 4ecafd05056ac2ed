use tracing_subscriber::EnvFilter;

// RUST_LOG wins over the default directive; LOG_FORMAT=json switches to JSON lines.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    let installed = if matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")) {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.compact().try_init()
    };

    // A subscriber is already installed when the library runs inside a host.
    if installed.is_err() {
        return;
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}
