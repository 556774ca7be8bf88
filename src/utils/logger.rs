use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "small_catalog=debug,info"
    } else {
        "small_catalog=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn fmt_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs the global subscriber. `json` switches the compact console format
/// for JSON lines, for when the output is collected by a log shipper.
pub fn init_logger(verbose: bool, json: bool) {
    let (compact, json) = if json {
        (None, Some(fmt_layer().json()))
    } else {
        (Some(fmt_layer().compact()), None)
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(compact)
        .with(json)
        .init();
}
