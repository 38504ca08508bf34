use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber for the CLI. Logs go to stderr so command
/// output on stdout stays clean.
///
/// `RUST_LOG` overrides the default filter. Calling this twice is a no-op.
pub fn init(verbose: bool, json: bool) {
    let default = if verbose {
        "practica=debug,warn"
    } else {
        "practica=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let registry = tracing_subscriber::registry().with(filter);
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let _ = if json {
        registry.with(fmt.json()).try_init()
    } else {
        registry.with(fmt.compact()).try_init()
    };
}
