//! Output helpers shared by the CLI commands.

/// True when --quiet was passed.
pub fn is_quiet() -> bool {
    std::env::var("CALLBRIDGE_QUIET").is_ok()
}

/// True when --verbose was passed.
pub fn is_verbose() -> bool {
    std::env::var("CALLBRIDGE_VERBOSE").is_ok()
}

/// Initialize tracing on stderr, honoring RUST_LOG on top of the
/// default directive. Display-sink output stays on stdout.
pub fn init_tracing() {
    let directive = if is_verbose() {
        "callbridge=debug"
    } else {
        "callbridge=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();
}
