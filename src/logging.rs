// src/logging.rs
// =============================================================================
// Logging setup for the command-line tool.
//
// Log lines go to stderr so stdout only ever holds results (which matters
// when piping --json output into another program).
//
// What gets shown:
// - RUST_LOG wins if it is set (e.g. RUST_LOG=basics_tour=trace)
// - Otherwise -v picks the level: none = warn, -v = info, -vv and up = debug
// =============================================================================

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Maps the number of -v flags to a filter directive for this crate
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "basics_tour=warn,warn",
        1 => "basics_tour=info,warn",
        _ => "basics_tour=debug,warn",
    }
}

// Installs the global tracing subscriber. Call once, at startup.
pub fn init_cli(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "basics_tour=warn,warn");
        assert_eq!(default_directive(1), "basics_tour=info,warn");
        assert_eq!(default_directive(2), "basics_tour=debug,warn");
        assert_eq!(default_directive(7), "basics_tour=debug,warn");
    }
}
