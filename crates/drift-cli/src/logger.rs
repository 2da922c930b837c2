//! Logging setup for the drift CLI.
//!
//! Log lines go to stderr so that `--json` output on stdout stays parseable.
//!
//! The filter is picked in this order:
//! 1. `--verbose`: debug for the drift crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for the drift crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "drift=debug,drift_graph=debug,drift_cli=debug";
const QUIET_FILTER: &str = "drift=error,drift_graph=error,drift_cli=error";
const DEFAULT_FILTER: &str = "drift=info,drift_graph=info,drift_cli=info";

/// Pick the filter directives for the given flags.
///
/// `None` means "defer to `RUST_LOG`".
fn filter_directives(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}

/// Initialize the tracing subscriber.
///
/// Call once, before any logging. A second call is ignored.
///
/// ```rust,no_run
/// use drift_cli::logger::init_logger;
///
/// init_logger(false, false, false);
/// tracing::info!("building graph");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match filter_directives(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    init_logger_with_filter(filter, no_color);
}

/// Initialize the logger with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // Already initialized (e.g. by a test harness): keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Whether ANSI colors should be used on the terminal.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise the terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_verbose_wins_over_quiet() {
        assert_eq!(filter_directives(true, true), Some(VERBOSE_FILTER));
        assert_eq!(filter_directives(false, true), Some(QUIET_FILTER));
        assert_eq!(filter_directives(false, false), None);
    }

    #[test]
    fn test_filters_parse() {
        for directives in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    #[serial]
    fn test_no_color_overrides_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(should_use_colors());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
