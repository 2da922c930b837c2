//! Terminal output: status lines, a spinner, and text renderings of query
//! results.
//!
//! Status lines and the spinner write to stderr; rendered results write to
//! stdout.
//!
//! ```no_run
//! use drift_cli::ui;
//!
//! ui::init_colors(false);
//! let spinner = ui::Spinner::new("Building graph...");
//! spinner.finish("Graph built");
//! ui::success("Export written");
//! ```

mod format;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{OwoColorize, Style};

pub use format::{
    format_duration, format_ratio, render_coverage, render_keys, render_offenders, render_stats,
};
pub use messages::success;
pub use spinner::Spinner;

static COLORS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Decide once whether status lines and tables are colored.
pub fn init_colors(no_color: bool) {
    COLORS_ENABLED.store(!no_color, Ordering::Relaxed);
}

pub fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

/// Apply `style` to `text` if colors are on.
pub(crate) fn paint(text: &str, style: Style) -> String {
    if colors_enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
