//! Spinner shown while the API simulates latency.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::context::UiContext;
use super::theme::spinner_frames;

/// Indeterminate spinner on stderr. Inert when animation is not allowed.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start spinning with `message`, unless the terminal cannot animate.
    pub fn start(ctx: &UiContext, message: &str) -> Self {
        if !ctx.allows_animation() {
            return Self { bar: None };
        }

        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        let template = if ctx.color {
            "{spinner:.cyan} {msg}..."
        } else {
            "{spinner} {msg}..."
        };
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            bar.set_style(style.tick_strings(spinner_frames(ctx.unicode)));
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Stop and erase the spinner line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Run `work`, showing a spinner when it is expected to take a while.
pub fn with_spinner<T>(
    ctx: &UiContext,
    message: &str,
    expected: Duration,
    work: impl FnOnce() -> T,
) -> T {
    if expected.is_zero() {
        return work();
    }
    let spinner = Spinner::start(ctx, message);
    let value = work();
    spinner.finish();
    value
}
