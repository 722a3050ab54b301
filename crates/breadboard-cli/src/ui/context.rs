//! Terminal detection for UI decisions.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// What the terminal supports and which output mode is in effect.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    /// Terminal width in columns
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Build the context from the environment and the global flags.
    ///
    /// Color is off unless stdout is a TTY, and `NO_COLOR`, `--no-color` or
    /// `TERM=dumb` also turn it off. `--ascii` swaps unicode symbols for ASCII.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").is_ok_and(|v| v == "dumb");
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            is_tty,
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
        }
    }

    /// Spinners only run on an interactive pretty terminal.
    pub fn allows_animation(&self) -> bool {
        self.is_tty && self.mode.is_pretty()
    }
}

fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl succeeded, so winsize is initialized
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_sets_mode() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert!(ctx.mode.is_json());
        assert!(!ctx.allows_animation());
    }

    #[test]
    fn test_flags_disable_color_and_unicode() {
        let ctx = UiContext::from_env(false, None, true, true);
        assert!(!ctx.color);
        assert!(!ctx.unicode);
        assert!(ctx.width > 0);
    }
}
