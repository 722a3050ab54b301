//! Output mode routing.

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document, nothing else on stdout
    Json,
    /// `key=value` lines and space-separated rows for scripts
    #[default]
    Plain,
    /// Headers, tables and color for a terminal
    Pretty,
}

impl OutputMode {
    /// Pick the mode from flags and the terminal.
    ///
    /// `--json` (or `--format json`) wins over everything, `--format plain`
    /// and `TERM=dumb` force plain, and pretty output needs a TTY.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        let format = format_flag.map(|f| f.trim().to_ascii_lowercase());
        match format.as_deref() {
            _ if json_flag => Self::Json,
            Some("json") => Self::Json,
            Some("plain") => Self::Plain,
            _ if term_is_dumb || !is_tty => Self::Plain,
            _ => Self::Pretty,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        let mode = OutputMode::resolve(true, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_format_json() {
        assert_eq!(OutputMode::resolve(false, Some("JSON"), false, false), OutputMode::Json);
    }

    #[test]
    fn test_plain_on_tty() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_dumb_terminal_is_plain() {
        assert_eq!(OutputMode::resolve(false, None, true, true), OutputMode::Plain);
    }

    #[test]
    fn test_tty_is_pretty_and_pipe_is_plain() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
        assert_eq!(OutputMode::resolve(false, None, false, false), OutputMode::Plain);
    }
}
