//! Badges, styles and spinner frames.

use owo_colors::{OwoColorize, Style};

use breadboard_core::model::{ClientStatus, FormStatus, InvoiceStatus, RiskLevel, TaskStatus};

/// Status marker shown before a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Err => styles::error(),
        }
    }
}

/// Named styles used across commands.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red()
    }
}

/// Apply `style` when color is enabled, otherwise return the text unchanged.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Color for a status word: green when healthy, yellow when it needs attention, red when late.
pub trait StatusTone {
    fn tone(&self) -> Style;
}

impl StatusTone for InvoiceStatus {
    fn tone(&self) -> Style {
        match self {
            Self::Paid => styles::success(),
            Self::Due => styles::warning(),
            Self::Overdue => styles::error(),
            Self::Draft | Self::Sent => styles::dim(),
        }
    }
}

impl StatusTone for TaskStatus {
    fn tone(&self) -> Style {
        match self {
            Self::Done => styles::success(),
            Self::Open => Style::new(),
            Self::Blocked => styles::error(),
        }
    }
}

impl StatusTone for ClientStatus {
    fn tone(&self) -> Style {
        match self {
            Self::Active => styles::success(),
            Self::AtRisk => styles::error(),
            Self::Inactive => styles::dim(),
        }
    }
}

impl StatusTone for RiskLevel {
    fn tone(&self) -> Style {
        match self {
            Self::Low => styles::success(),
            Self::Medium => styles::warning(),
            Self::High => styles::error(),
        }
    }
}

impl StatusTone for FormStatus {
    fn tone(&self) -> Style {
        match self {
            Self::Complete => styles::success(),
            Self::InProgress => styles::warning(),
            Self::NotStarted => styles::dim(),
        }
    }
}

const SPINNER_UNICODE: &[&str] = &[
    "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280F}", "",
];
const SPINNER_ASCII: &[&str] = &["|", "/", "-", "\\", ""];

/// Spinner frames; the trailing empty frame is shown when the spinner finishes.
pub fn spinner_frames(unicode: bool) -> &'static [&'static str] {
    if unicode {
        SPINNER_UNICODE
    } else {
        SPINNER_ASCII
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
        assert_eq!(Badge::Err.style(), styles::error());
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(InvoiceStatus::Overdue.tone(), styles::error());
        assert_eq!(InvoiceStatus::Due.tone(), styles::warning());
        assert_eq!(FormStatus::Complete.tone(), styles::success());
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("Money", styles::bold(), false), "Money");
        assert_ne!(styled("Money", styles::bold(), true), "Money");
    }

    #[test]
    fn test_spinner_frames() {
        assert_eq!(spinner_frames(false).len(), 5);
        assert_eq!(spinner_frames(true).len(), 11);
    }
}
