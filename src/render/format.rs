use super::palette::{POWERLINE_ARROW, RESET};

/// Emits ANSI escape sequences, or nothing at all when color is disabled.
///
/// Every formatter takes a `Painter` instead of consulting global state so
/// that the same inputs always produce the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// 256-color foreground escape (`ESC[38;5;Nm`).
    pub fn fg(&self, code: u8) -> String {
        if self.color {
            format!("\x1b[38;5;{}m", code)
        } else {
            String::new()
        }
    }

    /// 256-color background escape (`ESC[48;5;Nm`).
    pub fn bg(&self, code: u8) -> String {
        if self.color {
            format!("\x1b[48;5;{}m", code)
        } else {
            String::new()
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.color {
            RESET
        } else {
            ""
        }
    }
}

/// Format a duration in seconds as "Xh Ym", or "Ym" under an hour.
/// Fractional seconds and leftover seconds are truncated.
pub fn format_duration(seconds: Option<f64>) -> String {
    let seconds = match seconds {
        Some(s) if s != 0.0 => s,
        _ => return "0m".to_string(),
    };

    let minutes = (seconds / 60.0).floor() as i64;
    let hours = minutes.div_euclid(60);
    let remaining = minutes.rem_euclid(60);

    if hours > 0 {
        format!("{}h {}m", hours, remaining)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a cost as "$X.XX".
///
/// Rounds the exact binary value, so `1.005` (really 1.00499...) gives
/// "$1.00".
pub fn format_cost(amount: Option<f64>) -> String {
    match amount {
        Some(a) if a != 0.0 => format!("${:.2}", a),
        _ => "$0.00".to_string(),
    }
}

/// A colored `icon text` fragment. Leaves the background alone.
pub fn format_component(painter: Painter, icon: &str, text: &str, color: u8) -> String {
    format!("{}{} {}", painter.fg(color), icon, text)
}

/// Wrap `content` in a padded block on `bg` and close it with the divider.
///
/// With `next_bg` the divider is drawn in `bg` over the next block's
/// background; without it the style is reset first and the divider sits on
/// the terminal's own background.
pub fn format_section(
    painter: Painter,
    content: &str,
    fg: u8,
    bg: u8,
    next_bg: Option<u8>,
) -> String {
    let mut section = String::with_capacity(content.len() + 48);
    section.push_str(&painter.bg(bg));
    section.push_str(&painter.fg(fg));
    section.push(' ');
    section.push_str(content);
    section.push(' ');

    match next_bg {
        Some(next) => {
            section.push_str(&painter.fg(bg));
            section.push_str(&painter.bg(next));
        }
        None => {
            section.push_str(painter.reset());
            section.push_str(&painter.fg(bg));
        }
    }
    section.push_str(POWERLINE_ARROW);

    section
}
