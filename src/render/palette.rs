//! Fixed color palette and glyph set.
//!
//! Colors are 256-color indices approximating gruvbox-material (hard).
//! Glyphs come from Nerd Fonts and need a patched font to display.

// Segment background
pub const BG0: u8 = 234; // #1d2021

// Foregrounds
pub const FG: u8 = 223; // #d4be98
pub const ORANGE: u8 = 208; // #e78a4e
pub const GREEN: u8 = 142; // #a9b665
pub const YELLOW: u8 = 214; // #d8a657
pub const RED: u8 = 167; // #ea6962
pub const GREY: u8 = 246; // #928374

pub const RESET: &str = "\x1b[0m";

pub const ICON_MODEL: &str = "\u{f09d1}"; // nf-md-brain
pub const ICON_GIT_BRANCH: &str = "\u{e702}"; // nf-dev-git
pub const ICON_FOLDER: &str = "\u{f4d3}"; // nf-oct-file_directory
pub const ICON_DOLLAR: &str = "\u{f155}"; // nf-fa-dollar
pub const ICON_CLOCK: &str = "\u{f0954}"; // nf-md-clock_outline
pub const ICON_PLUS: &str = "\u{f055}"; // nf-fa-plus_circle
pub const ICON_PENCIL: &str = "\u{f03eb}"; // nf-md-pencil
pub const ICON_MINUS: &str = "\u{f056}"; // nf-fa-minus_circle

/// Hard divider drawn between two segments.
pub const POWERLINE_ARROW: &str = "\u{e0b2}";
/// Divider between components inside one segment.
pub const COMPONENT_SEP: &str = "\u{2503}";
