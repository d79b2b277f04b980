use super::format::{format_section, Painter};

/// One colored block of the statusline.
///
/// `next_bg` is the background the divider arrow is drawn over; `None`
/// closes the bar with a reset-style divider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub fg: u8,
    pub bg: u8,
    pub next_bg: Option<u8>,
}

impl Segment {
    pub fn new(content: String, fg: u8, bg: u8, next_bg: Option<u8>) -> Self {
        Self {
            content,
            fg,
            bg,
            next_bg,
        }
    }
}

/// Join segments into the final line. A trailing reset closes the line.
pub fn render_line(painter: Painter, segments: &[Segment]) -> String {
    let mut line = String::with_capacity(256);

    for segment in segments {
        line.push_str(&format_section(
            painter,
            &segment.content,
            segment.fg,
            segment.bg,
            segment.next_bg,
        ));
    }

    line.push_str(painter.reset());
    line
}
