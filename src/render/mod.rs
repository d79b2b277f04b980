pub mod format;
pub mod palette;
pub mod segment;

pub use format::{format_component, format_cost, format_duration, Painter};
pub use segment::{render_line, Segment};
