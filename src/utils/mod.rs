mod alignment;
mod render;

pub use alignment::alignment_info;
pub use render::{to_ascii, to_hex};
