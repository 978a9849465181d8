pub mod format;
pub mod scroll;
pub mod smoothing;

pub use format::format_thousands;
pub use scroll::scroll_fraction;
pub use smoothing::approach;
