pub mod driver;
pub mod frame_loop;

pub use driver::{AnimationDriver, CLOUD_WRAP_X};
pub use frame_loop::{FrameLoop, StopHandle};
