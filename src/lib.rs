pub mod animation;
pub mod cli;
pub mod config;
pub mod math;
pub mod page;
pub mod render;
pub mod scene;
pub mod traits;
pub mod types;

// Re-export the pieces hosts touch most
pub use animation::{AnimationDriver, FrameLoop, StopHandle};
pub use config::PageConfig;
pub use page::{Document, Element, ElementId, Page};
pub use scene::{build_airplane, build_clouds, Camera, Scene};
