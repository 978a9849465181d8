use crate::scene::{Camera, Scene};

/// Rendering surface abstraction - capability check plus a render call
pub trait RenderSurface {
    /// Whether this surface can actually composite the 3D scene.
    /// When false the page falls back to the flat SVG illustration.
    fn is_available(&self) -> bool;

    /// Resize the backing store to the given pixel dimensions
    fn resize(&mut self, width: u32, height: u32);

    /// Composite one frame of the scene through the camera
    fn render(&mut self, scene: &Scene, camera: &Camera) -> anyhow::Result<()>;
}
