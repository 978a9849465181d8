pub mod fallback;
pub mod painter;

pub use fallback::FallbackRenderer;
pub use painter::PixmapSurface;

use anyhow::bail;

use crate::scene::{Camera, Scene};
use crate::traits::RenderSurface;

/// Surface standing in for a host without 3D support. The capability check
/// fails, which routes the page to the fallback illustration.
#[derive(Debug, Default)]
pub struct UnavailableSurface;

impl RenderSurface for UnavailableSurface {
    fn is_available(&self) -> bool {
        false
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn render(&mut self, _scene: &Scene, _camera: &Camera) -> anyhow::Result<()> {
        bail!("render surface unavailable")
    }
}
