pub mod airplane;
pub mod camera;
pub mod clouds;
pub mod lighting;
pub mod node;

pub use airplane::build_airplane;
pub use camera::Camera;
pub use clouds::{build_clouds, Cloud, DEFAULT_CLOUD_COUNT};
pub use lighting::{default_lights, Light};
pub use node::{Node, Transform};

use rand::Rng;

/// The full decorative scene: one airplane hierarchy, drifting cloud groups,
/// and the light set the painter shades with.
#[derive(Debug, Clone)]
pub struct Scene {
    pub airplane: Node,
    pub clouds: Vec<Cloud>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Build the default scene with `cloud_count` cloud groups
    pub fn build(rng: &mut impl Rng, cloud_count: usize) -> Self {
        Self {
            airplane: build_airplane(),
            clouds: build_clouds(rng, cloud_count),
            lights: default_lights(),
        }
    }
}
