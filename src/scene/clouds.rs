use glam::Vec3;
use rand::Rng;

use crate::types::{Color, Material, Shape};

use super::node::Node;

pub const DEFAULT_CLOUD_COUNT: usize = 8;
const PUFFS_PER_CLOUD: usize = 5;
/// Base horizontal drift per frame, multiplied by (index + 1)
pub const CLOUD_DRIFT_STEP: f32 = 0.005;

/// One cloud group plus its per-frame horizontal drift speed
#[derive(Debug, Clone)]
pub struct Cloud {
    pub node: Node,
    pub drift: f32,
}

/// Builds `count` cloud groups. Each is five sphere puffs spread along X with
/// randomized vertical/depth offsets and non-uniform scales, then the whole
/// group gets a random world position and uniform scale. Puff count and
/// spread are fixed; only the group's X position animates.
pub fn build_clouds(rng: &mut impl Rng, count: usize) -> Vec<Cloud> {
    let puff_material = Material::new(Color::WHITE, 0.6, 30.0);

    (0..count)
        .map(|i| {
            let mut group = Node::group();
            for j in 0..PUFFS_PER_CLOUD {
                group.add_child(
                    Node::mesh(
                        Shape::Sphere {
                            radius: 1.0,
                            segments: 16,
                        },
                        puff_material,
                    )
                    .at(Vec3::new(
                        j as f32 * 0.8 - 1.6,
                        rng.gen_range(0.0..0.3),
                        rng.gen_range(-0.25..0.25),
                    ))
                    .scaled(Vec3::new(
                        rng.gen_range(0.5..1.0),
                        rng.gen_range(0.3..0.6),
                        rng.gen_range(0.5..1.0),
                    )),
                );
            }
            group.transform.translation = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-1.0..2.0),
                rng.gen_range(-5.0..5.0),
            );
            group.transform.scale = Vec3::splat(rng.gen_range(0.5..1.0));

            Cloud {
                node: group,
                drift: CLOUD_DRIFT_STEP * (i + 1) as f32,
            }
        })
        .collect()
}
