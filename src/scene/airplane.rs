use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::types::{Color, Material, Shape};

use super::node::Node;

/// Builds the rigid airplane hierarchy: elongated fuselage, offset glass
/// cockpit, wing slab, horizontal tail, vertical fin, and twin engine
/// nacelles. All offsets are fixed at construction; the animation driver
/// only ever touches the root transform.
pub fn build_airplane() -> Node {
    let mut airplane = Node::group();
    airplane.transform.scale = Vec3::splat(0.8);

    let body_material = Material::opaque(Color::WHITE, 100.0);
    let wing_material = Material::opaque(Color::WHITE, 80.0);

    // Fuselage: tapered cylinder laid along X
    airplane.add_child(
        Node::mesh(
            Shape::Cylinder {
                radius_top: 0.3,
                radius_bottom: 0.15,
                height: 4.0,
                segments: 32,
            },
            body_material,
        )
        .rotated(Vec3::new(0.0, 0.0, FRAC_PI_2)),
    );

    // Cockpit: stretched translucent sphere ahead of the wing root
    airplane.add_child(
        Node::mesh(
            Shape::Sphere {
                radius: 0.25,
                segments: 32,
            },
            Material::new(Color::SKY_BLUE, 0.8, 150.0),
        )
        .at(Vec3::new(1.2, 0.15, 0.0))
        .scaled(Vec3::new(1.5, 1.0, 1.0)),
    );

    // Main wing slab through the fuselage center
    airplane.add_child(Node::mesh(
        Shape::Cuboid {
            x: 0.8,
            y: 0.05,
            z: 3.0,
        },
        wing_material,
    ));

    // Horizontal tail
    airplane.add_child(
        Node::mesh(
            Shape::Cuboid {
                x: 0.4,
                y: 0.03,
                z: 1.2,
            },
            wing_material,
        )
        .at(Vec3::new(-1.8, 0.0, 0.0)),
    );

    // Vertical fin
    airplane.add_child(
        Node::mesh(
            Shape::Cuboid {
                x: 0.5,
                y: 0.5,
                z: 0.03,
            },
            wing_material,
        )
        .at(Vec3::new(-1.8, 0.25, 0.0)),
    );

    // Engines under each wing
    let engine = Shape::Cylinder {
        radius_top: 0.12,
        radius_bottom: 0.15,
        height: 0.5,
        segments: 16,
    };
    let engine_material = Material::opaque(Color::LIGHT_BLUE, 100.0);
    for side in [1.0, -1.0] {
        airplane.add_child(
            Node::mesh(engine, engine_material)
                .rotated(Vec3::new(0.0, 0.0, FRAC_PI_2))
                .at(Vec3::new(0.2, -0.15, 1.2 * side)),
        );
    }

    airplane
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airplane_has_seven_parts() {
        let airplane = build_airplane();
        // fuselage, cockpit, wings, tail wing, tail fin, two engines
        assert_eq!(airplane.mesh_count(), 7);
        assert!(airplane.shape.is_none(), "root is a group, not a mesh");
    }

    #[test]
    fn test_airplane_root_scale() {
        let airplane = build_airplane();
        assert_eq!(airplane.transform.scale, Vec3::splat(0.8));
    }

    #[test]
    fn test_engines_are_mirrored() {
        let airplane = build_airplane();
        let engines: Vec<f32> = airplane
            .children
            .iter()
            .filter(|n| n.transform.translation.y == -0.15)
            .map(|n| n.transform.translation.z)
            .collect();
        assert_eq!(engines.len(), 2);
        assert_eq!(engines[0], -engines[1]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build_airplane();
        let b = build_airplane();
        for (ca, cb) in a.children.iter().zip(&b.children) {
            assert_eq!(ca.transform, cb.transform);
            assert_eq!(ca.shape, cb.shape);
        }
    }
}
