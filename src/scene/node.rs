use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::types::{Material, Shape};

/// Local placement of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied XYZ
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One rigid part of the scene hierarchy. Leaf nodes carry a shape and
/// material; group nodes carry only children. Parts are placed once at
/// construction; at runtime only root transforms are mutated.
#[derive(Debug, Clone)]
pub struct Node {
    pub shape: Option<Shape>,
    pub material: Option<Material>,
    pub transform: Transform,
    pub children: Vec<Node>,
}

impl Node {
    pub fn group() -> Self {
        Self {
            shape: None,
            material: None,
            transform: Transform::IDENTITY,
            children: Vec::new(),
        }
    }

    pub fn mesh(shape: Shape, material: Material) -> Self {
        Self {
            shape: Some(shape),
            material: Some(material),
            transform: Transform::IDENTITY,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.transform.translation = translation;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Visit every node depth-first with its composed world matrix
    pub fn visit<F: FnMut(&Node, Mat4)>(&self, parent: Mat4, f: &mut F) {
        let world = parent * self.transform.matrix();
        f(self, world);
        for child in &self.children {
            child.visit(world, f);
        }
    }

    /// Count nodes carrying a shape, this node included
    pub fn mesh_count(&self) -> usize {
        let own = usize::from(self.shape.is_some());
        own + self.children.iter().map(Node::mesh_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Transform::IDENTITY.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_world_transform_composes() {
        let mut root = Node::group();
        root.transform.translation = Vec3::new(1.0, 0.0, 0.0);
        let child = Node::mesh(
            Shape::Sphere {
                radius: 1.0,
                segments: 16,
            },
            Material::opaque(Color::WHITE, 100.0),
        )
        .at(Vec3::new(0.0, 2.0, 0.0));
        root.add_child(child);

        let mut leaf_origin = Vec3::ZERO;
        root.visit(Mat4::IDENTITY, &mut |node, world| {
            if node.shape.is_some() {
                leaf_origin = world.transform_point3(Vec3::ZERO);
            }
        });
        assert!((leaf_origin - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_mesh_count_ignores_groups() {
        let mut root = Node::group();
        for _ in 0..3 {
            root.add_child(Node::mesh(
                Shape::Cuboid {
                    x: 1.0,
                    y: 1.0,
                    z: 1.0,
                },
                Material::opaque(Color::WHITE, 1.0),
            ));
        }
        assert_eq!(root.mesh_count(), 3);
    }
}
