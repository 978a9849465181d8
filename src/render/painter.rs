use anyhow::{anyhow, Context, Result};
use glam::{Mat4, Vec2, Vec3};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform as PixmapTransform};

use crate::scene::lighting::flat_brightness;
use crate::scene::{Camera, Node, Scene};
use crate::traits::RenderSurface;
use crate::types::{Material, Shape};

/// Software surface: rasterizes the scene's primitives as flat, depth-sorted
/// silhouettes into a tiny-skia pixmap. Spheres become discs; cuboids and
/// cylinders become the convex hull of their projected corners. Decorative
/// fidelity only - no meshes, no per-face shading.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

/// One drawable primitive in world space
struct Silhouette {
    center: Vec3,
    footprint: Footprint,
    material: Material,
}

enum Footprint {
    Disc { radius: f32 },
    Corners([Vec3; 8]),
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow!("invalid surface size {width}x{height}"))?;
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn save_png(&self, path: &std::path::Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .with_context(|| format!("writing {}", path.display()))
    }

    fn collect(node: &Node, out: &mut Vec<Silhouette>) {
        node.visit(Mat4::IDENTITY, &mut |node, world| {
            let (Some(shape), Some(material)) = (node.shape, node.material) else {
                return;
            };
            let center = world.transform_point3(Vec3::ZERO);
            let footprint = match shape {
                Shape::Sphere { radius, .. } => {
                    // Average the world-space axis lengths for stretched spheres
                    let r = (world.transform_vector3(Vec3::X * radius).length()
                        + world.transform_vector3(Vec3::Y * radius).length()
                        + world.transform_vector3(Vec3::Z * radius).length())
                        / 3.0;
                    Footprint::Disc { radius: r }
                }
                Shape::Cuboid { x, y, z } => {
                    Footprint::Corners(corner_points(world, x / 2.0, y / 2.0, z / 2.0))
                }
                Shape::Cylinder {
                    radius_top,
                    radius_bottom,
                    height,
                    ..
                } => {
                    let r = radius_top.max(radius_bottom);
                    Footprint::Corners(corner_points(world, r, height / 2.0, r))
                }
            };
            out.push(Silhouette {
                center,
                footprint,
                material,
            });
        });
    }

    fn fill(&mut self, path: &Path, material: &Material, brightness: f32) {
        let rgba = material.color.scaled(brightness).to_rgba8(material.opacity);
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
        paint.anti_alias = true;
        self.pixmap.fill_path(
            path,
            &paint,
            FillRule::Winding,
            PixmapTransform::identity(),
            None,
        );
    }
}

impl RenderSurface for PixmapSurface {
    fn is_available(&self) -> bool {
        true
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(pixmap) = Pixmap::new(width, height) {
            self.pixmap = pixmap;
        }
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        let width = self.pixmap.width() as f32;
        let height = self.pixmap.height() as f32;
        let brightness = flat_brightness(&scene.lights);

        let mut silhouettes = Vec::new();
        Self::collect(&scene.airplane, &mut silhouettes);
        for cloud in &scene.clouds {
            Self::collect(&cloud.node, &mut silhouettes);
        }

        // Painter's algorithm: far primitives first
        silhouettes.sort_by(|a, b| {
            camera
                .depth(b.center)
                .total_cmp(&camera.depth(a.center))
        });

        for silhouette in &silhouettes {
            let path = match silhouette.footprint {
                Footprint::Disc { radius } => {
                    let Some(center) = camera.project(silhouette.center, width, height) else {
                        continue;
                    };
                    let Some(rim) = camera.project(
                        silhouette.center + camera.right() * radius,
                        width,
                        height,
                    ) else {
                        continue;
                    };
                    let radius_px = center.distance(rim);
                    PathBuilder::from_circle(center.x, center.y, radius_px.max(0.5))
                }
                Footprint::Corners(corners) => {
                    let mut projected = Vec::with_capacity(8);
                    for corner in corners {
                        match camera.project(corner, width, height) {
                            Some(p) => projected.push(p),
                            None => break,
                        }
                    }
                    if projected.len() < 8 {
                        continue;
                    }
                    hull_path(&projected)
                }
            };
            if let Some(path) = path {
                self.fill(&path, &silhouette.material, brightness);
            }
        }
        Ok(())
    }
}

fn corner_points(world: Mat4, hx: f32, hy: f32, hz: f32) -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    let mut i = 0;
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                corners[i] = world.transform_point3(Vec3::new(sx * hx, sy * hy, sz * hz));
                i += 1;
            }
        }
    }
    corners
}

/// Convex hull via monotone chain, returned as a closed fill path
fn hull_path(points: &[Vec2]) -> Option<Path> {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return None;
    }
    let mut builder = PathBuilder::new();
    builder.move_to(hull[0].x, hull[0].y);
    for p in &hull[1..] {
        builder.line_to(p.x, p.y);
    }
    builder.close();
    builder.finish()
}

fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut sorted: Vec<Vec2> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let cross = |o: Vec2, a: Vec2, b: Vec2| (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x);
    let mut hull: Vec<Vec2> = Vec::with_capacity(sorted.len() * 2);
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    // Upper chain must never pop below the finished lower chain
    let lower = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_convex_hull_of_square() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Vec2::new(0.5, 0.5)));
        // Every corner survives both chain passes
        for corner in &points[..4] {
            assert!(hull.contains(corner), "missing corner {corner:?}");
        }
    }

    #[test]
    fn test_convex_hull_degenerate() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)];
        assert_eq!(convex_hull(&points).len(), 2);
    }

    #[test]
    fn test_render_produces_pixels() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let scene = Scene::build(&mut rng, 4);
        let camera = Camera::new(1.5);
        let mut surface = PixmapSurface::new(300, 200).unwrap();
        surface.render(&scene, &camera).unwrap();

        let lit = surface
            .pixmap()
            .data()
            .chunks_exact(4)
            .filter(|px| px[3] != 0)
            .count();
        assert!(lit > 0, "airplane should cover at least some pixels");
    }

    #[test]
    fn test_zero_surface_rejected() {
        assert!(PixmapSurface::new(0, 10).is_err());
    }

    #[test]
    fn test_resize_changes_dimensions() {
        let mut surface = PixmapSurface::new(100, 100).unwrap();
        surface.resize(50, 40);
        assert_eq!(surface.pixmap().width(), 50);
        assert_eq!(surface.pixmap().height(), 40);
    }
}
