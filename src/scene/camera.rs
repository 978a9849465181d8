use glam::{Mat4, Vec2, Vec3};

pub const DEFAULT_FOV_DEGREES: f32 = 50.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Fixed perspective camera looking at the scene origin
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(5.0, 2.0, 8.0),
            target: Vec3::ZERO,
            fov_y: DEFAULT_FOV_DEGREES.to_radians(),
            aspect,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn view_projection(&self) -> Mat4 {
        let projection = Mat4::perspective_rh(self.fov_y, self.aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        projection * view
    }

    /// Project a world-space point to pixel coordinates on a surface of the
    /// given size. Returns None for points behind the camera.
    pub fn project(&self, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * width,
            (1.0 - (ndc.y * 0.5 + 0.5)) * height,
        ))
    }

    /// View-space depth used to sort primitives back-to-front
    pub fn depth(&self, point: Vec3) -> f32 {
        (point - self.position).dot(self.forward())
    }
}
