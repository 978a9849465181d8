// === Shared value types ===

/// Flat RGB color in linear 0..1 space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Fuselage / wing white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    /// Cockpit glass, 0x87CEEB
    pub const SKY_BLUE: Color = Color::new(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0);
    /// Engine nacelles, 0xADD8E6
    pub const LIGHT_BLUE: Color = Color::new(173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0);

    /// Scale brightness, clamping each channel to 1.0
    pub fn scaled(&self, factor: f32) -> Color {
        Color::new(
            (self.r * factor).min(1.0),
            (self.g * factor).min(1.0),
            (self.b * factor).min(1.0),
        )
    }

    pub fn to_rgba8(&self, alpha: f32) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
            (alpha.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }
}

/// Surface properties of a scene part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    pub shininess: f32,
}

impl Material {
    pub const fn new(color: Color, opacity: f32, shininess: f32) -> Self {
        Self {
            color,
            opacity,
            shininess,
        }
    }

    pub const fn opaque(color: Color, shininess: f32) -> Self {
        Self::new(color, 1.0, shininess)
    }
}

/// Primitive shapes the scene builder composes parts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Tapered cylinder along local Y
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        segments: u32,
    },
    /// Axis-aligned box given as full extents
    Cuboid {
        x: f32,
        y: f32,
        z: f32,
    },
}

/// Element layout rectangle in page coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
