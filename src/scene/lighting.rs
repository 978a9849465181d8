use glam::Vec3;

use crate::types::Color;

/// Light sources consumed by the software painter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
    Point {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

/// Default light set: soft white ambient, a key directional from above, and
/// a cool point fill from behind.
pub fn default_lights() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: Color::WHITE,
            intensity: 0.6,
        },
        Light::Directional {
            color: Color::WHITE,
            intensity: 0.8,
            position: Vec3::new(5.0, 10.0, 7.0),
        },
        Light::Point {
            color: Color::SKY_BLUE,
            intensity: 0.5,
            position: Vec3::new(-5.0, 5.0, -5.0),
        },
    ]
}

/// Flat brightness factor: ambient plus a fixed share of the key light.
/// The painter draws silhouettes, so there is no per-face normal to shade.
pub fn flat_brightness(lights: &[Light]) -> f32 {
    let mut brightness = 0.0;
    for light in lights {
        match light {
            Light::Ambient { intensity, .. } => brightness += intensity,
            Light::Directional { intensity, .. } => brightness += intensity * 0.35,
            Light::Point { .. } => {}
        }
    }
    brightness.min(1.0)
}
