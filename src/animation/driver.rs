use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::math::smoothing::{approach, DAMPING};
use crate::scene::Scene;

/// Elapsed-time step per frame
const TIME_STEP: f32 = 0.01;
const IDLE_FLOAT_AMPLITUDE: f32 = 0.1;
const IDLE_FLOAT_RATE: f32 = 2.0;
const IDLE_TILT_AMPLITUDE: f32 = 0.05;
const IDLE_TILT_RATE: f32 = 1.5;
const POINTER_TILT_GAIN: f32 = 0.3;
/// Clouds drifting past +15 wrap straight back to -15
pub const CLOUD_WRAP_X: f32 = 15.0;

/// Per-frame blend of scroll position, pointer position and idle oscillation
/// into the airplane root transform.
///
/// Scroll and pointer handlers only write targets; `advance` alone reads and
/// smooths them, so event ordering between the handlers never matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationDriver {
    pub target_rotation_y: f32,
    pub target_position_x: f32,
    pub target_position_y: f32,
    pub current_rotation_y: f32,
    pub current_position_x: f32,
    pub current_position_y: f32,
    /// Pointer tilt is applied directly, without smoothing
    pub tilt_x: f32,
    pub tilt_z: f32,
    hovering: bool,
    time: f32,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive transform targets from normalized scroll progress
    pub fn set_scroll_fraction(&mut self, fraction: f32) {
        self.target_rotation_y = fraction * FRAC_PI_2;
        self.target_position_y = (fraction * PI).sin() * 1.5;
        self.target_position_x = fraction * 2.0;
    }

    pub fn pointer_entered(&mut self) {
        self.hovering = true;
    }

    /// Pointer offset relative to the container center, each axis in
    /// [-0.5, 0.5]. Ignored unless the pointer is over the container.
    pub fn pointer_moved(&mut self, x_norm: f32, y_norm: f32) {
        if self.hovering {
            self.tilt_x = y_norm * POINTER_TILT_GAIN;
            self.tilt_z = -x_norm * POINTER_TILT_GAIN;
        }
    }

    pub fn pointer_left(&mut self) {
        self.hovering = false;
        self.tilt_x = 0.0;
        self.tilt_z = 0.0;
    }

    /// One display frame: smooth the scroll channels, add the idle
    /// oscillation, write the airplane root transform, drift the clouds.
    pub fn advance(&mut self, scene: &mut Scene) {
        self.time += TIME_STEP;

        self.current_rotation_y = approach(self.current_rotation_y, self.target_rotation_y, DAMPING);
        self.current_position_y = approach(self.current_position_y, self.target_position_y, DAMPING);
        self.current_position_x = approach(self.current_position_x, self.target_position_x, DAMPING);

        let idle_float = (self.time * IDLE_FLOAT_RATE).sin() * IDLE_FLOAT_AMPLITUDE;
        let idle_tilt = (self.time * IDLE_TILT_RATE).sin() * IDLE_TILT_AMPLITUDE;

        let root = &mut scene.airplane.transform;
        root.rotation = Vec3::new(
            self.tilt_x + idle_float * 0.3,
            self.current_rotation_y + idle_tilt,
            self.tilt_z,
        );
        root.translation.x = self.current_position_x;
        root.translation.y = self.current_position_y + idle_float;

        for cloud in &mut scene.clouds {
            let x = &mut cloud.node.transform.translation.x;
            *x += cloud.drift;
            if *x > CLOUD_WRAP_X {
                *x = -CLOUD_WRAP_X;
            }
        }
    }
}
