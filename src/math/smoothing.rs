/// Damping factor shared by the airplane transform channels
pub const DAMPING: f32 = 0.05;

/// One-pole low-pass step: move `current` toward `target` by `damping` of the
/// remaining distance. Convergence is asymptotic; the fixed point is exact.
pub fn approach(current: f32, target: f32, damping: f32) -> f32 {
    current + (target - current) * damping
}
