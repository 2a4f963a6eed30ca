//! Small 2D helpers shared by the force, collision and registry code

use super::states::NVec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    (a - b).norm()
}

/// Strict inside test for the open box `(min, max)`
pub fn in_open_box(p: &NVec2, min: &NVec2, max: &NVec2) -> bool {
    min.x < p.x && p.x < max.x && min.y < p.y && p.y < max.y
}

/// Point on a circle of `radius` around `center` at `angle` (rad)
#[inline]
pub fn orbit_point(center: &NVec2, radius: f64, angle: f64) -> NVec2 {
    center + radius * NVec2::new(angle.cos(), angle.sin())
}
