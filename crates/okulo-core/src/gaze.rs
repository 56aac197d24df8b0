//! Gaze projection: derive a 2D pupil center from 3D camera/eye geometry.
//!
//! Pure per-call computation, recomputed every frame by the caller. The
//! pupil is pulled toward the camera in UV texture space, constrained so it
//! never visually crosses the sclera boundary, and attenuated by how far the
//! true gaze direction leans out of the eye's facing plane.

use nalgebra::{Vector2, Vector3};

use crate::config::EyeGeometry;
use crate::diagnostics::Diagnostics;

/// Normalize with the renderer convention: a zero-length vector stays zero
/// instead of producing NaN components.
#[inline]
fn normalize_or_zero3(v: Vector3<f32>) -> Vector3<f32> {
    v.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
}

#[inline]
fn normalize_or_zero2(v: Vector2<f32>) -> Vector2<f32> {
    v.try_normalize(0.0).unwrap_or_else(Vector2::zeros)
}

/// Compute the pupil center in UV space for one eye.
///
/// `geometry.plane_normal` is assumed unit length. Total: degenerate
/// geometry (camera coincident with the eye anchor, or gaze parallel to the
/// facing normal) collapses the projection to zero and the result is the
/// centered pupil `(0.5, 0.5)`.
pub fn pupil_center(
    camera_world: Vector3<f32>,
    eye_world: Vector3<f32>,
    geometry: &EyeGeometry,
) -> Vector2<f32> {
    let eyeball_center = Vector2::new(0.5, 0.5);
    let normal = geometry.plane_normal;

    let direction_to_camera = normalize_or_zero3(camera_world - eye_world);

    // Drop the component along the facing normal, then renormalize.
    let projection =
        normalize_or_zero3(direction_to_camera - normal * direction_to_camera.dot(&normal));

    // Horizontal axis inverted to match the mirrored texture space.
    let movement_direction = normalize_or_zero2(Vector2::new(-projection.x, projection.y));

    // The iris point furthest along the movement direction bounds how far
    // the pupil may travel, with a small forgiving margin.
    let closest_iris_point_to_edge = eyeball_center + movement_direction * geometry.pupil_radius;
    let max_movement_distance = geometry.sclera_radius
        - (closest_iris_point_to_edge - eyeball_center).norm()
        + geometry.pupil_radius * 0.25;

    // Attenuate by the angle between the true gaze direction and its
    // in-plane projection. The dot of two unit vectors is clamped into the
    // acos domain; float drift must not manufacture NaN here.
    let angle_degrees = direction_to_camera
        .dot(&projection)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees();
    let movement_factor = 1.0 - angle_degrees / 90.0;

    eyeball_center + movement_direction * (movement_factor * max_movement_distance)
}

/// [`pupil_center`] with a degenerate-projection counter. The returned value
/// is identical to the plain call.
pub fn pupil_center_with_diagnostics(
    camera_world: Vector3<f32>,
    eye_world: Vector3<f32>,
    geometry: &EyeGeometry,
    diagnostics: &mut Diagnostics,
) -> Vector2<f32> {
    let normal = geometry.plane_normal;
    let direction_to_camera = normalize_or_zero3(camera_world - eye_world);
    let flattened = direction_to_camera - normal * direction_to_camera.dot(&normal);
    if flattened.norm() == 0.0 {
        diagnostics.record_degenerate_projection();
    }
    pupil_center(camera_world, eye_world, geometry)
}
