//! Eye geometry configuration.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Geometric envelope for one eyeball decal, radii in UV units.
///
/// `plane_normal` is the eye's fixed facing normal in local space and is
/// assumed unit length.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EyeGeometry {
    pub pupil_radius: f32,
    pub sclera_radius: f32,
    pub plane_normal: Vector3<f32>,
}

impl Default for EyeGeometry {
    fn default() -> Self {
        Self {
            pupil_radius: 0.2,
            sclera_radius: 0.45,
            plane_normal: Vector3::new(0.0, 0.0, -1.0),
        }
    }
}
