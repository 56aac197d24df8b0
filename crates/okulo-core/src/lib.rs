//! okulo core (engine-agnostic)
//!
//! The numeric core of an animated "tracking eyeball" renderer: keyframe
//! track sampling (time-domain lookup, looping, cubic Hermite
//! interpolation) and the camera-to-pupil gaze projection math. The
//! rendering layer — scene graph, shaders, uniforms — lives in adapters and
//! calls into this crate once per frame.

pub mod blink;
pub mod config;
pub mod diagnostics;
pub mod gaze;
pub mod loader;
pub mod track;

// Re-exports for consumers (adapters)
pub use blink::{blink_track, BlinkScheduler};
pub use config::EyeGeometry;
pub use diagnostics::Diagnostics;
pub use gaze::{pupil_center, pupil_center_with_diagnostics};
pub use loader::{parse_track_json, TrackError};
pub use nalgebra::{Vector2, Vector3};
pub use track::{Frame, Interpolation, Track};
