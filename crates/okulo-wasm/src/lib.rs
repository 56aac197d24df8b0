//! wasm-bindgen adapter for the okulo core.
//!
//! Exposes per-frame eye animation to a browser renderer: the eyelid blink
//! weight and the pupil center, ready to hand to shader uniforms. Blink
//! delays come from `js_sys::Math::random` at this seam so the core stays
//! deterministic.

use js_sys::Math;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use okulo_core::{
    parse_track_json, pupil_center, BlinkScheduler, EyeGeometry, Vector3,
};

/// Per-frame uniform values for the eyeball shader.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EyeUniforms {
    eyelid_blink: f32,
    pupil_center: [f32; 2],
}

fn random_blink_delay() -> f32 {
    (Math::random() * 3.0 + 1.0) as f32
}

fn vec3_from(values: &[f32], what: &str) -> Result<Vector3<f32>, JsError> {
    if values.len() != 3 {
        return Err(JsError::new(&format!(
            "{what}: expected 3 components, got {}",
            values.len()
        )));
    }
    Ok(Vector3::new(values[0], values[1], values[2]))
}

#[wasm_bindgen]
pub struct OkuloEyes {
    geometry: EyeGeometry,
    scheduler: BlinkScheduler<Box<dyn FnMut() -> f32>>,
}

#[wasm_bindgen]
impl OkuloEyes {
    /// Create the adapter. Pass a JSON geometry object
    /// (`{ pupil_radius, sclera_radius, plane_normal: [x, y, z] }`) or
    /// undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(geometry: JsValue) -> Result<OkuloEyes, JsError> {
        console_error_panic_hook::set_once();

        let geometry: EyeGeometry = if geometry.is_undefined() || geometry.is_null() {
            EyeGeometry::default()
        } else {
            swb::from_value(geometry).map_err(|e| JsError::new(&format!("geometry error: {e}")))?
        };

        Ok(OkuloEyes {
            geometry,
            scheduler: BlinkScheduler::new(Box::new(random_blink_delay) as Box<dyn FnMut() -> f32>),
        })
    }

    /// Replace the blink track with a stored-track JSON document.
    #[wasm_bindgen(js_name = load_blink_track)]
    pub fn load_blink_track(&mut self, track_json: &str) -> Result<(), JsError> {
        let track =
            parse_track_json(track_json).map_err(|e| JsError::new(&e.to_string()))?;
        self.scheduler.set_track(track);
        Ok(())
    }

    /// Advance the blink clock and project the gaze. `elapsed_seconds` is
    /// the renderer's monotonic clock; positions are world-space `[x, y, z]`
    /// triples. Returns `{ eyelidBlink, pupilCenter: [x, y] }`.
    pub fn update(
        &mut self,
        elapsed_seconds: f32,
        camera_world: &[f32],
        eye_world: &[f32],
    ) -> Result<JsValue, JsError> {
        let camera = vec3_from(camera_world, "camera_world")?;
        let eye = vec3_from(eye_world, "eye_world")?;

        let uniforms = EyeUniforms {
            eyelid_blink: self.scheduler.advance(elapsed_seconds),
            pupil_center: pupil_center(camera, eye, &self.geometry).into(),
        };
        swb::to_value(&uniforms).map_err(|e| JsError::new(&format!("uniforms error: {e}")))
    }
}

/// Sample a stored-track JSON document once. Handy for authoring tools that
/// want to preview a curve without instantiating the adapter.
#[wasm_bindgen(js_name = sample_stored_track)]
pub fn sample_stored_track(track_json: &str, time: f32, looping: bool) -> Result<f32, JsError> {
    let track = parse_track_json(track_json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(track.sample(time, looping))
}
