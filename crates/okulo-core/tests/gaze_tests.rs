use approx::assert_abs_diff_eq;
use okulo_core::{pupil_center, pupil_center_with_diagnostics, Diagnostics, EyeGeometry, Vector3};

fn geometry() -> EyeGeometry {
    EyeGeometry::default()
}

/// it should rest the pupil at the UV center when the camera sits on the
/// facing normal (degenerate projection)
#[test]
fn head_on_camera_centers_pupil() {
    let center = pupil_center(
        Vector3::new(0.0, 0.0, -2.0),
        Vector3::new(0.0, 0.0, 0.0),
        &geometry(),
    );
    assert!(center.x.is_finite() && center.y.is_finite());
    assert_abs_diff_eq!(center.x, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(center.y, 0.5, epsilon = 1e-6);
}

/// it should return a finite centered pupil when the camera coincides with
/// the eye anchor
#[test]
fn coincident_camera_is_finite() {
    let eye = Vector3::new(1.0, 2.0, 3.0);
    let center = pupil_center(eye, eye, &geometry());
    assert_abs_diff_eq!(center.x, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(center.y, 0.5, epsilon = 1e-6);
}

/// it should pull the pupil fully toward a camera lying in the facing plane
#[test]
fn in_plane_camera_reaches_max_travel() {
    let geometry = geometry();
    // Full travel: sclera - pupil + pupil * 0.25 from the center.
    let max_travel = geometry.sclera_radius - geometry.pupil_radius + geometry.pupil_radius * 0.25;

    // Camera to the +x side; UV x is mirrored.
    let center = pupil_center(Vector3::new(2.0, 0.0, 0.0), Vector3::zeros(), &geometry);
    assert_abs_diff_eq!(center.x, 0.5 - max_travel, epsilon = 1e-6);
    assert_abs_diff_eq!(center.y, 0.5, epsilon = 1e-6);

    // Camera to the -x side mirrors back.
    let center = pupil_center(Vector3::new(-2.0, 0.0, 0.0), Vector3::zeros(), &geometry);
    assert_abs_diff_eq!(center.x, 0.5 + max_travel, epsilon = 1e-6);

    // Camera above; UV y is not mirrored.
    let center = pupil_center(Vector3::new(0.0, 2.0, 0.0), Vector3::zeros(), &geometry);
    assert_abs_diff_eq!(center.x, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(center.y, 0.5 + max_travel, epsilon = 1e-6);
}

/// it should attenuate travel linearly with the off-plane angle
#[test]
fn off_plane_angle_attenuates_travel() {
    let geometry = geometry();
    let max_travel = geometry.sclera_radius - geometry.pupil_radius + geometry.pupil_radius * 0.25;

    // 45 degrees between the gaze direction and the facing plane.
    let center = pupil_center(Vector3::new(1.0, 0.0, -1.0), Vector3::zeros(), &geometry);
    assert_abs_diff_eq!(center.x, 0.5 - 0.5 * max_travel, epsilon = 1e-4);
    assert_abs_diff_eq!(center.y, 0.5, epsilon = 1e-4);
}

/// it should keep producing finite output at near-grazing angles
#[test]
fn near_grazing_angles_stay_finite() {
    let center = pupil_center(Vector3::new(0.1, 0.0, 1.0), Vector3::zeros(), &geometry());
    assert!(center.x.is_finite() && center.y.is_finite());
    // Mostly attenuated away: barely off-center.
    assert!(center.x < 0.5 && center.x > 0.45);
    assert_abs_diff_eq!(center.y, 0.5, epsilon = 1e-5);
}

/// it should respect custom geometry radii
#[test]
fn custom_radii_scale_travel() {
    let geometry = EyeGeometry {
        pupil_radius: 0.1,
        sclera_radius: 0.3,
        plane_normal: Vector3::new(0.0, 0.0, -1.0),
    };
    let max_travel = geometry.sclera_radius - geometry.pupil_radius + geometry.pupil_radius * 0.25;
    let center = pupil_center(Vector3::new(2.0, 0.0, 0.0), Vector3::zeros(), &geometry);
    assert_abs_diff_eq!(center.x, 0.5 - max_travel, epsilon = 1e-6);
}

/// it should count degenerate projections without changing the result
#[test]
fn diagnostics_observe_degenerate_projections() {
    let mut diagnostics = Diagnostics::new();
    let camera = Vector3::new(0.0, 0.0, -2.0);
    let eye = Vector3::zeros();

    let plain = pupil_center(camera, eye, &geometry());
    let counted = pupil_center_with_diagnostics(camera, eye, &geometry(), &mut diagnostics);
    assert_eq!(plain, counted);
    assert_eq!(diagnostics.degenerate_projections, 1);

    // A healthy projection leaves the counter alone.
    pupil_center_with_diagnostics(Vector3::new(2.0, 0.0, 0.0), eye, &geometry(), &mut diagnostics);
    assert_eq!(diagnostics.degenerate_projections, 1);
}
