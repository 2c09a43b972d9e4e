use glam::Vec3;
use instant::Instant;
use std::time::Duration;
use viewer_core::focus::ease_out_cubic;
use viewer_core::{Camera, FocusController, FocusEvent, FocusPhase, FOCUS_DURATION_MS};

fn camera_at(eye: Vec3, target: Vec3) -> Camera {
    let mut camera = Camera::new(1.0);
    camera.eye = eye;
    camera.target = target;
    camera
}

const PANEL_EYE: Vec3 = Vec3::new(1.0, 2.0, 3.0);
const PANEL_TARGET: Vec3 = Vec3::new(1.0, 2.0, 2.4);

#[test]
fn focus_completes_at_exact_endpoints() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);

    let t0 = Instant::now();
    assert!(focus.focus_on(&camera, PANEL_EYE, PANEL_TARGET, t0));
    assert_eq!(focus.phase(), FocusPhase::Entering);

    let done = t0 + Duration::from_millis(FOCUS_DURATION_MS);
    assert_eq!(focus.tick(&mut camera, done), Some(FocusEvent::Focused));
    assert_eq!(camera.eye, PANEL_EYE);
    assert_eq!(camera.target, PANEL_TARGET);
    assert_eq!(focus.phase(), FocusPhase::Zoomed);
}

#[test]
fn round_trip_restores_home_pose_exactly() {
    let home_eye = Vec3::new(0.0, 0.0, 3.6213203);
    let mut camera = camera_at(home_eye, Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);

    let t0 = Instant::now();
    focus.focus_on(&camera, PANEL_EYE, PANEL_TARGET, t0);
    let t1 = t0 + Duration::from_millis(FOCUS_DURATION_MS);
    focus.tick(&mut camera, t1);

    focus.exit(&camera, t1);
    let t2 = t1 + Duration::from_millis(FOCUS_DURATION_MS);
    assert_eq!(focus.tick(&mut camera, t2), Some(FocusEvent::ReturnedHome));
    assert_eq!(camera.eye, home_eye);
    assert_eq!(camera.target, Vec3::ZERO);
    assert_eq!(focus.phase(), FocusPhase::Free);
}

#[test]
fn midpoint_pose_follows_the_easing_curve() {
    let start = Vec3::new(0.0, 0.0, 10.0);
    let mut camera = camera_at(start, Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);

    let t0 = Instant::now();
    focus.focus_on(&camera, PANEL_EYE, PANEL_TARGET, t0);
    focus.tick(&mut camera, t0 + Duration::from_millis(FOCUS_DURATION_MS / 2));

    let k = ease_out_cubic(0.5);
    let expected = start.lerp(PANEL_EYE, k);
    assert!((camera.eye - expected).length() < 1e-5);
    // strictly between the endpoints
    assert!(camera.eye != start && camera.eye != PANEL_EYE);
    assert_eq!(focus.phase(), FocusPhase::Entering);
}

#[test]
fn second_activation_is_ignored() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);

    let t0 = Instant::now();
    assert!(focus.focus_on(&camera, PANEL_EYE, PANEL_TARGET, t0));
    // while entering
    assert!(!focus.focus_on(&camera, Vec3::ZERO, Vec3::ZERO, t0));
    // while zoomed
    focus.tick(&mut camera, t0 + Duration::from_millis(FOCUS_DURATION_MS));
    assert!(!focus.focus_on(&camera, Vec3::ZERO, Vec3::ZERO, t0));
    assert_eq!(camera.eye, PANEL_EYE);
}

#[test]
fn completion_event_fires_exactly_once() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);

    let t0 = Instant::now();
    focus.focus_on(&camera, PANEL_EYE, PANEL_TARGET, t0);
    let done = t0 + Duration::from_millis(FOCUS_DURATION_MS + 50);
    assert_eq!(focus.tick(&mut camera, done), Some(FocusEvent::Focused));
    assert_eq!(focus.tick(&mut camera, done + Duration::from_millis(16)), None);
}

#[test]
fn exit_mid_entry_restarts_from_current_pose() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);

    let t0 = Instant::now();
    focus.focus_on(&camera, PANEL_EYE, PANEL_TARGET, t0);
    let mid = t0 + Duration::from_millis(300);
    focus.tick(&mut camera, mid);
    let interpolated = camera.eye;

    assert!(focus.exit(&camera, mid));
    assert_eq!(focus.phase(), FocusPhase::Exiting);
    // the exit starts where the entry left off, not at the panel
    assert_eq!(camera.eye, interpolated);

    let done = mid + Duration::from_millis(FOCUS_DURATION_MS);
    assert_eq!(focus.tick(&mut camera, done), Some(FocusEvent::ReturnedHome));
    assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 10.0));
}

#[test]
fn exit_requires_zoom_and_home() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut focus = FocusController::new();
    let t0 = Instant::now();

    // no home captured yet
    assert!(!focus.exit(&camera, t0));

    focus.capture_home(&camera);
    // free view, nothing to exit
    assert!(!focus.exit(&camera, t0));
    assert!(focus.is_idle());
}

#[test]
fn capture_home_only_takes_the_first_pose() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);

    camera.eye = Vec3::new(7.0, 7.0, 7.0);
    focus.capture_home(&camera);

    let home = focus.home().unwrap();
    assert_eq!(home.eye, Vec3::new(0.0, 0.0, 10.0));
}

#[test]
fn is_zoomed_covers_entering_and_zoomed() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut focus = FocusController::new();
    focus.capture_home(&camera);
    assert!(!focus.is_zoomed());

    let t0 = Instant::now();
    focus.focus_on(&camera, PANEL_EYE, PANEL_TARGET, t0);
    assert!(focus.is_zoomed());
    assert!(!focus.is_idle());

    focus.tick(&mut camera, t0 + Duration::from_millis(FOCUS_DURATION_MS));
    assert!(focus.is_zoomed());

    focus.exit(&camera, t0 + Duration::from_millis(FOCUS_DURATION_MS));
    assert!(!focus.is_zoomed());
    assert!(!focus.is_idle());
}

#[test]
fn ease_out_cubic_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    // monotonically increasing
    let mut last = 0.0;
    for i in 1..=100 {
        let v = ease_out_cubic(i as f32 / 100.0);
        assert!(v >= last);
        last = v;
    }
}
