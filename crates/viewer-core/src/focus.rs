//! Focus controller: eased fly-to transitions between the free view and a
//! panel inspection view.
//!
//! A single transition task interpolates both the camera eye and the orbit
//! target each tick and emits one completion signal, so the two channels can
//! never finish on different frames.

use crate::camera::Camera;
use crate::constants::FOCUS_DURATION_MS;
use glam::Vec3;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPhase {
    Free,
    Entering,
    Zoomed,
    Exiting,
}

/// Emitted by [`FocusController::tick`] exactly once per completed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusEvent {
    /// Entering transition finished; orbiting should be disabled and the exit
    /// affordance revealed.
    Focused,
    /// Exit transition finished; the camera is back at the home pose.
    ReturnedHome,
}

/// Camera pose captured once after the first successful auto-fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomePose {
    pub eye: Vec3,
    pub target: Vec3,
}

#[derive(Clone, Debug)]
struct Transition {
    start_eye: Vec3,
    end_eye: Vec3,
    start_target: Vec3,
    end_target: Vec3,
    started_at: Instant,
    duration: Duration,
}

/// Owns the zoom state machine, the home pose and the in-flight transition.
pub struct FocusController {
    phase: FocusPhase,
    home: Option<HomePose>,
    transition: Option<Transition>,
}

impl FocusController {
    pub fn new() -> Self {
        Self {
            phase: FocusPhase::Free,
            home: None,
            transition: None,
        }
    }

    /// Snapshot the current camera pose as the return point for exits.
    /// Only the first call takes effect.
    pub fn capture_home(&mut self, camera: &Camera) {
        if self.home.is_none() {
            self.home = Some(HomePose {
                eye: camera.eye,
                target: camera.target,
            });
        }
    }

    pub fn home(&self) -> Option<HomePose> {
        self.home
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    /// "Zoomed" in the UI sense: a panel has been activated and not yet exited.
    pub fn is_zoomed(&self) -> bool {
        matches!(self.phase, FocusPhase::Entering | FocusPhase::Zoomed)
    }

    /// True when no transition is running and the view is free. Resets and
    /// re-fits are only allowed in this state.
    pub fn is_idle(&self) -> bool {
        self.phase == FocusPhase::Free
    }

    /// Begin the fly-to toward an inspection pose. Ignored (returns `false`)
    /// unless the controller is in the free state, so a second click while
    /// zoomed or mid-transition is a no-op.
    pub fn focus_on(&mut self, camera: &Camera, eye: Vec3, target: Vec3, now: Instant) -> bool {
        if self.phase != FocusPhase::Free {
            return false;
        }
        self.phase = FocusPhase::Entering;
        self.transition = Some(Transition {
            start_eye: camera.eye,
            end_eye: eye,
            start_target: camera.target,
            end_target: target,
            started_at: now,
            duration: Duration::from_millis(FOCUS_DURATION_MS),
        });
        true
    }

    /// Begin the fly-back to the home pose. Ignored unless zoomed (or still
    /// entering: an exit mid-entry cancels the in-flight transition and
    /// restarts from the camera's current interpolated pose).
    pub fn exit(&mut self, camera: &Camera, now: Instant) -> bool {
        let Some(home) = self.home else {
            return false;
        };
        if !self.is_zoomed() {
            return false;
        }
        self.phase = FocusPhase::Exiting;
        self.transition = Some(Transition {
            start_eye: camera.eye,
            end_eye: home.eye,
            start_target: camera.target,
            end_target: home.target,
            started_at: now,
            duration: Duration::from_millis(FOCUS_DURATION_MS),
        });
        true
    }

    /// Advance the in-flight transition, writing the interpolated pose into the
    /// camera. Returns the completion event on the tick the transition ends.
    pub fn tick(&mut self, camera: &mut Camera, now: Instant) -> Option<FocusEvent> {
        let tr = self.transition.as_ref()?;
        let elapsed = now.duration_since(tr.started_at);
        let t = (elapsed.as_secs_f32() / tr.duration.as_secs_f32()).min(1.0);
        if t < 1.0 {
            let k = ease_out_cubic(t);
            camera.eye = tr.start_eye.lerp(tr.end_eye, k);
            camera.target = tr.start_target.lerp(tr.end_target, k);
            return None;
        }
        // Land exactly on the endpoints so a round trip restores the home
        // pose bit-for-bit.
        camera.eye = tr.end_eye;
        camera.target = tr.end_target;
        self.transition = None;
        match self.phase {
            FocusPhase::Entering => {
                self.phase = FocusPhase::Zoomed;
                Some(FocusEvent::Focused)
            }
            FocusPhase::Exiting => {
                self.phase = FocusPhase::Free;
                Some(FocusEvent::ReturnedHome)
            }
            _ => None,
        }
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new()
    }
}

/// Fast start, slow settle.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}
