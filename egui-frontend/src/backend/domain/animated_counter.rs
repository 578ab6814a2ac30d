//! # Animated Counter
//!
//! Smoothly moves a displayed integer (the number of weeks drawn as lived)
//! toward a target value with an ease-out-cubic curve.
//!
//! ## Scheduling
//! The counter never blocks. Each step is requested from a `FrameScheduler`
//! (in the app this is "repaint next frame") and the host calls `tick` with
//! the current time when that frame runs. Time is passed in explicitly so a
//! simulated clock can drive tests.
//!
//! ## Retargeting
//! Changing the target while an animation is running starts a new trajectory
//! from whatever value is currently displayed, so rapid input changes never
//! snap back to zero or jump to the previous target.

use std::time::Duration;

/// Identifies one requested frame step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Display-refresh facility the counter schedules its steps against
pub trait FrameScheduler {
    /// Ask for one more frame step
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a previously requested step
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// `1 - (1 - p)^3` for `p` in `0.0..=1.0`
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Debug, Clone, Copy)]
struct Trajectory {
    start: u32,
    target: u32,
    began_at: Duration,
}

impl Trajectory {
    fn value_at(&self, eased: f64) -> u32 {
        let start = self.start as f64;
        let delta = self.target as f64 - start;
        (start + delta * eased).round() as u32
    }
}

/// Time-driven interpolator for the "weeks lived" boundary
pub struct AnimatedCounter<S: FrameScheduler> {
    scheduler: S,
    duration: Duration,
    displayed: u32,
    target: u32,
    trajectory: Option<Trajectory>,
    pending_frame: Option<FrameHandle>,
    last_observed: Duration,
    disposed: bool,
}

impl<S: FrameScheduler> AnimatedCounter<S> {
    /// Create a counter resting at zero
    pub fn new(scheduler: S, duration: Duration) -> Self {
        Self {
            scheduler,
            duration,
            displayed: 0,
            target: 0,
            trajectory: None,
            pending_frame: None,
            last_observed: Duration::ZERO,
            disposed: false,
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.trajectory.is_some()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Point the counter at a new target.
    ///
    /// Any in-flight trajectory is cancelled and a new one starts from the
    /// value displayed at `now`.
    pub fn set_target(&mut self, target: u32, now: Duration) {
        if self.disposed {
            return;
        }
        let now = self.observe(now);
        self.advance(now);

        if target == self.target && self.trajectory.is_some() {
            return;
        }

        self.cancel_pending();
        self.trajectory = None;
        self.target = target;

        if target == self.displayed {
            return;
        }

        if self.duration.is_zero() {
            self.displayed = target;
            return;
        }

        log::debug!(
            "🎞️ COUNTER: retarget {} -> {} (duration {:?})",
            self.displayed,
            target,
            self.duration
        );
        self.trajectory = Some(Trajectory {
            start: self.displayed,
            target,
            began_at: now,
        });
        self.pending_frame = Some(self.scheduler.request_frame());
    }

    /// Run one frame step. Returns the displayed value after the step.
    ///
    /// Does nothing unless a step is pending, so stray repaints from the
    /// host never advance a finished or disposed counter.
    pub fn tick(&mut self, now: Duration) -> u32 {
        if self.disposed || self.pending_frame.take().is_none() {
            return self.displayed;
        }
        let now = self.observe(now);
        self.advance(now);

        if self.trajectory.is_some() {
            self.pending_frame = Some(self.scheduler.request_frame());
        }
        self.displayed
    }

    /// Cancel any pending step and stop reacting to ticks. Called when the
    /// owning view goes away.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_pending();
        self.trajectory = None;
        self.disposed = true;
    }

    fn advance(&mut self, now: Duration) {
        let Some(trajectory) = self.trajectory else {
            return;
        };

        let elapsed = now.saturating_sub(trajectory.began_at);
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);

        if progress >= 1.0 {
            // Land exactly on the target, no rounding drift
            self.displayed = trajectory.target;
            self.trajectory = None;
            self.cancel_pending();
        } else {
            self.displayed = trajectory.value_at(ease_out_cubic(progress));
        }
    }

    /// Frame steps only ever see time moving forward
    fn observe(&mut self, now: Duration) -> Duration {
        let now = now.max(self.last_observed);
        self.last_observed = now;
        now
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for AnimatedCounter<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
