//! `FrameScheduler` backed by egui repaints.
//!
//! egui has no way to withdraw a repaint request, so cancelling only forgets
//! the handle. A stray repaint is harmless: the counter ignores ticks it did
//! not ask for.

use eframe::egui;
use std::time::Duration;

use crate::backend::domain::{FrameHandle, FrameScheduler};

pub struct EguiFrameScheduler {
    ctx: egui::Context,
    next_id: u64,
    outstanding: Option<FrameHandle>,
}

impl EguiFrameScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            outstanding: None,
        }
    }

    /// Step currently waiting for a repaint, if any
    pub fn outstanding(&self) -> Option<FrameHandle> {
        self.outstanding
    }
}

impl FrameScheduler for EguiFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.outstanding = Some(handle);
        self.ctx.request_repaint();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.outstanding == Some(handle) {
            self.outstanding = None;
        }
        log::trace!("🎞️ COUNTER: frame {:?} cancelled", handle);
    }
}

/// Current egui frame time as a `Duration` since app start
pub fn frame_time(ctx: &egui::Context) -> Duration {
    let seconds = ctx.input(|i| i.time);
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::ZERO
    }
}
