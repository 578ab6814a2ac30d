//! # UI State Module
//!
//! General UI feedback that is not specific to any component: the transient
//! toast reporting how a snapshot export went.

use std::time::Duration;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Duration,
}

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    toast: Option<Toast>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&mut self, message: impl Into<String>, now: Duration) {
        self.show(message.into(), ToastKind::Success, now);
    }

    pub fn show_error(&mut self, message: impl Into<String>, now: Duration) {
        self.show(message.into(), ToastKind::Error, now);
    }

    /// Toast to draw at `now`, if one is still live
    pub fn toast(&self, now: Duration) -> Option<&Toast> {
        self.toast
            .as_ref()
            .filter(|toast| now.saturating_sub(toast.shown_at) < TOAST_DURATION)
    }

    /// Time until the current toast expires
    pub fn toast_remaining(&self, now: Duration) -> Option<Duration> {
        self.toast(now)
            .map(|toast| TOAST_DURATION.saturating_sub(now.saturating_sub(toast.shown_at)))
    }

    /// Drop the toast once its time is up
    pub fn expire(&mut self, now: Duration) {
        if self.toast(now).is_none() {
            self.toast = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.toast = None;
    }

    fn show(&mut self, message: String, kind: ToastKind, now: Duration) {
        self.toast = Some(Toast {
            message,
            kind,
            shown_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_five_seconds() {
        let mut state = UIState::new();
        state.show_success("Snapshot shared", Duration::from_secs(10));

        let toast = state.toast(Duration::from_secs(12)).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(state.toast_remaining(Duration::from_secs(12)), Some(Duration::from_secs(3)));

        state.expire(Duration::from_secs(15));
        assert!(state.toast(Duration::from_secs(15)).is_none());
        assert!(state.toast(Duration::from_secs(11)).is_none());
    }

    #[test]
    fn test_new_toast_replaces_old_one() {
        let mut state = UIState::new();
        state.show_success("Snapshot shared", Duration::ZERO);
        state.show_error("Could not save the snapshot: disk full", Duration::from_secs(1));

        let toast = state.toast(Duration::from_secs(5)).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);

        state.dismiss();
        assert!(state.toast(Duration::from_secs(5)).is_none());
    }
}
