//! # Snapshot State Module
//!
//! Tracks the snapshot delivery running on its worker thread. The worker's
//! result comes back over a channel that the UI polls once per frame.

use eframe::egui;
use log::{error, info};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::backend::domain::{ExportRoute, PendingSnapshot, SnapshotError};

pub type DeliveryResult = Result<ExportRoute, SnapshotError>;

#[derive(Debug, Default)]
pub struct SnapshotState {
    receiver: Option<Receiver<DeliveryResult>>,
}

impl SnapshotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a delivery is still running
    pub fn is_in_flight(&self) -> bool {
        self.receiver.is_some()
    }

    /// Move `pending` onto a worker thread. `ctx` is woken when the worker
    /// finishes so the result is picked up without waiting for input.
    pub fn start(&mut self, pending: PendingSnapshot, ctx: Option<egui::Context>) -> Result<(), SnapshotError> {
        let (sender, receiver) = mpsc::channel();
        let (width, height) = pending.dimensions();

        thread::Builder::new()
            .name("snapshot-delivery".to_string())
            .spawn(move || {
                let result = pending.deliver();
                // The receiver is gone only if the app is shutting down
                let _ = sender.send(result);
                if let Some(ctx) = ctx {
                    ctx.request_repaint();
                }
            })
            .map_err(|e| {
                error!("❌ SNAPSHOT: could not start delivery worker: {}", e);
                SnapshotError::Delivery(e.to_string())
            })?;

        info!("📸 SNAPSHOT: delivering {}x{} snapshot in the background", width, height);
        self.receiver = Some(receiver);
        Ok(())
    }

    /// Take the worker's result if it has finished
    pub fn poll(&mut self) -> Option<DeliveryResult> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                Some(Err(SnapshotError::Delivery(
                    "the delivery worker stopped unexpectedly".to_string(),
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::animated_counter::test_support::ManualFrameScheduler;
    use crate::backend::domain::{GridPalette, SnapshotExporter, SnapshotSettings};
    use crate::backend::io::share::null_sink::{NullShareBehavior, NullSink};
    use crate::backend::io::share::{DownloadTarget, ShareTarget};
    use crate::ui::state::grid_state::GridViewState;
    use eframe::egui::Color32;
    use shared::LifeParameters;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn wait_for(state: &mut SnapshotState) -> DeliveryResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = state.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "delivery did not finish");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_background_delivery_reports_route_and_releases_exporter() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Dismisses));
        let exporter = SnapshotExporter::new(
            SnapshotSettings {
                file_name: "life-in-weeks.png".to_string(),
                share_title: "My Life in Weeks".to_string(),
            },
            Some(sink.clone() as Arc<dyn ShareTarget>),
            sink.clone() as Arc<dyn DownloadTarget>,
        );
        let mut grid = GridViewState::new(
            LifeParameters::default(),
            150,
            ManualFrameScheduler::default(),
            Duration::ZERO,
            GridPalette::LIGHT,
            Color32::WHITE,
            Duration::ZERO,
        );

        let mut state = SnapshotState::new();
        assert!(state.poll().is_none());

        let pending = exporter.begin_capture(&mut grid).unwrap();
        state.start(pending, None).unwrap();
        assert!(state.is_in_flight());

        let route = wait_for(&mut state).unwrap();
        assert_eq!(route, ExportRoute::Downloaded("downloads/life-in-weeks.png".into()));
        assert!(!state.is_in_flight());
        assert!(!exporter.is_busy());
        assert_eq!(sink.share_count(), 1);
        assert_eq!(sink.save_count(), 1);
    }
}
