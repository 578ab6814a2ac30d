//! Snapshot export domain logic for the life calendar.
//!
//! Captures the rendered grid region as a PNG and routes it to the native
//! share capability, falling back to a local download. The UI only decides
//! when to start an export and how to show the outcome.
//!
//! ## Flow
//! 1. Claim the busy flag (a second request while one is running fails with
//!    `SnapshotError::Busy`)
//! 2. Hide interactive chrome in the region, rasterize at 2x, restore chrome
//!    (restoration happens on every exit path through `ChromeGuard`)
//! 3. Encode PNG, then share or download
//!
//! Steps 1-2 run in `begin_capture` on the UI thread. Step 3 runs in
//! `PendingSnapshot::deliver`, which the app moves onto a worker thread.

use chrono::Local;
use egui::Color32;
use image::RgbaImage;
use log::{error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::backend::domain::models::{ExportRoute, ShareMetadata, SnapshotError, SnapshotFile};
use crate::backend::domain::rasterizer::{encode_png, SNAPSHOT_SCALE};
use crate::backend::io::share::{DownloadTarget, ShareOutcome, ShareTarget};

/// A region of the screen that can be captured
pub trait CaptureRegion {
    /// Whether interactive chrome (hover highlights and the like) is drawn
    fn chrome_visible(&self) -> bool;

    fn set_chrome_visible(&mut self, visible: bool);

    /// Background color the region is currently drawn over
    fn background_color(&self) -> Color32;

    /// Paint the region's current visual state
    fn rasterize(&self, scale: f32, background: Color32) -> Result<RgbaImage, SnapshotError>;
}

/// Hides chrome for as long as it lives and puts back the previous
/// visibility when dropped
pub struct ChromeGuard<'a, R: CaptureRegion + ?Sized> {
    region: &'a mut R,
    previously_visible: bool,
}

impl<'a, R: CaptureRegion + ?Sized> ChromeGuard<'a, R> {
    pub fn hide(region: &'a mut R) -> Self {
        let previously_visible = region.chrome_visible();
        region.set_chrome_visible(false);
        Self {
            region,
            previously_visible,
        }
    }

    pub fn region(&self) -> &R {
        self.region
    }
}

impl<R: CaptureRegion + ?Sized> Drop for ChromeGuard<'_, R> {
    fn drop(&mut self) {
        self.region.set_chrome_visible(self.previously_visible);
    }
}

/// Holds the exporter's busy flag until dropped
#[derive(Debug)]
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Result<Self, SnapshotError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SnapshotError::Busy)?;
        Ok(Self { flag: Arc::clone(flag) })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Settings for naming and describing exported snapshots
#[derive(Debug, Clone)]
pub struct SnapshotSettings {
    pub file_name: String,
    pub share_title: String,
}

/// Captures the grid and hands the result to share or download targets
#[derive(Clone)]
pub struct SnapshotExporter {
    busy: Arc<AtomicBool>,
    settings: SnapshotSettings,
    share_target: Option<Arc<dyn ShareTarget>>,
    download_target: Arc<dyn DownloadTarget>,
}

impl SnapshotExporter {
    pub fn new(
        settings: SnapshotSettings,
        share_target: Option<Arc<dyn ShareTarget>>,
        download_target: Arc<dyn DownloadTarget>,
    ) -> Self {
        Self {
            busy: Arc::new(AtomicBool::new(false)),
            settings,
            share_target,
            download_target,
        }
    }

    /// Whether an export is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Capture the region and deliver the snapshot in one go
    pub fn capture_and_share<R: CaptureRegion + ?Sized>(&self, region: &mut R) -> Result<ExportRoute, SnapshotError> {
        self.begin_capture(region)?.deliver()
    }

    /// Rasterize the region with chrome hidden. The returned snapshot keeps
    /// the exporter busy until it has been delivered or dropped.
    pub fn begin_capture<R: CaptureRegion + ?Sized>(&self, region: &mut R) -> Result<PendingSnapshot, SnapshotError> {
        let busy = BusyGuard::acquire(&self.busy).inspect_err(|_| {
            warn!("📸 SNAPSHOT: capture requested while another export is running");
        })?;

        info!("📸 SNAPSHOT: capturing grid region");
        // Chrome is restored when the guard drops at the end of this block,
        // before the result is inspected
        let captured = {
            let chrome = ChromeGuard::hide(region);
            let background = chrome.region().background_color();
            chrome.region().rasterize(SNAPSHOT_SCALE, background)
        };
        let image = captured.inspect_err(|e| error!("❌ SNAPSHOT: rasterization failed: {}", e))?;

        info!("✅ SNAPSHOT: captured {}x{} pixels", image.width(), image.height());
        Ok(PendingSnapshot {
            image,
            metadata: self.metadata(),
            file_name: self.settings.file_name.clone(),
            share_target: self.share_target.clone(),
            download_target: Arc::clone(&self.download_target),
            _busy: busy,
        })
    }

    fn metadata(&self) -> ShareMetadata {
        ShareMetadata {
            title: self.settings.share_title.clone(),
            text: format!("My life in weeks, as of {}", Local::now().format("%Y-%m-%d")),
        }
    }
}

/// A captured raster waiting to be encoded and delivered
pub struct PendingSnapshot {
    image: RgbaImage,
    metadata: ShareMetadata,
    file_name: String,
    share_target: Option<Arc<dyn ShareTarget>>,
    download_target: Arc<dyn DownloadTarget>,
    _busy: BusyGuard,
}

impl PendingSnapshot {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Encode the raster and route it to share or download. Releases the
    /// exporter's busy flag when done, whatever the outcome.
    pub fn deliver(self) -> Result<ExportRoute, SnapshotError> {
        let file = encode_png(&self.image, &self.file_name)?;
        route_snapshot(
            &file,
            &self.metadata,
            self.share_target.as_deref(),
            self.download_target.as_ref(),
        )
    }
}

/// Share when possible, otherwise download. Share unavailability, refusal,
/// dismissal and share errors all lead to the download fallback.
fn route_snapshot(
    file: &SnapshotFile,
    metadata: &ShareMetadata,
    share_target: Option<&dyn ShareTarget>,
    download_target: &dyn DownloadTarget,
) -> Result<ExportRoute, SnapshotError> {
    match share_target {
        Some(target) if target.is_available() && target.can_share(file) => {
            match target.share(file, metadata) {
                Ok(ShareOutcome::Shared) => {
                    info!("✅ SNAPSHOT: shared {}", file.file_name);
                    return Ok(ExportRoute::Shared);
                }
                Ok(ShareOutcome::Dismissed) => {
                    info!("📸 SNAPSHOT: share dismissed, downloading instead");
                }
                Err(e) => {
                    warn!("📸 SNAPSHOT: share failed ({}), downloading instead", e);
                }
            }
        }
        Some(_) => info!("📸 SNAPSHOT: share target cannot take this file, downloading"),
        None => info!("📸 SNAPSHOT: no share capability, downloading"),
    }

    download_target
        .save(file)
        .map(ExportRoute::Downloaded)
        .map_err(|e| {
            error!("❌ SNAPSHOT: download failed: {:#}", e);
            SnapshotError::Delivery(format!("{:#}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::cell_style::GridPalette;
    use crate::backend::domain::grid_layout::GridLayout;
    use crate::backend::domain::rasterizer::{self, GridFrame};
    use crate::backend::domain::week_grid;
    use crate::backend::io::share::null_sink::{NullShareBehavior, NullSink, SinkInvocation};
    use shared::WeekCell;
    use std::path::PathBuf;

    /// Grid region backed by a real rasterizer, or one that always fails
    struct TestRegion {
        cells: Vec<WeekCell>,
        chrome_visible: bool,
        fail: bool,
        /// Chrome visibility observed while rasterizing
        chrome_seen_during_capture: std::cell::Cell<Option<bool>>,
    }

    impl TestRegion {
        fn new(age: u32, lifespan: u32) -> Self {
            Self {
                cells: week_grid::compute(age, lifespan),
                chrome_visible: true,
                fail: false,
                chrome_seen_during_capture: std::cell::Cell::new(None),
            }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::new(1, 2) }
        }
    }

    impl CaptureRegion for TestRegion {
        fn chrome_visible(&self) -> bool {
            self.chrome_visible
        }

        fn set_chrome_visible(&mut self, visible: bool) {
            self.chrome_visible = visible;
        }

        fn background_color(&self) -> Color32 {
            Color32::WHITE
        }

        fn rasterize(&self, scale: f32, background: Color32) -> Result<RgbaImage, SnapshotError> {
            self.chrome_seen_during_capture.set(Some(self.chrome_visible));
            if self.fail {
                return Err(SnapshotError::Rasterization("simulated failure".to_string()));
            }
            let frame = GridFrame {
                cells: &self.cells,
                layout: GridLayout::default(),
                displayed_lived: 52,
                highlighted: self.chrome_visible.then_some(0),
                palette: GridPalette::LIGHT,
            };
            rasterizer::rasterize(&frame, scale, background)
        }
    }

    fn settings() -> SnapshotSettings {
        SnapshotSettings {
            file_name: "life-in-weeks.png".to_string(),
            share_title: "My Life in Weeks".to_string(),
        }
    }

    fn exporter_with(sink: &Arc<NullSink>, share: bool) -> SnapshotExporter {
        let share_target: Option<Arc<dyn ShareTarget>> = if share {
            Some(sink.clone() as Arc<dyn ShareTarget>)
        } else {
            None
        };
        SnapshotExporter::new(settings(), share_target, sink.clone() as Arc<dyn DownloadTarget>)
    }

    #[test]
    fn test_shares_when_capability_accepts() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Shares));
        let exporter = exporter_with(&sink, true);
        let mut region = TestRegion::new(1, 2);

        let route = exporter.capture_and_share(&mut region).unwrap();

        assert_eq!(route, ExportRoute::Shared);
        assert_eq!(
            sink.invocations(),
            vec![SinkInvocation::Share {
                file_name: "life-in-weeks.png".to_string(),
                title: "My Life in Weeks".to_string(),
            }]
        );
        assert!(!exporter.is_busy());
    }

    #[test]
    fn test_dismissed_share_falls_back_to_download() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Dismisses));
        let exporter = exporter_with(&sink, true);

        let route = exporter.capture_and_share(&mut TestRegion::new(1, 2)).unwrap();

        assert_eq!(route, ExportRoute::Downloaded(PathBuf::from("downloads/life-in-weeks.png")));
        assert_eq!(sink.share_count(), 1);
        assert_eq!(sink.save_count(), 1);
    }

    #[test]
    fn test_failed_share_falls_back_to_download() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Fails));
        let exporter = exporter_with(&sink, true);

        let route = exporter.capture_and_share(&mut TestRegion::new(1, 2)).unwrap();
        assert!(matches!(route, ExportRoute::Downloaded(_)));
        assert_eq!(sink.save_count(), 1);
    }

    #[test]
    fn test_unavailable_or_declining_share_goes_straight_to_download() {
        for behavior in [NullShareBehavior::Unavailable, NullShareBehavior::Declines] {
            let sink = Arc::new(NullSink::new(behavior));
            let exporter = exporter_with(&sink, true);

            let route = exporter.capture_and_share(&mut TestRegion::new(1, 2)).unwrap();
            assert!(matches!(route, ExportRoute::Downloaded(_)));
            assert_eq!(sink.share_count(), 0, "{:?}", behavior);
            assert_eq!(sink.save_count(), 1, "{:?}", behavior);
        }
    }

    #[test]
    fn test_no_share_capability_downloads() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Shares));
        let exporter = exporter_with(&sink, false);

        let route = exporter.capture_and_share(&mut TestRegion::new(1, 2)).unwrap();
        assert!(matches!(route, ExportRoute::Downloaded(_)));
        assert_eq!(sink.share_count(), 0);
    }

    #[test]
    fn test_rasterization_failure_restores_chrome_and_skips_sharing() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Shares));
        let exporter = exporter_with(&sink, true);
        let mut region = TestRegion::failing();
        let before = region.chrome_visible();

        let result = exporter.capture_and_share(&mut region);

        assert!(matches!(result, Err(SnapshotError::Rasterization(_))));
        assert_eq!(region.chrome_visible(), before);
        assert!(sink.invocations().is_empty());
        assert!(!exporter.is_busy());
    }

    #[test]
    fn test_chrome_hidden_during_capture_and_restored_after() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Shares));
        let exporter = exporter_with(&sink, true);
        let mut region = TestRegion::new(1, 2);

        exporter.capture_and_share(&mut region).unwrap();

        assert_eq!(region.chrome_seen_during_capture.get(), Some(false));
        assert!(region.chrome_visible());
    }

    #[test]
    fn test_hidden_chrome_stays_hidden() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Shares));
        let exporter = exporter_with(&sink, true);
        let mut region = TestRegion::new(1, 2);
        region.set_chrome_visible(false);

        exporter.capture_and_share(&mut region).unwrap();
        assert!(!region.chrome_visible());
    }

    #[test]
    fn test_second_capture_while_busy_is_rejected() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Shares));
        let exporter = exporter_with(&sink, true);

        let pending = exporter.begin_capture(&mut TestRegion::new(1, 2)).unwrap();
        assert!(exporter.is_busy());

        let mut second_region = TestRegion::new(1, 2);
        let second = exporter.capture_and_share(&mut second_region);
        assert!(matches!(second, Err(SnapshotError::Busy)));
        // The rejected request never touched the region
        assert_eq!(second_region.chrome_seen_during_capture.get(), None);

        pending.deliver().unwrap();
        assert!(!exporter.is_busy());
        assert!(exporter.capture_and_share(&mut TestRegion::new(1, 2)).is_ok());
    }

    #[test]
    fn test_dropping_pending_snapshot_releases_busy_flag() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Shares));
        let exporter = exporter_with(&sink, true);

        let pending = exporter.begin_capture(&mut TestRegion::new(1, 2)).unwrap();
        drop(pending);
        assert!(!exporter.is_busy());
    }

    #[test]
    fn test_delivery_on_worker_thread() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Dismisses));
        let exporter = exporter_with(&sink, true);

        let pending = exporter.begin_capture(&mut TestRegion::new(1, 2)).unwrap();
        assert_eq!(pending.dimensions().0 % 2, 0);
        let route = std::thread::spawn(move || pending.deliver()).join().unwrap().unwrap();

        assert!(matches!(route, ExportRoute::Downloaded(_)));
        assert!(!exporter.is_busy());
    }

    #[test]
    fn test_download_failure_is_reported() {
        let sink = Arc::new(NullSink::new(NullShareBehavior::Unavailable).failing_downloads());
        let exporter = exporter_with(&sink, true);

        let result = exporter.capture_and_share(&mut TestRegion::new(1, 2));
        assert!(matches!(result, Err(SnapshotError::Delivery(_))));
        assert!(!exporter.is_busy());
    }
}
