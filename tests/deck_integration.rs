//! End-to-end controller tests: batch downloads, pacing, and failure
//! isolation, driven through a recording sink.

use std::sync::{Arc, Mutex};

use deckshot::export::DownloadSink;
use deckshot::{DeckConfig, DeckController, Result, SLIDE_HEIGHT, SLIDE_WIDTH};
use tokio::time::Instant;

#[derive(Clone)]
struct Delivery {
    filename: String,
    at: Instant,
    width: u32,
    height: u32,
}

#[derive(Clone, Default)]
struct RecordingSink {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

fn png_dimensions(png: &[u8]) -> (u32, u32) {
    // IHDR follows the 8-byte signature and 8 bytes of chunk framing
    let w = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let h = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (w, h)
}

impl DownloadSink for RecordingSink {
    fn deliver(&mut self, filename: &str, png: &[u8]) -> Result<()> {
        let (width, height) = png_dimensions(png);
        self.deliveries.lock().unwrap().push(Delivery {
            filename: filename.to_string(),
            at: Instant::now(),
            width,
            height,
        });
        Ok(())
    }
}

/// Fails delivery for one filename, succeeds for the rest
#[derive(Clone)]
struct FlakySink {
    inner: RecordingSink,
    fail_on: String,
}

impl DownloadSink for FlakySink {
    fn deliver(&mut self, filename: &str, png: &[u8]) -> Result<()> {
        if filename == self.fail_on {
            return Err(deckshot::Error::DeliveryError("disk full".into()));
        }
        self.inner.deliver(filename, png)
    }
}

fn test_config() -> DeckConfig {
    DeckConfig::default()
}

#[tokio::test(start_paused = true)]
async fn download_all_delivers_six_ordered_paced_exports() {
    let sink = RecordingSink::default();
    let deliveries = sink.deliveries.clone();
    let mut deck = DeckController::with_sink(test_config(), Box::new(sink)).unwrap();
    deck.mount_export_surfaces().unwrap();

    deck.download_all().await.unwrap();

    let recorded = deliveries.lock().unwrap();
    assert_eq!(recorded.len(), 6);
    for (i, d) in recorded.iter().enumerate() {
        assert_eq!(d.filename, format!("webdesenrola-slide-{}.png", i + 1));
        assert_eq!((d.width, d.height), (SLIDE_WIDTH, SLIDE_HEIGHT));
    }
    // Pacing: consecutive deliveries at least 500ms apart in virtual time
    for pair in recorded.windows(2) {
        let gap = pair[1].at.duration_since(pair[0].at);
        assert!(
            gap.as_millis() >= 500,
            "deliveries only {}ms apart",
            gap.as_millis()
        );
    }
}

#[tokio::test(start_paused = true)]
async fn exports_are_full_resolution_regardless_of_preview_scale() {
    let sink = RecordingSink::default();
    let deliveries = sink.deliveries.clone();
    let mut deck = DeckController::with_sink(test_config(), Box::new(sink)).unwrap();
    deck.mount_export_surfaces().unwrap();

    // Shrink the preview hard; the export must not notice
    deck.on_resize(300, 300);
    assert!(deck.preview_scale() < 0.25);
    deck.select_slide(3);
    deck.download_current().await.unwrap();

    let recorded = deliveries.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].filename, "webdesenrola-slide-4.png");
    assert_eq!((recorded[0].width, recorded[0].height), (1080, 1350));
}

#[tokio::test(start_paused = true)]
async fn download_current_without_mounted_surface_delivers_nothing() {
    let sink = RecordingSink::default();
    let deliveries = sink.deliveries.clone();
    let mut deck = DeckController::with_sink(test_config(), Box::new(sink)).unwrap();

    deck.download_current().await.unwrap();

    assert!(deliveries.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn mid_batch_failure_alerts_once_and_continues() {
    let inner = RecordingSink::default();
    let deliveries = inner.deliveries.clone();
    let sink = FlakySink {
        inner,
        fail_on: "webdesenrola-slide-3.png".to_string(),
    };
    let mut deck = DeckController::with_sink(test_config(), Box::new(sink)).unwrap();
    deck.mount_export_surfaces().unwrap();

    let alerts: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let alerts_clone = alerts.clone();
    deck.on_alert(move |msg| alerts_clone.lock().unwrap().push(msg.to_string()));

    deck.download_all().await.unwrap();

    let recorded = deliveries.lock().unwrap();
    let names: Vec<&str> = recorded.iter().map(|d| d.filename.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "webdesenrola-slide-1.png",
            "webdesenrola-slide-2.png",
            "webdesenrola-slide-4.png",
            "webdesenrola-slide-5.png",
            "webdesenrola-slide-6.png",
        ]
    );
    let alerts = alerts.lock().unwrap();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("erro ao gerar a imagem"));
}

#[tokio::test(start_paused = true)]
async fn controller_reports_readiness_after_download() {
    let mut deck = DeckController::with_sink(test_config(), Box::new(RecordingSink::default())).unwrap();
    assert!(!deck.is_ready());
    deck.mount_export_surfaces().unwrap();
    deck.download_current().await.unwrap();
    assert!(deck.is_ready());
}
