//! Deckshot Slide Engine
//!
//! A slide-deck preview and export engine for Rust that renders a fixed,
//! hand-designed deck, lets a host page through scaled-down previews, and
//! captures each slide as a pixel-exact 1080x1350 PNG.
//!
//! # Features
//!
//! - **Dual-tree rendering**: one scene per slide, rendered twice (scaled
//!   preview + scale-1 export surface) so previews are pixel-identical,
//!   just smaller, to the exported image
//! - **Sequential export pipeline**: font-readiness gating, scoped font
//!   style injection with guaranteed cleanup, and paced batch downloads
//! - **Pluggable delivery**: downloads go through a [`DownloadSink`] so
//!   hosts and tests can intercept finished PNGs
//!
//! # Example
//!
//! ```no_run
//! use deckshot::{DeckConfig, DeckController};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> deckshot::Result<()> {
//! let config = DeckConfig {
//!     output_dir: "out".into(),
//!     ..Default::default()
//! };
//!
//! let mut deck = DeckController::new(config)?;
//! deck.mount_export_surfaces()?;
//! deck.go_next();
//! deck.download_current().await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod catalog;
pub mod controller;
pub mod export;
pub mod fonts;
pub mod rendering;
pub mod viewport;

pub use catalog::SlideCatalog;
pub use controller::DeckController;
pub use export::{DownloadSink, ExportPipeline, FileSink};
pub use fonts::FontService;
pub use viewport::PreviewViewport;

/// Logical slide width in pixels (export output width)
pub const SLIDE_WIDTH: u32 = 1080;

/// Logical slide height in pixels (export output height)
pub const SLIDE_HEIGHT: u32 = 1350;

/// Configuration for the deck engine
///
/// The defaults reproduce the behavior of the reference deck: a 500ms settle
/// delay before each capture, 500ms pacing between batch exports, previews
/// clamped to 60% of true size with a 40px fitting margin, and output files
/// named `webdesenrola-slide-<n>.png`.
///
/// # Examples
///
/// ```
/// let cfg = deckshot::DeckConfig::default();
/// assert_eq!(cfg.filename_prefix, "webdesenrola");
/// assert_eq!(cfg.max_preview_scale, 0.6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Prefix for exported filenames (`<prefix>-slide-<n>.png`)
    pub filename_prefix: String,
    /// Directory the default [`FileSink`] delivers finished PNGs into
    pub output_dir: PathBuf,
    /// Font-service URL to fetch font CSS from before capture; `None`
    /// disables injection entirely
    pub font_css_url: Option<String>,
    /// Delay after the readiness signal before taking a capture, giving
    /// layout a chance to settle (heuristic, not a synchronization primitive)
    pub settle_delay_ms: u64,
    /// Pacing delay between consecutive exports in a batch download
    pub export_pacing_ms: u64,
    /// Upper bound on the preview scale
    pub max_preview_scale: f32,
    /// Margin subtracted from the container on each axis when fitting the
    /// preview
    pub viewport_padding: u32,
    /// Timeout for the font CSS fetch in milliseconds
    pub font_fetch_timeout_ms: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            filename_prefix: "webdesenrola".to_string(),
            output_dir: PathBuf::from("."),
            font_css_url: None,
            settle_delay_ms: 500,
            export_pacing_ms: 500,
            max_preview_scale: 0.6,
            viewport_padding: 40,
            font_fetch_timeout_ms: 10000,
        }
    }
}

/// One entry in the slide catalog
///
/// Descriptors are immutable, defined once at startup, and their order is
/// significant: it defines both navigation order and thumbnail order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    /// Unique, stable slide identifier
    pub id: u32,
    /// Human-readable slide title (shown in thumbnails and the pager)
    pub title: String,
}

impl SlideDescriptor {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
