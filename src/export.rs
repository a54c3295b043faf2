//! Export pipeline: capture a render surface into PNG bytes and deliver it
//! as a download.
//!
//! The capture path mirrors what a browser-side rasterizer has to do:
//! acquire font CSS and inject it scoped to the captured subtree, wait for
//! the font readiness signal plus a settle delay, snapshot a neutralized
//! clone of the surface at 1:1 pixel ratio, then release the injected style
//! on every exit path.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::fonts::FontService;
use crate::rendering::{raster, RenderSurface};
use crate::{DeckConfig, SLIDE_HEIGHT, SLIDE_WIDTH};

/// Receives finished PNG exports.
///
/// The default [`FileSink`] writes into a directory, the native analogue of
/// a browser download. Tests substitute recording sinks.
pub trait DownloadSink: Send {
    fn deliver(&mut self, filename: &str, png: &[u8]) -> Result<()>;
}

/// Writes exports into a target directory
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for FileSink {
    fn deliver(&mut self, filename: &str, png: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(filename), png)?;
        Ok(())
    }
}

/// Scoped font-style injection: the CSS is attached to the surface on
/// construction and removed again when the guard drops, so cleanup happens
/// on success and failure paths alike.
struct InjectedStyle<'a> {
    surface: &'a mut RenderSurface,
}

impl<'a> InjectedStyle<'a> {
    fn inject(surface: &'a mut RenderSurface, css: Option<String>) -> Self {
        surface.injected_font_css = css;
        Self { surface }
    }

    fn surface(&self) -> &RenderSurface {
        self.surface
    }
}

impl Drop for InjectedStyle<'_> {
    fn drop(&mut self) {
        self.surface.injected_font_css = None;
    }
}

/// Captures surfaces and hands the encoded PNGs to a sink
pub struct ExportPipeline {
    fonts: Arc<FontService>,
    settle_delay: Duration,
}

impl ExportPipeline {
    pub fn new(fonts: Arc<FontService>, config: &DeckConfig) -> Self {
        Self {
            fonts,
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        }
    }

    /// Capture `surface` as a 1080x1350 PNG at 1:1 pixel ratio.
    ///
    /// The surface's preview transform, visibility and opacity are forced to
    /// neutral values for the snapshot so off-screen layout tricks never
    /// leak into the output. Font CSS fetch failure degrades silently; any
    /// other failure aborts this capture only.
    pub async fn capture(&self, surface: &mut RenderSurface) -> Result<Vec<u8>> {
        let css = self.fonts.fetch_css().await;
        let injected = InjectedStyle::inject(surface, css);

        self.fonts.ready().await;
        tokio::time::sleep(self.settle_delay).await;

        let neutral = injected.surface().neutralized();
        let pixmap = raster::rasterize(&neutral)?;
        if pixmap.width != SLIDE_WIDTH || pixmap.height != SLIDE_HEIGHT {
            return Err(Error::CaptureError(format!(
                "Unexpected capture size {}x{}",
                pixmap.width, pixmap.height
            )));
        }
        raster::encode_png(&pixmap)
    }

    /// Capture and deliver one export
    pub async fn export(
        &self,
        surface: &mut RenderSurface,
        filename: &str,
        sink: &mut dyn DownloadSink,
    ) -> Result<()> {
        let png = self.capture(surface).await?;
        sink.deliver(filename, &png)
            .map_err(|e| Error::DeliveryError(format!("{}: {}", filename, e)))?;
        log::debug!("Delivered {} ({} bytes)", filename, png.len());
        Ok(())
    }
}
