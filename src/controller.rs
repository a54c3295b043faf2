//! Deck controller: navigation state, the dual render trees, and the
//! download operations.
//!
//! The controller owns all mutable state the host used to keep in ambient
//! globals: the current slide index, the preview viewport scale, and the
//! font readiness flag (via [`FontService`]). Hosts read these through
//! queries; nothing here is globally shared.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::SlideCatalog;
use crate::error::Result;
use crate::export::{DownloadSink, ExportPipeline, FileSink};
use crate::fonts::FontService;
use crate::rendering::{raster, Pixmap, RenderSurface};
use crate::viewport::PreviewViewport;
use crate::{DeckConfig, SlideDescriptor};

type AlertHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Navigation state: the current slide index, wrapping modulo N
#[derive(Debug, Clone, Copy)]
struct ViewState {
    current: usize,
}

/// Holds the deck, the preview and export surface trees, and drives the
/// export pipeline
pub struct DeckController {
    config: DeckConfig,
    catalog: SlideCatalog,
    view: ViewState,
    viewport: PreviewViewport,
    previews: Vec<RenderSurface>,
    exports: Vec<Option<RenderSurface>>,
    fonts: Arc<FontService>,
    pipeline: ExportPipeline,
    sink: Box<dyn DownloadSink>,
    on_alert: Option<AlertHandler>,
}

impl DeckController {
    /// Create a controller over the built-in catalog, delivering exports to
    /// the configured output directory
    pub fn new(config: DeckConfig) -> Result<Self> {
        let sink = Box::new(FileSink::new(config.output_dir.clone()));
        Self::with_sink(config, sink)
    }

    /// Create a controller with a custom download sink
    pub fn with_sink(config: DeckConfig, sink: Box<dyn DownloadSink>) -> Result<Self> {
        let catalog = SlideCatalog::builtin();
        let viewport = PreviewViewport::new(&config);
        let mut previews = Vec::with_capacity(catalog.len());
        for index in 0..catalog.len() {
            let mut surface = RenderSurface::new(index, viewport.scale())?;
            surface.visible = index == 0;
            surface.opacity = if index == 0 { 1.0 } else { 0.0 };
            previews.push(surface);
        }
        let exports = (0..catalog.len()).map(|_| None).collect();
        let fonts = Arc::new(FontService::new(&config)?);
        let pipeline = ExportPipeline::new(fonts.clone(), &config);
        Ok(Self {
            config,
            catalog,
            view: ViewState { current: 0 },
            viewport,
            previews,
            exports,
            fonts,
            pipeline,
            sink,
            on_alert: None,
        })
    }

    /// Register a handler for user-visible error notifications. Without one,
    /// alerts go to the error log.
    pub fn on_alert<F>(&mut self, cb: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_alert = Some(Arc::new(cb));
    }

    fn alert(&self, message: &str) {
        match &self.on_alert {
            Some(cb) => cb(message),
            None => log::error!("{}", message),
        }
    }

    // --- Catalog and state queries ---

    pub fn catalog(&self) -> &SlideCatalog {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.view.current
    }

    pub fn current_slide(&self) -> &SlideDescriptor {
        // The view index is maintained in [0, N) by every mutation
        self.catalog
            .get(self.view.current)
            .expect("view index in catalog range")
    }

    /// Whether font assets are loaded and download controls should be enabled
    pub fn is_ready(&self) -> bool {
        self.fonts.is_ready()
    }

    /// The font service, so hosts can kick off loading at startup
    pub fn fonts(&self) -> Arc<FontService> {
        self.fonts.clone()
    }

    pub fn preview_scale(&self) -> f32 {
        self.viewport.scale()
    }

    // --- Navigation ---

    /// Advance to the next slide, wrapping past the end
    pub fn go_next(&mut self) {
        self.view.current = (self.view.current + 1) % self.catalog.len();
        self.sync_preview_visibility();
    }

    /// Retreat to the previous slide, wrapping past the start
    pub fn go_previous(&mut self) {
        let n = self.catalog.len();
        self.view.current = (self.view.current + n - 1) % n;
        self.sync_preview_visibility();
    }

    /// Jump directly to `index`. The caller (thumbnail list) guarantees the
    /// index is valid.
    pub fn select_slide(&mut self, index: usize) {
        debug_assert!(index < self.catalog.len());
        self.view.current = index % self.catalog.len();
        self.sync_preview_visibility();
    }

    fn sync_preview_visibility(&mut self) {
        for (i, surface) in self.previews.iter_mut().enumerate() {
            let active = i == self.view.current;
            surface.visible = active;
            surface.opacity = if active { 1.0 } else { 0.0 };
        }
    }

    // --- Preview tree ---

    /// Handle a host resize signal: recompute the preview scale and apply it
    /// to every preview surface
    pub fn on_resize(&mut self, container_width: u32, container_height: u32) {
        self.viewport.on_resize(container_width, container_height);
        let scale = self.viewport.scale();
        for surface in &mut self.previews {
            surface.scale = scale;
        }
    }

    /// The single visible preview surface
    pub fn visible_preview(&self) -> &RenderSurface {
        &self.previews[self.view.current]
    }

    /// All preview surfaces, in catalog order
    pub fn previews(&self) -> &[RenderSurface] {
        &self.previews
    }

    /// Rasterize the current slide at the preview scale
    pub fn render_preview(&self) -> Result<Pixmap> {
        raster::rasterize(self.visible_preview())
    }

    // --- Export tree ---

    /// Mount the hidden scale-1 export surfaces for every slide
    pub fn mount_export_surfaces(&mut self) -> Result<()> {
        for index in 0..self.catalog.len() {
            let mut surface = RenderSurface::new(index, 1.0)?;
            surface.visible = false;
            surface.opacity = 0.0;
            self.exports[index] = Some(surface);
        }
        Ok(())
    }

    fn export_filename(&self, index: usize) -> String {
        format!("{}-slide-{}.png", self.config.filename_prefix, index + 1)
    }

    /// Export the slide at `index`. Returns `Ok(false)` when its export
    /// surface is not mounted (silent skip), `Ok(true)` on delivery.
    async fn export_slide(&mut self, index: usize) -> Result<bool> {
        let filename = self.export_filename(index);
        let surface = match self.exports.get_mut(index).and_then(Option::as_mut) {
            Some(s) => s,
            None => return Ok(false),
        };
        self.pipeline
            .export(surface, &filename, self.sink.as_mut())
            .await?;
        Ok(true)
    }

    /// Export the current slide as `"<prefix>-slide-<n>.png"`.
    ///
    /// A no-op when the export surface is not mounted. A capture failure is
    /// alerted and returned; the controller stays fully usable afterwards.
    pub async fn download_current(&mut self) -> Result<()> {
        self.fonts.load().await;
        let index = self.view.current;
        if let Err(e) = self.export_slide(index).await {
            self.alert(&format!("Houve um erro ao gerar a imagem: {}", e));
            return Err(e);
        }
        Ok(())
    }

    /// Export every slide in catalog order, strictly sequentially, with the
    /// configured pacing delay after each export.
    ///
    /// The pacing keeps many large rasterizations from being queued back to
    /// back; it is a backpressure policy, not a correctness requirement.
    /// A failure mid-sequence is alerted and the batch continues with the
    /// remaining slides. There is no cancellation: once started, the batch
    /// runs to completion.
    pub async fn download_all(&mut self) -> Result<()> {
        self.fonts.load().await;
        let pacing = Duration::from_millis(self.config.export_pacing_ms);
        for index in 0..self.catalog.len() {
            match self.export_slide(index).await {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    self.alert(&format!("Houve um erro ao gerar a imagem: {}", e));
                }
            }
            tokio::time::sleep(pacing).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DeckController {
        DeckController::new(DeckConfig::default()).unwrap()
    }

    #[test]
    fn next_wraps_around_full_cycle() {
        let mut deck = controller();
        for start in 0..deck.catalog().len() {
            deck.select_slide(start);
            for _ in 0..deck.catalog().len() {
                deck.go_next();
            }
            assert_eq!(deck.current_index(), start);
        }
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut deck = controller();
        deck.go_previous();
        assert_eq!(deck.current_index(), deck.catalog().len() - 1);
    }

    #[test]
    fn seven_nexts_then_previous() {
        let mut deck = controller();
        for _ in 0..7 {
            deck.go_next();
        }
        assert_eq!(deck.current_index(), 1);
        deck.go_previous();
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn exactly_one_preview_visible() {
        let mut deck = controller();
        deck.go_next();
        deck.go_next();
        let visible: Vec<usize> = deck
            .previews()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(visible, vec![2]);
        assert_eq!(deck.visible_preview().slide_index, 2);
    }

    #[test]
    fn resize_rescales_every_preview() {
        let mut deck = controller();
        deck.on_resize(1120, 2000);
        let scale = deck.preview_scale();
        assert!(scale <= 0.6);
        for surface in deck.previews() {
            assert_eq!(surface.scale, scale);
        }
    }

    #[test]
    fn render_preview_matches_viewport_size() {
        let mut deck = controller();
        deck.on_resize(800, 600);
        let pixmap = deck.render_preview().unwrap();
        let scale = deck.preview_scale();
        assert_eq!(
            pixmap.width,
            (crate::SLIDE_WIDTH as f32 * scale).round() as u32
        );
        assert_eq!(
            pixmap.height,
            (crate::SLIDE_HEIGHT as f32 * scale).round() as u32
        );
    }

    #[test]
    fn export_filenames_are_one_indexed() {
        let deck = controller();
        assert_eq!(deck.export_filename(0), "webdesenrola-slide-1.png");
        assert_eq!(deck.export_filename(5), "webdesenrola-slide-6.png");
    }

    #[tokio::test]
    async fn download_current_without_mount_is_noop() {
        let mut deck = controller();
        // No mount_export_surfaces call: must not error or deliver anything
        deck.download_current().await.unwrap();
    }

    #[test]
    fn current_slide_tracks_navigation() {
        let mut deck = controller();
        deck.select_slide(4);
        assert_eq!(deck.current_slide().title, "Dica 3: Poder do Sim");
    }
}
