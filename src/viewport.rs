//! Preview viewport: fits the slide canvas into the host container.
//!
//! The preview scale is recomputed on every resize signal as
//! `min((h - pad) / 1350, (w - pad) / 1080, max)` so the scaled slide always
//! fits the container with a margin and never exceeds 60% of true size.

use crate::{DeckConfig, SLIDE_HEIGHT, SLIDE_WIDTH};

/// Tracks the host container dimensions and the derived preview scale
#[derive(Debug, Clone)]
pub struct PreviewViewport {
    container_width: u32,
    container_height: u32,
    padding: u32,
    max_scale: f32,
    scale: f32,
}

impl PreviewViewport {
    pub fn new(config: &DeckConfig) -> Self {
        let mut vp = Self {
            container_width: 0,
            container_height: 0,
            padding: config.viewport_padding,
            max_scale: config.max_preview_scale,
            scale: config.max_preview_scale.min(0.3),
        };
        // Start from a reasonable default container so a host that never
        // sends a resize still gets a usable preview.
        vp.on_resize(SLIDE_WIDTH, SLIDE_HEIGHT);
        vp
    }

    /// Handle a host resize signal and recompute the preview scale
    pub fn on_resize(&mut self, container_width: u32, container_height: u32) {
        self.container_width = container_width;
        self.container_height = container_height;
        self.scale = fit_scale(
            container_width,
            container_height,
            self.padding,
            self.max_scale,
        );
    }

    /// Current preview scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Scaled preview dimensions in device pixels
    pub fn preview_size(&self) -> (u32, u32) {
        (
            (SLIDE_WIDTH as f32 * self.scale).round() as u32,
            (SLIDE_HEIGHT as f32 * self.scale).round() as u32,
        )
    }
}

/// Compute the preview scale for a container, clamped to `max_scale`
pub fn fit_scale(container_width: u32, container_height: u32, padding: u32, max_scale: f32) -> f32 {
    let avail_w = container_width.saturating_sub(padding) as f32;
    let avail_h = container_height.saturating_sub(padding) as f32;
    let scale_w = avail_w / SLIDE_WIDTH as f32;
    let scale_h = avail_h / SLIDE_HEIGHT as f32;
    scale_h.min(scale_w).min(max_scale).max(0.0)
}
