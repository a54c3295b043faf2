//! Rendering: scenes, surfaces, and the software rasterizer.

pub mod paint;
pub mod raster;
pub mod scene;
pub mod templates;

use crate::error::{Error, Result};
use crate::rendering::scene::Scene;

/// A renderable binding of one slide's scene to a scale and visibility.
///
/// Two surfaces exist per slide at runtime: a preview surface whose scale
/// follows the viewport and whose visibility is toggled by index match, and
/// an export surface pinned at scale 1 that is never shown to the user.
#[derive(Debug, Clone)]
pub struct RenderSurface {
    pub slide_index: usize,
    pub scene: Scene,
    /// Uniform scale transform, anchored top-left
    pub scale: f32,
    pub visible: bool,
    pub opacity: f32,
    /// Font CSS injected for the duration of a capture; always removed
    /// again by the injection guard
    pub injected_font_css: Option<String>,
}

impl RenderSurface {
    /// Pure render entry point: `(slide_index, scale)` -> surface.
    ///
    /// Fails only when the index has no scene in the template set.
    pub fn new(slide_index: usize, scale: f32) -> Result<Self> {
        let scene = templates::slide_scene(slide_index)
            .ok_or_else(|| Error::RenderError(format!("No template for slide {}", slide_index)))?;
        Ok(Self {
            slide_index,
            scene,
            scale,
            visible: true,
            opacity: 1.0,
            injected_font_css: None,
        })
    }

    /// Device pixel dimensions after the scale transform
    pub fn device_size(&self) -> (u32, u32) {
        (
            (self.scene.width as f32 * self.scale).round().max(1.0) as u32,
            (self.scene.height as f32 * self.scale).round().max(1.0) as u32,
        )
    }

    /// A copy with transform and visibility forced to neutral values, so
    /// off-screen/zero-opacity layout tricks never leak into a capture
    pub fn neutralized(&self) -> Self {
        Self {
            scale: 1.0,
            visible: true,
            opacity: 1.0,
            ..self.clone()
        }
    }
}

/// An owned RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// RGBA of the pixel at `(x, y)`; callers guarantee bounds
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let i = ((y * self.width + x) * 4) as usize;
        (
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_device_size_follows_scale() {
        let s = RenderSurface::new(0, 0.5).unwrap();
        assert_eq!(s.device_size(), (540, 675));
        let full = RenderSurface::new(0, 1.0).unwrap();
        assert_eq!(full.device_size(), (1080, 1350));
    }

    #[test]
    fn neutralized_preserves_scene() {
        let mut s = RenderSurface::new(2, 0.3).unwrap();
        s.visible = false;
        s.opacity = 0.0;
        let n = s.neutralized();
        assert_eq!(n.scale, 1.0);
        assert!(n.visible);
        assert_eq!(n.opacity, 1.0);
        assert_eq!(n.scene, s.scene);
    }

    #[test]
    fn unknown_slide_index_is_render_error() {
        assert!(RenderSurface::new(99, 1.0).is_err());
    }
}
