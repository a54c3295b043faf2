//! A scene is the resolution-independent display list for one slide.
//!
//! Scenes are built once per slide by the templates module and are shared by
//! the preview and export surfaces: preview and export differ only in the
//! transform applied at raster time, never in scene content. That is the
//! invariant that makes the miniature preview pixel-identical to the export.

use crate::rendering::paint::{Color, PaintCommand, TextAlign};
use crate::{SLIDE_HEIGHT, SLIDE_WIDTH};

/// Display list for one slide, in logical 1080x1350 coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub commands: Vec<PaintCommand>,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            width: SLIDE_WIDTH,
            height: SLIDE_HEIGHT,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: PaintCommand) {
        self.commands.push(cmd);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        self.push(PaintCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        thickness: u32,
        color: Color,
    ) {
        self.push(PaintCommand::StrokeRect {
            x,
            y,
            width,
            height,
            thickness,
            color,
        });
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        self.push(PaintCommand::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: u32, thickness: u32, color: Color) {
        self.push(PaintCommand::StrokeCircle {
            cx,
            cy,
            radius,
            thickness,
            color,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: i32,
        y: i32,
        text: impl Into<String>,
        size: u32,
        color: Color,
        align: TextAlign,
        letter_spacing: i32,
    ) {
        self.push(PaintCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            color,
            align,
            letter_spacing,
        });
    }
}
