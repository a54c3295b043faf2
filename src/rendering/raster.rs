//! Software rasterizer: scene + transform -> RGBA pixmap -> PNG bytes.
//!
//! Commands are authored in logical 1080x1350 coordinates; the surface scale
//! is applied per primitive so a preview raster is the export raster shrunk,
//! never a different drawing.

use crate::error::{Error, Result};
use crate::rendering::paint::{Color, PaintCommand, TextAlign};
use crate::rendering::{Pixmap, RenderSurface};

/// Rasterize a surface at its current scale and opacity
pub fn rasterize(surface: &RenderSurface) -> Result<Pixmap> {
    let (width, height) = surface.device_size();
    if width == 0 || height == 0 {
        return Err(Error::CaptureError("Surface has zero device size".into()));
    }
    let mut pixmap = Pixmap::new(width, height);
    let scale = surface.scale;
    let opacity = surface.opacity;

    fill_device_rect(
        &mut pixmap,
        0,
        0,
        width,
        height,
        surface.scene.background.with_opacity(opacity),
    );

    for cmd in &surface.scene.commands {
        match cmd {
            PaintCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let (dx, dy, dw, dh) = transform_rect(*x, *y, *width, *height, scale);
                fill_device_rect(&mut pixmap, dx, dy, dw, dh, color.with_opacity(opacity));
            }
            PaintCommand::StrokeRect {
                x,
                y,
                width,
                height,
                thickness,
                color,
            } => {
                let t = ((*thickness as f32 * scale).round() as u32).max(1);
                let (dx, dy, dw, dh) = transform_rect(*x, *y, *width, *height, scale);
                let c = color.with_opacity(opacity);
                fill_device_rect(&mut pixmap, dx, dy, dw, t, c);
                fill_device_rect(&mut pixmap, dx, dy + dh as i32 - t as i32, dw, t, c);
                fill_device_rect(&mut pixmap, dx, dy, t, dh, c);
                fill_device_rect(&mut pixmap, dx + dw as i32 - t as i32, dy, t, dh, c);
            }
            PaintCommand::FillCircle {
                cx,
                cy,
                radius,
                color,
            } => {
                fill_device_circle(
                    &mut pixmap,
                    *cx as f32 * scale,
                    *cy as f32 * scale,
                    *radius as f32 * scale,
                    0.0,
                    color.with_opacity(opacity),
                );
            }
            PaintCommand::StrokeCircle {
                cx,
                cy,
                radius,
                thickness,
                color,
            } => {
                let r = *radius as f32 * scale;
                let t = (*thickness as f32 * scale).max(1.0);
                fill_device_circle(
                    &mut pixmap,
                    *cx as f32 * scale,
                    *cy as f32 * scale,
                    r,
                    (r - t).max(0.0),
                    color.with_opacity(opacity),
                );
            }
            PaintCommand::Text {
                x,
                y,
                text,
                size,
                color,
                align,
                letter_spacing,
            } => {
                draw_text(
                    &mut pixmap,
                    *x,
                    *y,
                    text,
                    *size,
                    color.with_opacity(opacity),
                    *align,
                    *letter_spacing,
                    scale,
                );
            }
        }
    }

    Ok(pixmap)
}

/// Encode a pixmap as an RGBA8 PNG
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, pixmap.width, pixmap.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| Error::CaptureError(format!("PNG header write failed: {}", e)))?;
        writer
            .write_image_data(&pixmap.data)
            .map_err(|e| Error::CaptureError(format!("PNG data write failed: {}", e)))?;
    }
    Ok(out)
}

fn transform_rect(x: i32, y: i32, width: u32, height: u32, scale: f32) -> (i32, i32, u32, u32) {
    let x0 = (x as f32 * scale).round() as i32;
    let y0 = (y as f32 * scale).round() as i32;
    let x1 = ((x as f32 + width as f32) * scale).round() as i32;
    let y1 = ((y as f32 + height as f32) * scale).round() as i32;
    (x0, y0, (x1 - x0).max(0) as u32, (y1 - y0).max(0) as u32)
}

fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x >= pixmap.width as i32 || y >= pixmap.height as i32 || color.a == 0 {
        return;
    }
    let i = ((y as u32 * pixmap.width + x as u32) * 4) as usize;
    let sa = color.a as u32;
    let inv = 255 - sa;
    let d = &mut pixmap.data[i..i + 4];
    d[0] = ((color.r as u32 * sa + d[0] as u32 * inv) / 255) as u8;
    d[1] = ((color.g as u32 * sa + d[1] as u32 * inv) / 255) as u8;
    d[2] = ((color.b as u32 * sa + d[2] as u32 * inv) / 255) as u8;
    d[3] = (sa + d[3] as u32 * inv / 255).min(255) as u8;
}

fn fill_device_rect(pixmap: &mut Pixmap, x: i32, y: i32, width: u32, height: u32, color: Color) {
    for py in y..y + height as i32 {
        for px in x..x + width as i32 {
            blend_pixel(pixmap, px, py, color);
        }
    }
}

/// Fill the ring between `inner` and `outer` radius; `inner == 0` fills a disc
fn fill_device_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, outer: f32, inner: f32, color: Color) {
    let x0 = (cx - outer).floor() as i32;
    let x1 = (cx + outer).ceil() as i32;
    let y0 = (cy - outer).floor() as i32;
    let y1 = (cy + outer).ceil() as i32;
    let outer_sq = outer * outer;
    let inner_sq = inner * inner;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= outer_sq && dist_sq >= inner_sq {
                blend_pixel(pixmap, px, py, color);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    pixmap: &mut Pixmap,
    x: i32,
    y: i32,
    text: &str,
    size: u32,
    color: Color,
    align: TextAlign,
    letter_spacing: i32,
    scale: f32,
) {
    let glyphs: Vec<[u8; 8]> = text.chars().map(|c| glyph_bitmap(fold_char(c))).collect();
    if glyphs.is_empty() {
        return;
    }
    let advance = size as i32 + letter_spacing;
    let text_width = advance * glyphs.len() as i32 - letter_spacing;
    let start_x = match align {
        TextAlign::Left => x,
        TextAlign::Center => x - text_width / 2,
        TextAlign::Right => x - text_width,
    };
    let cell = size as f32 / 8.0;
    for (gi, rows) in glyphs.iter().enumerate() {
        let gx = start_x as f32 + (gi as i32 * advance) as f32;
        for (row, bits) in rows.iter().enumerate() {
            if *bits == 0 {
                continue;
            }
            for col in 0..8u32 {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                let lx0 = gx + col as f32 * cell;
                let ly0 = y as f32 + row as f32 * cell;
                let px0 = (lx0 * scale).round() as i32;
                let py0 = (ly0 * scale).round() as i32;
                let px1 = ((lx0 + cell) * scale).round() as i32;
                let py1 = ((ly0 + cell) * scale).round() as i32;
                fill_device_rect(
                    pixmap,
                    px0,
                    py0,
                    (px1 - px0).max(1) as u32,
                    (py1 - py0).max(1) as u32,
                    color,
                );
            }
        }
    }
}

/// Fold cased and accented Latin characters onto the builtin glyph set
fn fold_char(c: char) -> char {
    let c = c.to_ascii_uppercase();
    match c {
        'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'A',
        'é' | 'ê' | 'É' | 'Ê' => 'E',
        'í' | 'Í' => 'I',
        'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'O',
        'ú' | 'ü' | 'Ú' | 'Ü' => 'U',
        'ç' | 'Ç' => 'C',
        _ => c,
    }
}

/// 8x8 bitmap for one glyph; unknown characters render as a hollow box
fn glyph_bitmap(c: char) -> [u8; 8] {
    match c {
        ' ' => [0; 8],
        'A' => [0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x00],
        'B' => [0xFC, 0xC6, 0xC6, 0xFC, 0xC6, 0xC6, 0xFC, 0x00],
        'C' => [0x7C, 0xC6, 0xC0, 0xC0, 0xC0, 0xC6, 0x7C, 0x00],
        'D' => [0xF8, 0xCC, 0xC6, 0xC6, 0xC6, 0xCC, 0xF8, 0x00],
        'E' => [0xFE, 0xC0, 0xC0, 0xFC, 0xC0, 0xC0, 0xFE, 0x00],
        'F' => [0xFE, 0xC0, 0xC0, 0xFC, 0xC0, 0xC0, 0xC0, 0x00],
        'G' => [0x7C, 0xC6, 0xC0, 0xDE, 0xC6, 0xC6, 0x7C, 0x00],
        'H' => [0xC6, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0xC6, 0x00],
        'I' => [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
        'J' => [0x1E, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, 0x00],
        'K' => [0xC6, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0xC6, 0x00],
        'L' => [0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFE, 0x00],
        'M' => [0xC6, 0xEE, 0xFE, 0xD6, 0xC6, 0xC6, 0xC6, 0x00],
        'N' => [0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00],
        'O' => [0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00],
        'P' => [0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0xC0, 0x00],
        'Q' => [0x7C, 0xC6, 0xC6, 0xC6, 0xD6, 0xCC, 0x76, 0x00],
        'R' => [0xFC, 0xC6, 0xC6, 0xFC, 0xD8, 0xCC, 0xC6, 0x00],
        'S' => [0x7C, 0xC6, 0xC0, 0x7C, 0x06, 0xC6, 0x7C, 0x00],
        'T' => [0xFE, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
        'U' => [0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00],
        'V' => [0xC6, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x10, 0x00],
        'W' => [0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00],
        'X' => [0xC6, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0xC6, 0x00],
        'Y' => [0xC6, 0xC6, 0x6C, 0x38, 0x18, 0x18, 0x18, 0x00],
        'Z' => [0xFE, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xFE, 0x00],
        '0' => [0x7C, 0xC6, 0xCE, 0xD6, 0xE6, 0xC6, 0x7C, 0x00],
        '1' => [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00],
        '2' => [0x7C, 0xC6, 0x06, 0x1C, 0x30, 0x60, 0xFE, 0x00],
        '3' => [0x7C, 0xC6, 0x06, 0x3C, 0x06, 0xC6, 0x7C, 0x00],
        '4' => [0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x0C, 0x00],
        '5' => [0xFE, 0xC0, 0xFC, 0x06, 0x06, 0xC6, 0x7C, 0x00],
        '6' => [0x7C, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0x7C, 0x00],
        '7' => [0xFE, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
        '8' => [0x7C, 0xC6, 0xC6, 0x7C, 0xC6, 0xC6, 0x7C, 0x00],
        '9' => [0x7C, 0xC6, 0xC6, 0x7E, 0x06, 0x06, 0x7C, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30],
        '!' => [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00],
        '?' => [0x7C, 0xC6, 0x06, 0x1C, 0x18, 0x00, 0x18, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00],
        '"' => [0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '\'' => [0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '@' => [0x7C, 0xC6, 0xDE, 0xD6, 0xDC, 0xC0, 0x7C, 0x00],
        '#' => [0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00],
        '/' => [0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x00, 0x00],
        '(' => [0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00],
        ')' => [0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00],
        '%' => [0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00, 0x00],
        '+' => [0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00],
        _ => [0xFE, 0x82, 0x82, 0x82, 0x82, 0x82, 0xFE, 0x00],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::{BRAND_GREEN, BRAND_PAPER};
    use crate::rendering::scene::Scene;

    fn plain_surface(scene: Scene, scale: f32) -> RenderSurface {
        RenderSurface {
            slide_index: 0,
            scene,
            scale,
            visible: true,
            opacity: 1.0,
            injected_font_css: None,
        }
    }

    #[test]
    fn rasterize_fills_background() {
        let scene = Scene::new(BRAND_GREEN);
        let surface = plain_surface(scene, 0.1);
        let pixmap = rasterize(&surface).unwrap();
        assert_eq!(pixmap.width, 108);
        assert_eq!(pixmap.height, 135);
        assert_eq!(pixmap.pixel(50, 50), (0x1B, 0x4D, 0x3E, 255));
    }

    #[test]
    fn fill_rect_lands_where_drawn() {
        let mut scene = Scene::new(BRAND_GREEN);
        scene.fill_rect(0, 0, 100, 100, BRAND_PAPER);
        let surface = plain_surface(scene, 1.0);
        let pixmap = rasterize(&surface).unwrap();
        assert_eq!(pixmap.pixel(50, 50), (0xF4, 0xF1, 0xEA, 255));
        assert_eq!(pixmap.pixel(150, 150), (0x1B, 0x4D, 0x3E, 255));
    }

    #[test]
    fn alpha_blend_mixes_toward_source() {
        let mut scene = Scene::new(crate::rendering::paint::Color::rgb(0, 0, 0));
        scene.fill_rect(
            0,
            0,
            1080,
            1350,
            crate::rendering::paint::Color::rgba(255, 255, 255, 128),
        );
        let pixmap = rasterize(&plain_surface(scene, 0.05)).unwrap();
        let (r, _, _, a) = pixmap.pixel(10, 10);
        assert!(r > 100 && r < 160, "expected mid gray, got {}", r);
        assert_eq!(a, 255);
    }

    #[test]
    fn text_marks_pixels() {
        let mut scene = Scene::new(BRAND_GREEN);
        scene.text(
            100,
            100,
            "ERRO",
            120,
            BRAND_PAPER,
            TextAlign::Left,
            0,
        );
        let pixmap = rasterize(&plain_surface(scene, 1.0)).unwrap();
        let mut found = false;
        for y in 100..220 {
            for x in 100..580 {
                if pixmap.pixel(x, y) == (0xF4, 0xF1, 0xEA, 255) {
                    found = true;
                }
            }
        }
        assert!(found, "expected glyph pixels in the text box");
    }

    #[test]
    fn png_encoding_produces_signature() {
        let scene = Scene::new(BRAND_GREEN);
        let pixmap = rasterize(&plain_surface(scene, 0.05)).unwrap();
        let bytes = encode_png(&pixmap).unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn accents_fold_to_base_glyphs() {
        assert_eq!(fold_char('ã'), 'A');
        assert_eq!(fold_char('ç'), 'C');
        assert_eq!(fold_char('Ê'), 'E');
        assert_eq!(fold_char('x'), 'X');
    }
}
