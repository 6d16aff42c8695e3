//! Utility functions

use eframe::egui;

// Square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="14" fill="#9333ea"/><path fill="#fff" d="M14 12l12 12h12l12-12v26c0 9-8 16-18 16S14 47 14 38z"/><circle cx="25" cy="36" r="3" fill="#9333ea"/><circle cx="39" cy="36" r="3" fill="#9333ea"/><path fill="#ec4899" d="M29 43h6l-3 3z"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Decode downloaded image bytes into an egui image
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &rgba.into_raw()))
}

/// UV rect that makes `image` cover `bounds` entirely, cropping the overflow
pub fn cover_uv(image: egui::Vec2, bounds: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || bounds.x <= 0.0 || bounds.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let bounds_aspect = bounds.x / bounds.y;
    if image_aspect > bounds_aspect {
        // Wider than needed: crop left/right
        let w = bounds_aspect / image_aspect;
        let x0 = (1.0 - w) / 2.0;
        egui::Rect::from_min_max(egui::pos2(x0, 0.0), egui::pos2(x0 + w, 1.0))
    } else {
        let h = image_aspect / bounds_aspect;
        let y0 = (1.0 - h) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, y0), egui::pos2(1.0, y0 + h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_rasterizes() {
        let (rgba, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(rgba.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_image(b"not an image").is_err());
    }

    #[test]
    fn test_decode_png() {
        let mut buf = std::io::Cursor::new(Vec::new());
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        let img = decode_image(buf.get_ref()).unwrap();
        assert_eq!(img.size, [3, 2]);
    }

    #[test]
    fn test_cover_uv_crops_wide_image() {
        let uv = cover_uv(egui::vec2(400.0, 100.0), egui::vec2(200.0, 100.0));
        assert!((uv.width() - 0.5).abs() < 1e-6);
        assert!((uv.min.x - 0.25).abs() < 1e-6);
        assert_eq!(uv.height(), 1.0);
    }
}
