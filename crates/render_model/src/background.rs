//! Card backgrounds
//!
//! An image background is scaled to cover the canvas with its aspect ratio
//! kept, then centre-cropped to the exact canvas size.

use crate::{Color, RenderError, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;
use tiny_skia::{IntSize, Pixmap, PixmapPaint, Transform};

#[derive(Debug, Clone)]
pub enum Background {
    /// A single color
    Flat(Color),
    /// A decoded image at its source size
    Image(RgbaImage),
}

impl Background {
    /// Decode an image file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| RenderError::Background(format!("{}: {}", path.display(), e)))?
            .to_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return Err(RenderError::Background(format!(
                "{} has no pixels",
                path.display()
            )));
        }
        Ok(Self::Image(image))
    }

    /// Decode an image file, falling back to `fallback` if it cannot be read
    pub fn load_or(path: impl AsRef<Path>, fallback: Color) -> Self {
        match Self::open(path) {
            Ok(background) => background,
            Err(e) => {
                tracing::warn!("{}. Using flat background", e);
                Self::Flat(fallback)
            }
        }
    }

    /// Cover `pixmap` with this background
    pub(crate) fn paint(&self, pixmap: &mut Pixmap) -> Result<()> {
        match self {
            Self::Flat(color) => pixmap.fill(color.to_skia()),
            Self::Image(image) => {
                let fitted = cover_fit(image, pixmap.width(), pixmap.height());
                let layer = premultiplied_pixmap(fitted)?;
                pixmap.draw_pixmap(
                    0,
                    0,
                    layer.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                );
            }
        }
        Ok(())
    }
}

/// Scale `image` to cover `width`x`height` and crop the overflow equally
/// from both sides
pub fn cover_fit(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (src_w, src_h) = (image.width().max(1), image.height().max(1));
    let scale = (width as f32 / src_w as f32).max(height as f32 / src_h as f32);
    let scaled_w = ((src_w as f32 * scale).ceil() as u32).max(width);
    let scaled_h = ((src_h as f32 * scale).ceil() as u32).max(height);

    let scaled = if (scaled_w, scaled_h) == (image.width(), image.height()) {
        image.clone()
    } else {
        imageops::resize(image, scaled_w, scaled_h, FilterType::Lanczos3)
    };

    let left = (scaled_w - width) / 2;
    let top = (scaled_h - height) / 2;
    imageops::crop_imm(&scaled, left, top, width, height).to_image()
}

/// Convert straight RGBA to a premultiplied pixmap
fn premultiplied_pixmap(image: RgbaImage) -> Result<Pixmap> {
    let (width, height) = image.dimensions();
    let size = IntSize::from_wh(width, height)
        .ok_or(RenderError::CanvasAllocation { width, height })?;

    let mut data = image.into_raw();
    for px in data.chunks_exact_mut(4) {
        let color = tiny_skia::ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
        px.copy_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Pixmap::from_vec(data, size).ok_or_else(|| {
        RenderError::InvalidGeometry(format!("background buffer does not match {}x{}", width, height))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_cover_fit_landscape_into_portrait() {
        let image = RgbaImage::from_pixel(400, 200, Rgba([10, 20, 30, 255]));
        let fitted = cover_fit(&image, 108, 192);
        assert_eq!(fitted.dimensions(), (108, 192));
    }

    #[test]
    fn test_cover_fit_crops_centre() {
        // Left half red, right half blue; a square crop of a 2:1 image keeps the middle
        let image = RgbaImage::from_fn(200, 100, |x, _| {
            if x < 100 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let fitted = cover_fit(&image, 100, 100);
        assert_eq!(fitted.dimensions(), (100, 100));
        assert!(fitted.get_pixel(5, 50)[0] > 200);
        assert!(fitted.get_pixel(94, 50)[2] > 200);
    }

    #[test]
    fn test_cover_fit_same_size_is_identity() {
        let image = RgbaImage::from_pixel(30, 40, Rgba([1, 2, 3, 255]));
        assert_eq!(cover_fit(&image, 30, 40), image);
    }

    #[test]
    fn test_missing_file_falls_back_to_flat() {
        let fallback = Color::rgb(20, 20, 40);
        let background = Background::load_or("/no/such/background.png", fallback);
        assert!(matches!(background, Background::Flat(c) if c == fallback));
    }

    #[test]
    fn test_image_background_fills_pixmap() {
        let background = Background::Image(RgbaImage::from_pixel(4, 6, Rgba([0, 128, 0, 255])));
        let mut pixmap = Pixmap::new(4, 6).unwrap();
        background.paint(&mut pixmap).unwrap();
        let px = pixmap.pixel(2, 3).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (0, 128, 0, 255));
    }
}
