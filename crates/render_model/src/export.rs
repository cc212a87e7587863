//! Alpha flattening and image encoding

use crate::{Color, RenderError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use std::path::Path;
use tiny_skia::Pixmap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    /// Quality 1-100
    Jpeg(u8),
}

impl OutputFormat {
    pub const DEFAULT_JPEG_QUALITY: u8 = 90;

    /// Pick the format from a file extension; anything unrecognised is PNG
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Self::Jpeg(Self::DEFAULT_JPEG_QUALITY),
            _ => Self::Png,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg(_) => "JPEG",
        }
    }
}

/// A finished card, ready to encode
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pixmap: Pixmap,
}

impl RenderedImage {
    pub(crate) fn new(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(px.red(), px.green(), px.blue(), px.alpha()))
    }

    /// Composite over `matte` and drop the alpha channel
    pub fn flatten(&self, matte: Color) -> RgbImage {
        let mut rgb = Vec::with_capacity(self.pixmap.pixels().len() * 3);
        for px in self.pixmap.pixels() {
            // Premultiplied source over an opaque matte
            let keep = 255 - px.alpha() as u32;
            let blend = |c: u8, m: u8| (c as u32 + (m as u32 * keep + 127) / 255).min(255) as u8;
            rgb.push(blend(px.red(), matte.r));
            rgb.push(blend(px.green(), matte.g));
            rgb.push(blend(px.blue(), matte.b));
        }
        // Length always matches the pixmap dimensions
        RgbImage::from_raw(self.width(), self.height(), rgb)
            .unwrap_or_else(|| RgbImage::new(self.width(), self.height()))
    }

    /// Encode to `format`, flattening alpha over black
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>> {
        let rgb = self.flatten(Color::BLACK);
        let mut buffer = Vec::new();
        let encode_failed = |e: image::ImageError| RenderError::EncodeFailed {
            format: format.name().to_string(),
            reason: e.to_string(),
        };

        match format {
            OutputFormat::Png => PngEncoder::new(&mut buffer)
                .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
                .map_err(encode_failed)?,
            OutputFormat::Jpeg(quality) => JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
                .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
                .map_err(encode_failed)?,
        }

        Ok(buffer)
    }

    /// Encode and write to `path`
    pub fn save(&self, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode(format)?;
        std::fs::write(path, bytes)?;
        tracing::info!("Card image saved to {}", path.display());
        Ok(())
    }
}
