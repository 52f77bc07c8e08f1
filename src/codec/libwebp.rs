use image::{DynamicImage, ImageReader};
use std::path::Path;

use super::{CodecError, CodecResult, ImageCodec};

/// `image` for decoding, libwebp (through the `webp` crate) for lossy encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for WebpCodec {
    fn decode(&self, path: &Path) -> CodecResult<DynamicImage> {
        // Sniff the content rather than trusting the extension.
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        Ok(reader.decode()?)
    }

    fn encode_webp(&self, image: &DynamicImage, quality: f32) -> CodecResult<Vec<u8>> {
        let (width, height) = (image.width(), image.height());

        let encoded = if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
        } else {
            let rgb = image.to_rgb8();
            webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
        };

        encoded
            .map(|memory| memory.to_vec())
            .map_err(|e| CodecError::Encode(format!("libwebp rejected {width}x{height} image: {e:?}")))
    }
}
