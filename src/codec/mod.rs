//! Image codec capability
//!
//! The converter only needs two things from an imaging library: read a source
//! image from disk and turn it into WebP bytes at a given quality. Both live
//! behind [`ImageCodec`] so the traversal never touches a codec crate directly.

pub mod libwebp;

use image::DynamicImage;
use std::path::Path;

pub use self::libwebp::WebpCodec;

/// Errors raised by a codec implementation
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("cannot read source: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error("{0}")]
    Encode(String),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Decode a source image and encode it as WebP
pub trait ImageCodec {
    /// Decode the image stored at `path`
    fn decode(&self, path: &Path) -> CodecResult<DynamicImage>;

    /// Encode `image` as lossy WebP at `quality` (0-100, higher is larger and sharper)
    fn encode_webp(&self, image: &DynamicImage, quality: f32) -> CodecResult<Vec<u8>>;
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    fn decode(&self, path: &Path) -> CodecResult<DynamicImage> {
        (**self).decode(path)
    }

    fn encode_webp(&self, image: &DynamicImage, quality: f32) -> CodecResult<Vec<u8>> {
        (**self).encode_webp(image, quality)
    }
}
