pub mod constants;
pub mod error;

pub use error::CompressError;
pub use geometry::{Rect, Transform};
pub use orientation::{OrientationCode, resolve_orientation};
pub use pipeline::{CompressionRequest, compress, compress_auto};

/// Byte order of the multi-byte fields in a TIFF block, declared once by
/// the header's "II"/"MM" word and applied to every read that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

pub mod byte_reader;
pub mod data_url;
pub mod exif_decoder;
pub mod geometry;
pub mod jpeg_marker_code;
pub mod marker_scanner;
pub mod orientation;
pub mod pipeline;
pub mod wasm;
