use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::CompressError;
use crate::geometry::{Rect, Transform};
use crate::orientation::{OrientationCode, resolve_orientation};

/// One compression call.
///
/// `ratio` and `quality` are percentages in (0, 100] and are divided by 100
/// internally. `max_width`/`max_height` cap the output in pixels; 0 means
/// no cap. Constructed per call and consumed once.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRequest<'a> {
    pub source: &'a [u8],
    pub orientation: OrientationCode,
    pub ratio: f64,
    pub quality: f64,
    pub max_width: u32,
    pub max_height: u32,
}

impl<'a> CompressionRequest<'a> {
    pub fn new(source: &'a [u8], orientation: OrientationCode) -> Self {
        Self {
            source,
            orientation,
            ratio: 50.0,
            quality: 50.0,
            max_width: 0,
            max_height: 0,
        }
    }
}

/// Decode, transform, re-encode.
///
/// Stages run strictly in order: decode the source into a raster, plan the
/// transform from its natural dimensions, realize the transform (resize to
/// the draw-target size, then rotate), re-encode at the source's own format.
/// JPEG output honors the quality percentage; formats without a quality
/// knob encode at their defaults. Decode and encode failures surface once,
/// with no retry; the planner and draw stages cannot fail.
pub fn compress(request: &CompressionRequest<'_>) -> Result<Vec<u8>, CompressError> {
    if !(request.ratio > 0.0 && request.ratio <= 100.0) {
        return Err(CompressError::InvalidArgumentRatio);
    }
    if !(request.quality > 0.0 && request.quality <= 100.0) {
        return Err(CompressError::InvalidArgumentQuality);
    }

    let format = image::guess_format(request.source).map_err(CompressError::DecodeFailure)?;
    let source = image::load_from_memory(request.source).map_err(CompressError::DecodeFailure)?;

    let rect = Rect::new(source.width(), source.height());
    let transform = Transform::plan(
        rect,
        request.orientation,
        request.ratio / 100.0,
        request.max_width,
        request.max_height,
    );

    let output = draw(&source, &transform);
    encode(&output, format, request.quality)
}

/// Resolve the orientation from the same buffer, then compress.
pub fn compress_auto(
    source: &[u8],
    ratio: f64,
    quality: f64,
    max_width: u32,
    max_height: u32,
) -> Result<Vec<u8>, CompressError> {
    let request = CompressionRequest {
        source,
        orientation: resolve_orientation(source),
        ratio,
        quality,
        max_width,
        max_height,
    };
    compress(&request)
}

/// Realize a planned transform on a decoded raster. Total: resize to the
/// draw-target size, then apply the quarter- or half-turn. The rotation
/// plus the plan's translation is exactly what a canvas rasterizer would
/// do; on an owned raster the translation is implicit in the rotation.
fn draw(source: &DynamicImage, transform: &Transform) -> DynamicImage {
    // The plan keeps fractional dimensions; the rasterizer rounds, with a
    // floor of one pixel since a zero-sized surface cannot be drawn.
    let draw_width = (transform.draw_width.round() as u32).max(1);
    let draw_height = (transform.draw_height.round() as u32).max(1);

    let resized = source.resize_exact(draw_width, draw_height, FilterType::Lanczos3);
    match transform.rotation_degrees {
        90 => resized.rotate90(),
        -90 => resized.rotate270(),
        180 => resized.rotate180(),
        _ => resized,
    }
}

fn encode(
    output: &DynamicImage,
    format: ImageFormat,
    quality: f64,
) -> Result<Vec<u8>, CompressError> {
    let mut bytes = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            let quality = quality.round().clamp(1.0, 100.0) as u8;
            let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality);
            output
                .write_with_encoder(encoder)
                .map_err(CompressError::EncodeFailure)?;
        }
        other => {
            output
                .write_to(&mut Cursor::new(&mut bytes), other)
                .map_err(CompressError::EncodeFailure)?;
        }
    }
    Ok(bytes)
}
