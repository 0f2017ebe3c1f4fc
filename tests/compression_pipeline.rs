// End-to-end pipeline tests: decode, transform, re-encode through the image
// crate, with orientation taken from a spliced-in EXIF segment where the
// test needs the full scan-then-compress flow.

use std::io::Cursor;

use image::{GenericImageView, ImageFormat};
use jpegshrink_rs::{
    CompressError, CompressionRequest, OrientationCode, compress, compress_auto,
    resolve_orientation,
};

fn gradient_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 16 % 256) as u8, (y * 16 % 256) as u8, 128])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();
    bytes
}

/// Splice an APP1/EXIF segment carrying the given orientation right after
/// the SOI marker of an existing JPEG.
fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let mut app1 = vec![0xFF, 0xE1];
    app1.extend_from_slice(&34u16.to_be_bytes());
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(b"II");
    app1.extend_from_slice(&42u16.to_le_bytes());
    app1.extend_from_slice(&8u32.to_le_bytes());
    app1.extend_from_slice(&1u16.to_le_bytes());
    app1.extend_from_slice(&0x0112u16.to_le_bytes());
    app1.extend_from_slice(&3u16.to_le_bytes());
    app1.extend_from_slice(&1u32.to_le_bytes());
    app1.extend_from_slice(&orientation.to_le_bytes());
    app1.extend_from_slice(&0u16.to_le_bytes());
    app1.extend_from_slice(&0u32.to_le_bytes());

    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

fn decoded_dimensions(bytes: &[u8]) -> (u32, u32) {
    image::load_from_memory(bytes).unwrap().dimensions()
}

#[test]
fn upright_image_scales_by_ratio() {
    let source = gradient_jpeg(8, 8);
    let request = CompressionRequest {
        source: &source,
        orientation: OrientationCode::Up,
        ratio: 50.0,
        quality: 80.0,
        max_width: 0,
        max_height: 0,
    };
    let out = compress(&request).unwrap();
    assert_eq!(decoded_dimensions(&out), (4, 4));
}

#[test]
fn right_orientation_rotates_output() {
    let source = gradient_jpeg(8, 6);
    let request = CompressionRequest {
        source: &source,
        orientation: OrientationCode::Right,
        ratio: 100.0,
        quality: 80.0,
        max_width: 0,
        max_height: 0,
    };
    let out = compress(&request).unwrap();
    // Quarter turn: the 8x6 source comes out 6x8.
    assert_eq!(decoded_dimensions(&out), (6, 8));
}

#[test]
fn caps_clamp_the_requested_ratio() {
    let source = gradient_jpeg(100, 50);
    let request = CompressionRequest {
        source: &source,
        orientation: OrientationCode::Up,
        ratio: 100.0,
        quality: 80.0,
        max_width: 10,
        max_height: 0,
    };
    let out = compress(&request).unwrap();
    assert_eq!(decoded_dimensions(&out), (10, 5));
}

#[test]
fn sentinel_orientation_compresses_as_upright() {
    let source = gradient_jpeg(8, 6);
    let request = CompressionRequest {
        source: &source,
        orientation: OrientationCode::NotJpeg,
        ratio: 100.0,
        quality: 80.0,
        max_width: 0,
        max_height: 0,
    };
    let out = compress(&request).unwrap();
    assert_eq!(decoded_dimensions(&out), (8, 6));
}

#[test]
fn compress_auto_honors_embedded_exif() {
    let source = with_exif_orientation(&gradient_jpeg(8, 6), 6);
    assert_eq!(resolve_orientation(&source), OrientationCode::Right);

    let out = compress_auto(&source, 100.0, 80.0, 0, 0).unwrap();
    assert_eq!(decoded_dimensions(&out), (6, 8));
}

#[test]
fn invalid_percentages_are_rejected_before_decoding() {
    let source = gradient_jpeg(4, 4);
    let mut request = CompressionRequest::new(&source, OrientationCode::Up);

    request.ratio = 0.0;
    assert!(matches!(
        compress(&request),
        Err(CompressError::InvalidArgumentRatio)
    ));

    request.ratio = 50.0;
    request.quality = 101.0;
    assert!(matches!(
        compress(&request),
        Err(CompressError::InvalidArgumentQuality)
    ));
}

#[test]
fn undecodable_source_reports_decode_failure() {
    let request = CompressionRequest::new(&[0x00, 0x01, 0x02, 0x03], OrientationCode::Up);
    assert!(matches!(
        compress(&request),
        Err(CompressError::DecodeFailure(_))
    ));
}

#[test]
fn output_is_jpeg_when_input_is_jpeg() {
    let source = gradient_jpeg(8, 8);
    let out = compress_auto(&source, 50.0, 50.0, 0, 0).unwrap();
    assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
}
