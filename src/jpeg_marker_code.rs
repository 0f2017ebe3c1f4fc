use num_enum::TryFromPrimitive;

/// Marker codes the orientation scanner cares about by name.
///
/// The scanner only needs to recognize SOI and APP1; every other marker with
/// a valid 0xFF prefix is skipped over by its declared segment length, so the
/// enumeration stays small. Unlisted codes fall through `try_from` as errors
/// and take the generic skip path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum JpegMarkerCode {
    /// SOI: Marks the start of an image.
    StartOfImage = 0xD8,

    /// EOI: Marks the end of an image.
    EndOfImage = 0xD9,

    /// SOS: Marks the start of scan.
    StartOfScan = 0xDA,

    /// APP0: Application data 0: used for JFIF header.
    ApplicationData0 = 0xE0,
    /// APP1: Application data 1: used for EXIF or XMP header.
    ApplicationData1 = 0xE1,
    /// APP2: Application data 2: used for ICC profile.
    ApplicationData2 = 0xE2,

    /// COM: Comment block.
    Comment = 0xFE,
}

pub const JPEG_MARKER_START_BYTE: u8 = 0xFF;
