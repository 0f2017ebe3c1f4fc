use crate::byte_reader::ByteReader;
use crate::error::CompressError;
use crate::exif_decoder;
use crate::marker_scanner::{self, ScanOutcome};

/// Outcome of an orientation scan.
///
/// The first eight variants are the EXIF orientation values 1-8. The three
/// sentinels describe scans that produced no orientation; they are values,
/// not errors, and the geometry planner consumes them as "use the identity
/// transform".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationCode {
    /// EXIF 1: row 0 is the visual top, column 0 the visual left.
    Up,
    /// EXIF 2: `Up` mirrored horizontally.
    UpMirrored,
    /// EXIF 3: rotated 180 degrees.
    Down,
    /// EXIF 4: `Down` mirrored horizontally.
    DownMirrored,
    /// EXIF 5: `Left` mirrored.
    LeftMirrored,
    /// EXIF 6: needs a 90 degree clockwise rotation to display upright.
    Right,
    /// EXIF 7: `Right` mirrored.
    RightMirrored,
    /// EXIF 8: needs a 90 degree counter-clockwise rotation.
    Left,

    /// JPEG-structured buffer with no parseable EXIF orientation tag, or a
    /// scan that would have read out of bounds.
    NotJpeg,
    /// Buffer does not begin with the JPEG SOI marker.
    NotDefined,
    /// The scan could not be attempted at all.
    Default,
}

impl OrientationCode {
    /// Map a decoded orientation tag value to a code. Values outside 1-8
    /// come from malformed buffers and degrade to `NotJpeg` rather than
    /// masquerading as a valid orientation.
    pub fn from_tag_value(value: u16) -> Self {
        match value {
            1 => Self::Up,
            2 => Self::UpMirrored,
            3 => Self::Down,
            4 => Self::DownMirrored,
            5 => Self::LeftMirrored,
            6 => Self::Right,
            7 => Self::RightMirrored,
            8 => Self::Left,
            _ => Self::NotJpeg,
        }
    }

    /// The EXIF tag value, for codes that came from a tag.
    pub fn to_exif(self) -> Option<u16> {
        match self {
            Self::Up => Some(1),
            Self::UpMirrored => Some(2),
            Self::Down => Some(3),
            Self::DownMirrored => Some(4),
            Self::LeftMirrored => Some(5),
            Self::Right => Some(6),
            Self::RightMirrored => Some(7),
            Self::Left => Some(8),
            Self::NotJpeg | Self::NotDefined | Self::Default => None,
        }
    }

    /// Whether displaying upright exchanges the width and height axes.
    ///
    /// Mirrored variants follow their non-mirrored counterpart; the planner
    /// does not distinguish them (see `geometry`).
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            Self::Right | Self::RightMirrored | Self::Left | Self::LeftMirrored
        )
    }
}

/// Resolve the EXIF orientation of an encoded image buffer.
///
/// Walks the JPEG marker stream for an APP1 EXIF segment and decodes the
/// IFD0 orientation tag. Total over arbitrary input: malformed or truncated
/// buffers degrade to `NotJpeg`/`NotDefined`, never a panic. Pure and
/// synchronous; callers that want to scan off their main execution context
/// can wrap it however they like.
pub fn resolve_orientation(source: &[u8]) -> OrientationCode {
    // Out-of-bounds reads inside the scan mean the buffer lied about a
    // length or offset somewhere; that is a NotJpeg outcome, not an error.
    try_resolve(source).unwrap_or(OrientationCode::NotJpeg)
}

fn try_resolve(source: &[u8]) -> Result<OrientationCode, CompressError> {
    let mut reader = ByteReader::new(source);
    match marker_scanner::locate_app1(&mut reader)? {
        ScanOutcome::App1Payload => exif_decoder::decode_orientation(&mut reader),
        ScanOutcome::Terminal(code) => Ok(code),
    }
}
