use crate::byte_reader::ByteReader;
use crate::constants::{JPEG_SOI_WORD, SEGMENT_LENGTH_FIELD_SIZE};
use crate::error::CompressError;
use crate::jpeg_marker_code::{JPEG_MARKER_START_BYTE, JpegMarkerCode};
use crate::orientation::OrientationCode;

/// Result of walking the marker stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// APP1 found; the reader is positioned at the start of its payload
    /// (just past the segment length field).
    App1Payload,
    /// No EXIF candidate; the scan ended with a sentinel code.
    Terminal(OrientationCode),
}

/// Walk the JPEG marker segments looking for the APP1/EXIF segment.
///
/// The stream must open with SOI, otherwise the buffer is not a JPEG at all
/// (`NotDefined`). From there each 16-bit word either names APP1 (hand off
/// to the EXIF decoder), names another marker (skip its length-prefixed
/// payload), or lacks the 0xFF prefix, which means the well-formed marker
/// sequence has ended without an EXIF segment (`NotJpeg`).
pub fn locate_app1(reader: &mut ByteReader<'_>) -> Result<ScanOutcome, CompressError> {
    if reader.len() < 2 || reader.read_u16()? != JPEG_SOI_WORD {
        return Ok(ScanOutcome::Terminal(OrientationCode::NotDefined));
    }

    while reader.position() < reader.len() {
        let marker = reader.read_u16()?;
        if (marker & 0xFF00) != u16::from(JPEG_MARKER_START_BYTE) << 8 {
            break;
        }
        match JpegMarkerCode::try_from((marker & 0x00FF) as u8) {
            Ok(JpegMarkerCode::ApplicationData1) => {
                reader.skip(SEGMENT_LENGTH_FIELD_SIZE)?;
                return Ok(ScanOutcome::App1Payload);
            }
            // Any other marker, named or not: the length field includes
            // itself, so skipping it lands on the next marker.
            _ => {
                let length = reader.read_u16()? as usize;
                let skip = length.saturating_sub(SEGMENT_LENGTH_FIELD_SIZE);
                reader.skip(skip)?;
            }
        }
    }

    Ok(ScanOutcome::Terminal(OrientationCode::NotJpeg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_soi() {
        let data = [0x00, 0x00, 0xFF, 0xE1];
        let mut reader = ByteReader::new(&data);
        assert_eq!(
            locate_app1(&mut reader).unwrap(),
            ScanOutcome::Terminal(OrientationCode::NotDefined)
        );
    }

    #[test]
    fn finds_app1_after_skippable_segments() {
        // SOI, APP0 with a 4-byte segment, then APP1.
        let data = [
            0xFF, 0xD8, // SOI
            0xFF, 0xE0, 0x00, 0x04, 0xAA, 0xBB, // APP0, length 4
            0xFF, 0xE1, 0x00, 0x08, // APP1, length field skipped by scanner
        ];
        let mut reader = ByteReader::new(&data);
        assert_eq!(locate_app1(&mut reader).unwrap(), ScanOutcome::App1Payload);
        assert_eq!(reader.position(), 12);
    }

    #[test]
    fn non_marker_word_ends_the_scan() {
        let data = [0xFF, 0xD8, 0x12, 0x34];
        let mut reader = ByteReader::new(&data);
        assert_eq!(
            locate_app1(&mut reader).unwrap(),
            ScanOutcome::Terminal(OrientationCode::NotJpeg)
        );
    }

    #[test]
    fn running_off_the_end_is_not_jpeg() {
        let data = [0xFF, 0xD8];
        let mut reader = ByteReader::new(&data);
        assert_eq!(
            locate_app1(&mut reader).unwrap(),
            ScanOutcome::Terminal(OrientationCode::NotJpeg)
        );
    }

    #[test]
    fn truncated_segment_length_errors() {
        // APP0 declares a length reaching past the buffer.
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0xFF, 0xFF];
        let mut reader = ByteReader::new(&data);
        assert!(locate_app1(&mut reader).is_err());
    }
}
