// JPEG marker stream constants.

/// SOI as a 16-bit big-endian word, as it appears at offset 0 of a JPEG stream.
pub const JPEG_SOI_WORD: u16 = 0xFFD8;

// The size in bytes of the segment length field.
pub const SEGMENT_LENGTH_FIELD_SIZE: usize = 2;

// EXIF / TIFF constants.

/// ASCII "Exif", the identifier at the start of an APP1 EXIF payload.
pub const EXIF_SIGNATURE: u32 = 0x4578_6966;

/// Null padding between the "Exif" identifier and the TIFF header.
pub const EXIF_SIGNATURE_PADDING: usize = 2;

/// ASCII "II": the TIFF header declares little-endian (Intel) byte order.
/// Anything else (normally ASCII "MM") is read as big-endian.
pub const TIFF_BYTE_ORDER_LITTLE: u16 = 0x4949;

/// Offset of the IFD0 offset field within the TIFF header.
pub const TIFF_IFD0_OFFSET_FIELD: usize = 4;

/// IFD tag 0x0112: image orientation, value 1-8.
pub const ORIENTATION_TAG_ID: u16 = 0x0112;

/// Size of one IFD tag entry: tag (2) + type (2) + count (4) + value/offset (4).
pub const IFD_ENTRY_SIZE: usize = 12;

/// Offset of the value slot within an IFD tag entry.
pub const IFD_ENTRY_VALUE_OFFSET: usize = 8;
