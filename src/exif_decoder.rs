use crate::Endianness;
use crate::byte_reader::ByteReader;
use crate::constants::{
    EXIF_SIGNATURE, EXIF_SIGNATURE_PADDING, IFD_ENTRY_SIZE, IFD_ENTRY_VALUE_OFFSET,
    ORIENTATION_TAG_ID, TIFF_BYTE_ORDER_LITTLE, TIFF_IFD0_OFFSET_FIELD,
};
use crate::error::CompressError;
use crate::orientation::OrientationCode;

/// Decode the orientation tag from an APP1 payload.
///
/// The reader must be positioned at the start of the payload, just past the
/// APP1 segment length field. Layout: "Exif" signature, two null pad bytes,
/// then a TIFF header whose first word selects the byte order for every
/// later multi-byte read. IFD0 sits at the offset named in the header,
/// relative to the header start, and holds `count` fixed 12-byte tag
/// entries; tag 0x0112 carries the orientation in the first two bytes of
/// its value slot.
///
/// The TIFF magic word (0x002A) between the byte order and the IFD0 offset
/// is deliberately not validated; a buffer that gets this far but lies in
/// an offset or count fails its bounds check and surfaces as `NotJpeg`.
pub fn decode_orientation(
    reader: &mut ByteReader<'_>,
) -> Result<OrientationCode, CompressError> {
    if reader.read_u32()? != EXIF_SIGNATURE {
        return Ok(OrientationCode::NotJpeg);
    }
    reader.skip(EXIF_SIGNATURE_PADDING)?;

    // All IFD offsets are relative to the TIFF header start.
    let tiff_base = reader.position();
    let byte_order = if reader.read_u16()? == TIFF_BYTE_ORDER_LITTLE {
        Endianness::Little
    } else {
        Endianness::Big
    };
    reader.set_byte_order(byte_order);

    let ifd0_offset = reader.read_u32_at(tiff_base + TIFF_IFD0_OFFSET_FIELD)? as usize;
    let ifd0_start = tiff_base
        .checked_add(ifd0_offset)
        .ok_or(CompressError::OutOfBounds)?;

    reader.seek(ifd0_start)?;
    let entry_count = reader.read_u16()? as usize;

    for i in 0..entry_count {
        let entry_offset = reader
            .position()
            .checked_add(i * IFD_ENTRY_SIZE)
            .ok_or(CompressError::OutOfBounds)?;
        if reader.read_u16_at(entry_offset)? == ORIENTATION_TAG_ID {
            let value = reader.read_u16_at(entry_offset + IFD_ENTRY_VALUE_OFFSET)?;
            return Ok(OrientationCode::from_tag_value(value));
        }
    }

    Ok(OrientationCode::NotJpeg)
}
