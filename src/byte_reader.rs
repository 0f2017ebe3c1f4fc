use crate::Endianness;
use crate::error::CompressError;

/// Bounds-checked cursor over an immutable byte buffer.
///
/// Both the marker scanner and the EXIF decoder read through this type, so
/// every multi-byte access over attacker-influenced offsets goes through the
/// same length check. Marker and segment-length words are always big-endian;
/// TIFF reads switch to the byte order declared in the TIFF header via
/// `set_byte_order`.
pub struct ByteReader<'a> {
    source: &'a [u8],
    position: usize,
    byte_order: Endianness,
}

impl<'a> ByteReader<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            byte_order: Endianness::Big,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    /// Move the cursor to an absolute offset. The offset may point one past
    /// the end (reads there fail, seeking there does not).
    pub fn seek(&mut self, position: usize) -> Result<(), CompressError> {
        if position > self.source.len() {
            return Err(CompressError::OutOfBounds);
        }
        self.position = position;
        Ok(())
    }

    pub fn skip(&mut self, count: usize) -> Result<(), CompressError> {
        let target = self
            .position
            .checked_add(count)
            .ok_or(CompressError::OutOfBounds)?;
        self.seek(target)
    }

    pub fn read_u8(&mut self) -> Result<u8, CompressError> {
        if self.position >= self.source.len() {
            return Err(CompressError::OutOfBounds);
        }
        let val = self.source[self.position];
        self.position += 1;
        Ok(val)
    }

    pub fn read_u16(&mut self) -> Result<u16, CompressError> {
        let b1 = self.read_u8()? as u16;
        let b2 = self.read_u8()? as u16;
        Ok(match self.byte_order {
            Endianness::Big => (b1 << 8) | b2,
            Endianness::Little => (b2 << 8) | b1,
        })
    }

    pub fn read_u32(&mut self) -> Result<u32, CompressError> {
        let b1 = self.read_u8()? as u32;
        let b2 = self.read_u8()? as u32;
        let b3 = self.read_u8()? as u32;
        let b4 = self.read_u8()? as u32;
        Ok(match self.byte_order {
            Endianness::Big => (b1 << 24) | (b2 << 16) | (b3 << 8) | b4,
            Endianness::Little => (b4 << 24) | (b3 << 16) | (b2 << 8) | b1,
        })
    }

    /// Read a 16-bit word at an absolute offset without moving the cursor.
    pub fn read_u16_at(&mut self, offset: usize) -> Result<u16, CompressError> {
        let saved = self.position;
        self.seek(offset)?;
        let result = self.read_u16();
        self.position = saved;
        result
    }

    /// Read a 32-bit word at an absolute offset without moving the cursor.
    pub fn read_u32_at(&mut self, offset: usize) -> Result<u32, CompressError> {
        let saved = self.position;
        self.seek(offset)?;
        let result = self.read_u32();
        self.position = saved;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u16_honors_byte_order() {
        let data = [0x12, 0x34];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);

        let mut reader = ByteReader::new(&data);
        reader.set_byte_order(Endianness::Little);
        assert_eq!(reader.read_u16().unwrap(), 0x3412);
    }

    #[test]
    fn read_u32_honors_byte_order() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u32().unwrap(), 0x0102_0304);

        let mut reader = ByteReader::new(&data);
        reader.set_byte_order(Endianness::Little);
        assert_eq!(reader.read_u32().unwrap(), 0x0403_0201);
    }

    #[test]
    fn reads_past_the_end_fail() {
        let data = [0xFF];
        let mut reader = ByteReader::new(&data);
        assert!(reader.read_u16().is_err());
        assert!(ByteReader::new(&data).read_u32_at(0).is_err());
        assert!(ByteReader::new(&[]).read_u8().is_err());
    }

    #[test]
    fn seek_one_past_end_is_allowed() {
        let data = [0x00, 0x01];
        let mut reader = ByteReader::new(&data);
        assert!(reader.seek(2).is_ok());
        assert!(reader.read_u8().is_err());
        assert!(reader.seek(3).is_err());
    }

    #[test]
    fn read_at_preserves_cursor() {
        let data = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
        let mut reader = ByteReader::new(&data);
        reader.seek(1).unwrap();
        assert_eq!(reader.read_u16_at(2).unwrap(), 0xCCDD);
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn skip_overflow_fails() {
        let data = [0x00];
        let mut reader = ByteReader::new(&data);
        assert!(reader.skip(usize::MAX).is_err());
    }
}
