use crate::{Result, SavError};

/// The owned save buffer with bounds-checked primitive access.
///
/// Every multi-byte field in both formats is little-endian. Writes set the
/// dirty flag; it is only cleared by dropping the buffer, never reset.
pub struct SavBuffer {
    data: Vec<u8>,
    dirty: bool,
}

impl SavBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, dirty: false }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Whether any write has touched the buffer.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    fn check(&self, offset: usize, width: usize) -> Result<()> {
        let end = offset.checked_add(width);
        if end.is_none() || end.unwrap_or(usize::MAX) > self.data.len() {
            return Err(SavError::OutOfBounds {
                offset,
                width,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        self.check(offset, 1)?;
        Ok(self.data[offset])
    }

    pub fn read_u16(&self, offset: usize) -> Result<u16> {
        self.check(offset, 2)?;
        Ok(u16::from_le_bytes([self.data[offset], self.data[offset + 1]]))
    }

    pub fn read_u32(&self, offset: usize) -> Result<u32> {
        self.check(offset, 4)?;
        let mut raw = [0; 4];
        raw.copy_from_slice(&self.data[offset..offset + 4]);
        Ok(u32::from_le_bytes(raw))
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) -> Result<()> {
        self.check(offset, 1)?;
        self.data[offset] = value;
        self.dirty = true;
        Ok(())
    }

    pub fn write_u16(&mut self, offset: usize, value: u16) -> Result<()> {
        self.check(offset, 2)?;
        self.data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
        self.dirty = true;
        Ok(())
    }

    pub fn write_u32(&mut self, offset: usize, value: u32) -> Result<()> {
        self.check(offset, 4)?;
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        self.dirty = true;
        Ok(())
    }

    /// Reads a single bit (index 0-7) of the byte at `offset`.
    pub fn read_bit(&self, offset: usize, bit: u8) -> Result<bool> {
        Ok(self.read_u8(offset)? >> (bit & 7) & 1 != 0)
    }

    pub fn write_bit(&mut self, offset: usize, bit: u8, set: bool) -> Result<()> {
        let mut byte = self.read_u8(offset)?;
        byte &= !(1 << (bit & 7));
        byte |= u8::from(set) << (bit & 7);
        self.write_u8(offset, byte)
    }

    /// Reads the low (`low == true`) or high nibble of the byte at `offset`.
    pub fn read_nibble(&self, offset: usize, low: bool) -> Result<u8> {
        let byte = self.read_u8(offset)?;
        Ok(if low { byte & 0xF } else { byte >> 4 })
    }

    pub fn write_nibble(&mut self, offset: usize, low: bool, value: u8) -> Result<()> {
        let byte = self.read_u8(offset)?;
        let value = value & 0xF;
        let byte = if low {
            byte & 0xF0 | value
        } else {
            byte & 0x0F | value << 4
        };
        self.write_u8(offset, byte)
    }

    /// Reads a fixed-length field as a string, stopping at the first NUL.
    /// Bytes pass through untranslated, one character per byte.
    pub fn read_string(&self, offset: usize, len: usize) -> Result<String> {
        self.check(offset, len)?;
        let mut out = String::with_capacity(len);
        for &byte in &self.data[offset..offset + len] {
            if byte == 0 {
                break;
            }
            out.push(byte as char);
        }
        Ok(out)
    }

    /// Writes a string into a fixed-length field, truncating and
    /// zero-padding to `len`.
    pub fn write_string(&mut self, offset: usize, len: usize, value: &str) -> Result<()> {
        self.check(offset, len)?;
        let src = value.as_bytes();
        for idx in 0..len {
            self.data[offset + idx] = src.get(idx).copied().unwrap_or(0);
        }
        self.dirty = true;
        Ok(())
    }

    // Infallible variants used by the accessor views and checksum repair.
    // Container validation has already pinned the buffer to a whitelisted
    // size, so these offsets can't miss; out-of-range access reads zero and
    // drops writes, like the original cores.

    pub(crate) fn u8_at(&self, offset: usize) -> u8 {
        self.read_u8(offset).unwrap_or(0)
    }

    pub(crate) fn u16_at(&self, offset: usize) -> u16 {
        self.read_u16(offset).unwrap_or(0)
    }

    pub(crate) fn u32_at(&self, offset: usize) -> u32 {
        self.read_u32(offset).unwrap_or(0)
    }

    pub(crate) fn put_u8(&mut self, offset: usize, value: u8) {
        let _ = self.write_u8(offset, value);
    }

    pub(crate) fn put_u16(&mut self, offset: usize, value: u16) {
        let _ = self.write_u16(offset, value);
    }

    pub(crate) fn put_u32(&mut self, offset: usize, value: u32) {
        let _ = self.write_u32(offset, value);
    }

    pub(crate) fn bytes_at(&self, offset: usize, len: usize) -> &[u8] {
        self.data.get(offset..offset + len).unwrap_or(&[])
    }

    pub(crate) fn put_bytes(&mut self, offset: usize, bytes: &[u8]) {
        if let Some(dst) = self.data.get_mut(offset..offset + bytes.len()) {
            dst.copy_from_slice(bytes);
            self.dirty = true;
        }
    }

    pub(crate) fn string_at(&self, offset: usize, len: usize) -> String {
        self.read_string(offset, len).unwrap_or_default()
    }

    pub(crate) fn put_string(&mut self, offset: usize, len: usize, value: &str) {
        let _ = self.write_string(offset, len, value);
    }
}

#[cfg(test)]
mod test {
    use super::SavBuffer;
    use crate::SavError;

    #[test]
    fn scalar_round_trip() {
        let mut buf = SavBuffer::new(vec![0; 16]);
        buf.write_u8(0, 0xAB).unwrap();
        buf.write_u16(2, 0x1234).unwrap();
        buf.write_u32(4, 0xDEADBEEF).unwrap();

        assert_eq!(buf.read_u8(0).unwrap(), 0xAB);
        assert_eq!(buf.read_u16(2).unwrap(), 0x1234);
        assert_eq!(buf.read_u32(4).unwrap(), 0xDEADBEEF);
        // Little-endian layout.
        assert_eq!(buf.as_bytes()[2..4], [0x34, 0x12]);
    }

    #[test]
    fn out_of_bounds_reported() {
        let mut buf = SavBuffer::new(vec![0; 4]);
        assert!(matches!(
            buf.read_u16(3),
            Err(SavError::OutOfBounds { offset: 3, width: 2, len: 4 })
        ));
        assert!(matches!(
            buf.write_u32(2, 0),
            Err(SavError::OutOfBounds { .. })
        ));
        assert!(!buf.dirty());
    }

    #[test]
    fn bits_and_nibbles() {
        let mut buf = SavBuffer::new(vec![0; 2]);
        buf.write_bit(0, 3, true).unwrap();
        assert!(buf.read_bit(0, 3).unwrap());
        assert_eq!(buf.read_u8(0).unwrap(), 0x08);
        buf.write_bit(0, 3, false).unwrap();
        assert_eq!(buf.read_u8(0).unwrap(), 0x00);

        buf.write_nibble(1, true, 0x5).unwrap();
        buf.write_nibble(1, false, 0xA).unwrap();
        assert_eq!(buf.read_u8(1).unwrap(), 0xA5);
        assert_eq!(buf.read_nibble(1, true).unwrap(), 0x5);
        assert_eq!(buf.read_nibble(1, false).unwrap(), 0xA);
    }

    #[test]
    fn string_truncates_and_pads() {
        let mut buf = SavBuffer::new(vec![0xFF; 8]);
        buf.write_string(0, 6, "BELLA").unwrap();
        assert_eq!(buf.read_string(0, 6).unwrap(), "BELLA");
        // Padded with NUL up to the field length, untouched beyond.
        assert_eq!(buf.as_bytes()[5], 0);
        assert_eq!(buf.as_bytes()[6], 0xFF);

        buf.write_string(0, 6, "BELLADONNA").unwrap();
        assert_eq!(buf.read_string(0, 6).unwrap(), "BELLAD");
    }

    #[test]
    fn writes_mark_dirty() {
        let mut buf = SavBuffer::new(vec![0; 4]);
        assert!(!buf.dirty());
        buf.write_u8(0, 1).unwrap();
        assert!(buf.dirty());
    }
}
