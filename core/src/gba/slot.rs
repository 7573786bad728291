use crate::{buffer::SavBuffer, encoding, locator::REGION_SIZE};

/// Editing view over one GBA save slot region.
///
/// Getters read straight from the buffer; setters clamp to each field's
/// valid range rather than rejecting.
pub struct GbaSlot<'a> {
    buf: &'a mut SavBuffer,
    offs: usize,
}

impl<'a> GbaSlot<'a> {
    pub(crate) fn new(buf: &'a mut SavBuffer, slot: u8) -> Self {
        Self {
            offs: usize::from(slot) * REGION_SIZE,
            buf,
        }
    }

    // Everything stored behind the in-house item list moves down 6 bytes
    // per item, so late-slot offsets shift by the item count at +0xD6.
    fn shifted(&self, offs: usize) -> usize {
        self.offs + offs + usize::from(self.buf.u8_at(self.offs + 0xD6)) * 0x6
    }

    pub fn hour(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x2)
    }

    pub fn set_hour(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x2, value);
    }

    pub fn minute(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x3)
    }

    pub fn set_minute(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x3, value);
    }

    pub fn seconds(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x4)
    }

    pub fn set_seconds(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x4, value);
    }

    /// Simoleons sit in the high 24 bits of the dword at +0x5.
    pub fn simoleons(&self) -> u32 {
        self.buf.u32_at(self.offs + 0x5) >> 8
    }

    pub fn set_simoleons(&mut self, value: u32) {
        self.buf.put_u32(self.offs + 0x5, value.min(999_999) << 8);
    }

    pub fn ratings(&self) -> u16 {
        self.buf.u16_at(self.offs + 0xA)
    }

    pub fn set_ratings(&mut self, value: u16) {
        self.buf.put_u16(self.offs + 0xA, value.min(9999));
    }

    pub fn name(&self) -> String {
        encoding::decode(self.buf.bytes_at(self.offs + 0xD, 16))
    }

    pub fn set_name(&mut self, value: &str) {
        self.buf.put_bytes(self.offs + 0xD, &encoding::encode(value, 16));
    }

    pub fn confidence(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x22)
    }

    pub fn set_confidence(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x22, value.min(5));
    }

    pub fn mechanical(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x23)
    }

    pub fn set_mechanical(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x23, value.min(5));
    }

    pub fn strength(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x24)
    }

    pub fn set_strength(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x24, value.min(5));
    }

    pub fn personality(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x25)
    }

    pub fn set_personality(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x25, value.min(5));
    }

    pub fn hotness(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x26)
    }

    pub fn set_hotness(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x26, value.min(5));
    }

    pub fn intellect(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x27)
    }

    pub fn set_intellect(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x27, value.min(5));
    }

    pub fn sanity(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x32)
    }

    pub fn set_sanity(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x32, value.min(100));
    }

    pub fn aspiration(&self) -> u8 {
        self.buf.u8_at(self.offs + 0x4B)
    }

    pub fn set_aspiration(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0x4B, value.min(2));
    }

    pub fn cans(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xF6))
    }

    pub fn set_cans(&mut self, value: u8) {
        let offs = self.shifted(0xF6);
        self.buf.put_u8(offs, value.min(250));
    }

    pub fn cowbells(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xF7))
    }

    pub fn set_cowbells(&mut self, value: u8) {
        let offs = self.shifted(0xF7);
        self.buf.put_u8(offs, value.min(250));
    }

    pub fn spaceship(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xF8))
    }

    pub fn set_spaceship(&mut self, value: u8) {
        let offs = self.shifted(0xF8);
        self.buf.put_u8(offs, value.min(250));
    }

    pub fn fuelrods(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xF9))
    }

    pub fn set_fuelrods(&mut self, value: u8) {
        let offs = self.shifted(0xF9);
        self.buf.put_u8(offs, value.min(250));
    }

    pub fn cans_price(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xFA))
    }

    pub fn set_cans_price(&mut self, value: u8) {
        let offs = self.shifted(0xFA);
        self.buf.put_u8(offs, value);
    }

    pub fn cowbells_price(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xFB))
    }

    pub fn set_cowbells_price(&mut self, value: u8) {
        let offs = self.shifted(0xFB);
        self.buf.put_u8(offs, value);
    }

    pub fn spaceship_price(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xFC))
    }

    pub fn set_spaceship_price(&mut self, value: u8) {
        let offs = self.shifted(0xFC);
        self.buf.put_u8(offs, value);
    }

    pub fn fuelrods_price(&self) -> u8 {
        self.buf.u8_at(self.shifted(0xFD))
    }

    pub fn set_fuelrods_price(&mut self, value: u8) {
        let offs = self.shifted(0xFD);
        self.buf.put_u8(offs, value);
    }
}
