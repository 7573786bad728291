use crate::{buffer::SavBuffer, locator::REGION_SIZE};

/// Editing view over the physical region a logical NDS slot resolved to.
///
/// Names are plain ASCII here; the extended glyph table is a GBA-only
/// affair.
pub struct NdsSlot<'a> {
    buf: &'a mut SavBuffer,
    offs: usize,
}

impl<'a> NdsSlot<'a> {
    pub(crate) fn new(buf: &'a mut SavBuffer, region: u8) -> Self {
        Self {
            offs: usize::from(region) * REGION_SIZE,
            buf,
        }
    }

    pub fn simoleons(&self) -> u32 {
        self.buf.u32_at(self.offs + 0x2C)
    }

    pub fn set_simoleons(&mut self, value: u32) {
        self.buf.put_u32(self.offs + 0x2C, value.min(999_999));
    }

    pub fn name(&self) -> String {
        self.buf.string_at(self.offs + 0x30, 0x7)
    }

    pub fn set_name(&mut self, value: &str) {
        self.buf.put_string(self.offs + 0x30, 0x7, value);
    }

    pub fn fuelrods(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xBC)
    }

    pub fn set_fuelrods(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xBC, value.min(250));
    }

    pub fn plates(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xBD)
    }

    pub fn set_plates(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xBD, value.min(250));
    }

    pub fn gourds(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xBE)
    }

    pub fn set_gourds(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xBE, value.min(250));
    }

    pub fn spaceship(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xBF)
    }

    pub fn set_spaceship(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xBF, value.min(250));
    }

    pub fn creativity(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xDF)
    }

    pub fn set_creativity(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xDF, value.min(10));
    }

    pub fn business(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xE0)
    }

    pub fn set_business(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xE0, value.min(10));
    }

    pub fn body(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xE1)
    }

    pub fn set_body(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xE1, value.min(10));
    }

    pub fn charisma(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xE2)
    }

    pub fn set_charisma(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xE2, value.min(10));
    }

    pub fn mechanical(&self) -> u8 {
        self.buf.u8_at(self.offs + 0xE3)
    }

    pub fn set_mechanical(&mut self, value: u8) {
        self.buf.put_u8(self.offs + 0xE3, value.min(10));
    }
}
