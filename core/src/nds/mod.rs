//! Format B: The Sims 2 on Nintendo DS (256/512 KiB cartridge saves).
//!
//! Every candidate region carries its own copy of the identifier; byte 4 is
//! region-coded, simultaneously marking which release wrote the save.
//! Logical slots 0-2 are resolved through the save counter at validation
//! time.

mod slot;

pub use slot::NdsSlot;

use crate::{buffer::SavBuffer, checksum, locator, Result, SavError};
use log::{debug, info};
use std::{fs, path::Path};

pub(crate) const IDENT: [u8; 8] = [0x64, 0x61, 0x74, 0x00, 0x1F, 0x00, 0x00, 0x00];
/// Identifier byte 4 is `0x1F + 0/1/2` for the Europe, USA and Japan
/// releases.
const CODED_BYTE: usize = 4;
const VARIANTS: u8 = 3;
const SIZES: [usize; 2] = [0x40000, 0x80000];

const LOGICAL_SLOTS: usize = 3;

/// Region-relative offset of the slot checksum, summing words of
/// `[0x10, 0x1000)` minus itself and the word at +0x12.
const SLOT_CHECKSUM: usize = 0x28;

/// Release variant, derived from the region-coded identifier byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    International,
    Japanese,
}

pub(crate) fn identified(data: &[u8]) -> bool {
    locator::scan_code(data, &IDENT, CODED_BYTE, VARIANTS).is_some()
}

/// A validated NDS save container with its resolved slot map.
pub struct NdsSav {
    buf: SavBuffer,
    region: Region,
    slots: [Option<u8>; LOGICAL_SLOTS],
}

impl NdsSav {
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        info!("loaded NDS save ({} bytes) from {}", data.len(), path.display());
        Self::from_buffer(data)
    }

    /// Validates and takes ownership of a raw save buffer, resolving the
    /// logical slot map. The map holds until the buffer is reloaded.
    pub fn from_buffer(data: Vec<u8>) -> Result<Self> {
        if !SIZES.contains(&data.len()) {
            return Err(SavError::InvalidSize(data.len()));
        }
        let code = locator::scan_code(&data, &IDENT, CODED_BYTE, VARIANTS)
            .ok_or(SavError::InvalidIdentifier)?;
        let region = if code == 2 {
            Region::Japanese
        } else {
            Region::International
        };

        let mut slots = [None; LOGICAL_SLOTS];
        for (logical, entry) in slots.iter_mut().enumerate() {
            *entry = locator::fetch_slot(&data, &IDENT, Some(CODED_BYTE), code, logical as u8);
        }
        debug!("NDS save identified: {region:?}, slot map {slots:?}");

        Ok(Self {
            buf: SavBuffer::new(data),
            region,
            slots,
        })
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// The physical region a logical slot (0-2) resolved to.
    pub fn slot_region(&self, slot: u8) -> Option<u8> {
        *self.slots.get(usize::from(slot))?
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        self.slot_region(slot).is_some()
    }

    /// An editing view over a logical slot, if any region claims it.
    pub fn slot(&mut self, slot: u8) -> Option<NdsSlot<'_>> {
        let region = self.slot_region(slot)?;
        Some(NdsSlot::new(&mut self.buf, region))
    }

    /// Recomputes the checksum of every resolved slot, rewriting only
    /// fields that differ. Idempotent; must run before persisting.
    pub fn finish(&mut self) {
        for logical in 0..LOGICAL_SLOTS as u8 {
            if let Some(region) = self.slot_region(logical) {
                self.fix_slot_checksum(region);
            }
        }
    }

    fn fix_slot_checksum(&mut self, region: u8) {
        let base = usize::from(region) * locator::REGION_SIZE;
        let skips = [(base + 0x12) / 2, (base + SLOT_CHECKSUM) / 2];
        let marker = self.buf.u8_at(base + locator::SAVE_COUNT);
        let calced = checksum::calc_with_marker(
            self.buf.as_bytes(),
            (base + 0x10) / 2,
            (base + locator::REGION_SIZE) / 2,
            &skips,
            marker,
        );
        if self.buf.u16_at(base + SLOT_CHECKSUM) != calced {
            debug!("region {region} checksum repaired to {calced:#06x}");
            self.buf.put_u16(base + SLOT_CHECKSUM, calced);
        }
    }

    /// Updates checksums and overwrites the file in place. Returns `false`
    /// without touching the file when no changes were made.
    pub fn write_back(&mut self, path: &Path) -> Result<bool> {
        if !self.buf.dirty() {
            return Ok(false);
        }
        self.finish();
        crate::write_in_place(self.buf.as_bytes(), path)?;
        info!("wrote NDS save back to {}", path.display());
        Ok(true)
    }

    pub fn dirty(&self) -> bool {
        self.buf.dirty()
    }

    pub fn buffer(&self) -> &SavBuffer {
        &self.buf
    }

    pub fn buffer_mut(&mut self) -> &mut SavBuffer {
        &mut self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }
}
