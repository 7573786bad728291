//! Format A: The Sims 2 on Game Boy Advance (64/128 KiB cartridge saves).
//!
//! The settings header lives in region 0 with its own checksum; logical
//! slots 1-4 map directly onto regions 1-4, each carrying a checksum in its
//! last word.

mod settings;
mod slot;

pub use settings::{GbaSettings, Language};
pub use slot::GbaSlot;

use crate::{buffer::SavBuffer, checksum, locator, Result, SavError};
use log::{debug, info, warn};
use std::{fs, path::Path};

pub(crate) const IDENT: [u8; 7] = [0x53, 0x54, 0x57, 0x4E, 0x30, 0x32, 0x34];
const SIZES: [usize; 2] = [0x10000, 0x20000];

/// Region-relative offset of the slot checksum, summing `[0, 0xFFE)`.
const SLOT_CHECKSUM: usize = 0xFFE;
/// Offset of the settings checksum, summing words `[0, 0xC)` minus itself.
const SETTINGS_CHECKSUM: usize = 0xE;
const LANGUAGE: usize = 0xA;

pub(crate) fn identified(data: &[u8]) -> bool {
    data.len() >= IDENT.len() && data[..IDENT.len()] == IDENT
}

/// A validated GBA save container.
pub struct GbaSav {
    buf: SavBuffer,
}

impl GbaSav {
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        info!("loaded GBA save ({} bytes) from {}", data.len(), path.display());
        Self::from_buffer(data)
    }

    /// Validates and takes ownership of a raw save buffer.
    pub fn from_buffer(data: Vec<u8>) -> Result<Self> {
        if !SIZES.contains(&data.len()) {
            return Err(SavError::InvalidSize(data.len()));
        }
        if !identified(&data) {
            return Err(SavError::InvalidIdentifier);
        }

        let mut buf = SavBuffer::new(data);
        // Sanitize on load: a language index past the last real entry
        // renders as blank in game and can wedge it.
        if buf.u8_at(LANGUAGE) > Language::MAX {
            warn!("language byte out of range, resetting to English");
            buf.put_u8(LANGUAGE, Language::English as u8);
        }
        Ok(Self { buf })
    }

    /// Whether a slot (1-4) has ever been written.
    pub fn slot_exists(&self, slot: u8) -> bool {
        if !(1..=4).contains(&slot) {
            return false;
        }
        let base = usize::from(slot) * locator::REGION_SIZE;
        self.buf.bytes_at(base, 10).iter().any(|&byte| byte != 0)
    }

    /// An editing view over a slot, if it exists.
    pub fn slot(&mut self, slot: u8) -> Option<GbaSlot<'_>> {
        if !self.slot_exists(slot) {
            return None;
        }
        Some(GbaSlot::new(&mut self.buf, slot))
    }

    pub fn settings(&mut self) -> GbaSettings<'_> {
        GbaSettings::new(&mut self.buf)
    }

    /// Recomputes every active checksum, rewriting only fields that differ.
    /// Idempotent; must run before the buffer is persisted.
    pub fn finish(&mut self) {
        for slot in 1..=4 {
            if self.slot_exists(slot) {
                self.fix_slot_checksum(slot);
            }
        }
        self.fix_settings_checksum();
    }

    fn fix_slot_checksum(&mut self, slot: u8) {
        let base = usize::from(slot) * locator::REGION_SIZE;
        let calced = checksum::calc(self.buf.as_bytes(), base / 2, (base + SLOT_CHECKSUM) / 2, &[]);
        if self.buf.u16_at(base + SLOT_CHECKSUM) != calced {
            debug!("slot {slot} checksum repaired to {calced:#06x}");
            self.buf.put_u16(base + SLOT_CHECKSUM, calced);
        }
    }

    fn fix_settings_checksum(&mut self) {
        let calced = checksum::calc(self.buf.as_bytes(), 0, 0x18 / 2, &[SETTINGS_CHECKSUM / 2]);
        if self.buf.u16_at(SETTINGS_CHECKSUM) != calced {
            debug!("settings checksum repaired to {calced:#06x}");
            self.buf.put_u16(SETTINGS_CHECKSUM, calced);
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
        info!("wrote GBA save back to {}", path.display());
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
