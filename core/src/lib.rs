use std::{fs, io::Write, path::Path};
use thiserror::Error;

pub mod buffer;
pub mod checksum;
pub mod gba;
pub mod nds;

mod encoding;
mod locator;

pub use buffer::SavBuffer;
pub use gba::GbaSav;
pub use nds::NdsSav;

#[derive(Error, Debug)]
pub enum SavError {
    #[error("save size {0:#x} does not match any known cartridge size")]
    InvalidSize(usize),
    #[error("save identifier bytes do not match")]
    InvalidIdentifier,
    #[error("offset {offset:#x} (width {width}) out of bounds for {len:#x} byte save")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SavError>;

/// Which cartridge format a save buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavKind {
    Gba,
    Nds,
}

/// Probes size and identifier bytes to detect the save format.
pub fn detect(data: &[u8]) -> Option<SavKind> {
    match data.len() {
        0x10000 | 0x20000 if gba::identified(data) => Some(SavKind::Gba),
        0x40000 | 0x80000 if nds::identified(data) => Some(SavKind::Nds),
        _ => None,
    }
}

/// A loaded save of either format, for callers that don't know the format
/// up front.
pub enum SavFile {
    Gba(GbaSav),
    Nds(NdsSav),
}

impl SavFile {
    pub fn kind(&self) -> SavKind {
        match self {
            SavFile::Gba(_) => SavKind::Gba,
            SavFile::Nds(_) => SavKind::Nds,
        }
    }

    pub fn dirty(&self) -> bool {
        match self {
            SavFile::Gba(sav) => sav.dirty(),
            SavFile::Nds(sav) => sav.dirty(),
        }
    }

    pub fn finish(&mut self) {
        match self {
            SavFile::Gba(sav) => sav.finish(),
            SavFile::Nds(sav) => sav.finish(),
        }
    }

    pub fn write_back(&mut self, path: &Path) -> Result<bool> {
        match self {
            SavFile::Gba(sav) => sav.write_back(path),
            SavFile::Nds(sav) => sav.write_back(path),
        }
    }
}

/// Loads a save file, detecting its format from size and identifier bytes.
pub fn open(path: &Path) -> Result<SavFile> {
    let data = fs::read(path)?;
    match detect(&data) {
        Some(SavKind::Gba) => Ok(SavFile::Gba(GbaSav::from_buffer(data)?)),
        Some(SavKind::Nds) => Ok(SavFile::Nds(NdsSav::from_buffer(data)?)),
        None => Err(match data.len() {
            0x10000 | 0x20000 | 0x40000 | 0x80000 => SavError::InvalidIdentifier,
            len => SavError::InvalidSize(len),
        }),
    }
}

// Overwrites the save in place. The file must already exist; a save is never
// created from scratch.
pub(crate) fn write_in_place(data: &[u8], path: &Path) -> Result<()> {
    let mut file = fs::OpenOptions::new().write(true).open(path)?;
    file.write_all(data)?;
    Ok(())
}
