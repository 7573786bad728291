use crate::buffer::SavBuffer;

/// In-game language, stored at offset 0xA of the settings header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English = 0,
    Dutch = 1,
    French = 2,
    German = 3,
    Italian = 4,
    Spanish = 5,
}

impl Language {
    pub(crate) const MAX: u8 = Language::Spanish as u8;

    fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Language::Dutch,
            2 => Language::French,
            3 => Language::German,
            4 => Language::Italian,
            5 => Language::Spanish,
            _ => Language::English,
        }
    }
}

// Volume sliders have eleven notches; the game stores the raw level, not
// the notch index.
const SFX_LEVELS: [u8; 11] = [
    0x0, 0x0C, 0x18, 0x24, 0x30, 0x3C, 0x48, 0x54, 0x60, 0x6C, 0x80,
];
const MUSIC_LEVELS: [u8; 11] = [
    0x0, 0x19, 0x32, 0x4B, 0x64, 0x7D, 0x96, 0xAF, 0xC8, 0xE1, 0xFF,
];

/// Editing view over the settings header in region 0.
pub struct GbaSettings<'a> {
    buf: &'a mut SavBuffer,
}

impl<'a> GbaSettings<'a> {
    pub(crate) fn new(buf: &'a mut SavBuffer) -> Self {
        Self { buf }
    }

    /// The raw sound-effect volume byte.
    pub fn sfx(&self) -> u8 {
        self.buf.u8_at(0x8)
    }

    /// Sets the sound-effect volume from a notch index (0-10).
    pub fn set_sfx(&mut self, notch: u8) {
        self.buf.put_u8(0x8, SFX_LEVELS[usize::from(notch.min(10))]);
    }

    /// The raw music volume byte.
    pub fn music(&self) -> u8 {
        self.buf.u8_at(0x9)
    }

    /// Sets the music volume from a notch index (0-10).
    pub fn set_music(&mut self, notch: u8) {
        self.buf.put_u8(0x9, MUSIC_LEVELS[usize::from(notch.min(10))]);
    }

    pub fn language(&self) -> Language {
        Language::from_byte(self.buf.u8_at(0xA))
    }

    pub fn set_language(&mut self, language: Language) {
        self.buf.put_u8(0xA, language as u8);
    }
}
