//! The GBA title's single-byte glyph encoding.
//!
//! Name fields mix plain ASCII with an extended table for accented glyphs,
//! one byte per glyph in 0x7B-0xBB. Control bytes, 0xA and anything at 0xBC
//! or above terminate a string.

const TABLE: [&str; 65] = [
    "©", "œ", "¡", "¿", "À", "Á", "Â", "Ã", "Ä", "Å", "Æ", "Ç", "È", "É", "Ê", "Ë",
    "Ì", "Í", "Î", "Ï", "Ñ", "Ò", "Ó", "Ô", "Õ", "Ö", "Ø", "Ù", "Ú", "Ü", "ß", "à",
    "á", "â", "ã", "ä", "å", "æ", "ç", "è", "é", "ê", "ë", "ì", "í", "î", "ï", "ñ",
    "ò", "ó", "ô", "õ", "ö", "ø", "ù", "ú", "û", "ü", "º", "ª", "…", "™", "", "®", "",
];

const TABLE_BASE: u8 = 0x7B;

pub(crate) fn decode(raw: &[u8]) -> String {
    let mut out = String::new();
    for &byte in raw {
        match byte {
            0x00..=0x1F | 0xBC..=0xFF => break,
            0x7B..=0xBB => out.push_str(TABLE[usize::from(byte - TABLE_BASE)]),
            _ => out.push(byte as char),
        }
    }
    out
}

/// Encodes a string into `len` bytes, zero-padded. The first glyph that has
/// no encoding terminates the string early.
pub(crate) fn encode(value: &str, len: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(len);
    for ch in value.chars() {
        if bytes.len() == len {
            break;
        }
        let byte = match u32::from(ch) {
            0x20..=0x7A => ch as u8,
            _ => match TABLE
                .iter()
                .position(|glyph| glyph.len() == ch.len_utf8() && glyph.chars().next() == Some(ch))
            {
                Some(idx) => TABLE_BASE + idx as u8,
                None => break,
            },
        };
        bytes.push(byte);
    }
    bytes.resize(len, 0);
    bytes
}

#[cfg(test)]
mod test {
    use super::{decode, encode};

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode(b"DANIEL\0\0"), "DANIEL");
        assert_eq!(encode("DANIEL", 8), b"DANIEL\0\0");
    }

    #[test]
    fn extended_glyphs_map_through_table() {
        // 0xA3 is "é": 0x7B + 40.
        assert_eq!(decode(&[0x4D, 0x61, 0x6E, 0xA3, 0x00]), "Mané");
        assert_eq!(encode("Mané", 6), [0x4D, 0x61, 0x6E, 0xA3, 0x00, 0x00]);
    }

    #[test]
    fn control_bytes_terminate() {
        assert_eq!(decode(&[0x41, 0x0A, 0x42]), "A");
        assert_eq!(decode(&[0x41, 0xBC, 0x42]), "A");
        // An unencodable glyph ends the written string.
        assert_eq!(encode("A\u{3042}B", 4), [0x41, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn round_trip() {
        let encoded = encode("Øyvind", 16);
        assert_eq!(decode(&encoded), "Øyvind");
    }
}
