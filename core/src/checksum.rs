//! The rolling byte-sum checksum shared by both cartridge formats.
//!
//! The sum walks 16-bit words and keeps one wrapping accumulator per byte
//! lane; the stored field is the negation of both lanes, so a region summed
//! together with its own checksum comes out zero in each lane.

/// Computes the checksum of `data` over `[start_word, end_word)`.
///
/// Offsets are in 16-bit words (byte offsets divided by two), as is the skip
/// list. The skip list excludes the checksum field itself, and any adjacent
/// header word, from the self-referential sum.
pub fn calc(data: &[u8], start_word: usize, end_word: usize, skip_words: &[usize]) -> u16 {
    calc_inner(data, start_word, end_word, skip_words, true)
}

/// Marker-aware variant for redundant-slot regions.
///
/// `marker` is the low byte of the region's save counter. A region the game
/// initialised but never saved carries a zero marker and a zero checksum
/// field; for those the final carry-lane increment counts as already applied,
/// so the stored zero is reproduced and repair leaves the region untouched.
pub fn calc_with_marker(
    data: &[u8],
    start_word: usize,
    end_word: usize,
    skip_words: &[usize],
    marker: u8,
) -> u16 {
    calc_inner(data, start_word, end_word, skip_words, marker != 0)
}

fn calc_inner(
    data: &[u8],
    start_word: usize,
    end_word: usize,
    skip_words: &[usize],
    increment: bool,
) -> u16 {
    let mut byte1: u8 = 0;
    let mut byte2: u8 = 0;

    for word in start_word..end_word {
        if skip_words.contains(&word) {
            continue;
        }
        let lo = data.get(word * 2).copied().unwrap_or(0);
        let hi = data.get(word * 2 + 1).copied().unwrap_or(0);

        // Overflow of the low lane carries into the high lane.
        if u16::from(lo) + u16::from(byte1) > 255 {
            byte2 = byte2.wrapping_add(1);
        }
        byte1 = byte1.wrapping_add(lo);
        byte2 = byte2.wrapping_add(hi);
    }

    if increment {
        byte2 = byte2.wrapping_add(1);
    }
    u16::from(byte2.wrapping_neg()) << 8 | u16::from(byte1.wrapping_neg())
}
