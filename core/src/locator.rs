//! Candidate slot regions and the logical-slot locator.
//!
//! Both formats divide the save into five 4 KiB candidate regions. A region
//! is identified when its leading bytes match the format's magic identifier;
//! redundant-slot formats then map each logical slot to the identified
//! region claiming it with the highest save counter.

pub(crate) const REGION_SIZE: usize = 0x1000;
pub(crate) const REGION_COUNT: usize = 5;

/// Region-relative offset of the 32-bit save counter.
pub(crate) const SAVE_COUNT: usize = 0x8;
/// Region-relative offset of the two slot-claim bytes; their sum is the
/// claimed logical slot. The second byte is always zero in practice.
const SLOT_CLAIM: usize = 0xC;

/// Whether the bytes at `base` match `ident`. When `coded` names an
/// identifier byte, that position must match `ident[coded] + code` instead.
pub(crate) fn matches(data: &[u8], base: usize, ident: &[u8], coded: Option<usize>, code: u8) -> bool {
    ident.iter().enumerate().all(|(idx, &expect)| {
        let expect = if coded == Some(idx) {
            expect.wrapping_add(code)
        } else {
            expect
        };
        data.get(base + idx).copied() == Some(expect)
    })
}

/// Scans every candidate region for the identifier, trying each region-coded
/// variant of the byte at `coded`. Returns the code of the first region that
/// identifies.
pub(crate) fn scan_code(data: &[u8], ident: &[u8], coded: usize, variants: u8) -> Option<u8> {
    for region in 0..REGION_COUNT {
        let base = region * REGION_SIZE;
        for code in 0..variants {
            if matches(data, base, ident, Some(coded), code) {
                return Some(code);
            }
        }
    }
    None
}

/// Resolves a logical slot to the physical region holding its most recent
/// save, or `None` when no identified region claims it.
///
/// Comparison is strictly-greater in scan order 0..4, so of several regions
/// with an equal counter the first one scanned wins.
pub(crate) fn fetch_slot(
    data: &[u8],
    ident: &[u8],
    coded: Option<usize>,
    code: u8,
    logical: u8,
) -> Option<u8> {
    let mut found: Option<(u8, u32)> = None;

    for region in 0..REGION_COUNT as u8 {
        let base = usize::from(region) * REGION_SIZE;
        if !matches(data, base, ident, coded, code) {
            continue;
        }

        let claim = u16::from(data.get(base + SLOT_CLAIM).copied().unwrap_or(0))
            + u16::from(data.get(base + SLOT_CLAIM + 1).copied().unwrap_or(0));
        if claim != u16::from(logical) {
            continue;
        }

        let count = save_counter(data, base);
        if found.map_or(true, |(_, highest)| count > highest) {
            found = Some((region, count));
        }
    }

    found.map(|(region, _)| region)
}

pub(crate) fn save_counter(data: &[u8], base: usize) -> u32 {
    match data.get(base + SAVE_COUNT..base + SAVE_COUNT + 4) {
        Some(raw) => u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]),
        None => 0,
    }
}

#[cfg(test)]
mod test {
    use super::{fetch_slot, matches, scan_code, REGION_SIZE};

    const IDENT: [u8; 4] = [0x64, 0x61, 0x74, 0x30];

    fn region(data: &mut [u8], idx: usize, code: u8, claim: u8, counter: u32) {
        let base = idx * REGION_SIZE;
        data[base..base + 4].copy_from_slice(&IDENT);
        data[base + 3] = IDENT[3].wrapping_add(code);
        data[base + 0xC] = claim;
        data[base + 0x8..base + 0xC].copy_from_slice(&counter.to_le_bytes());
    }

    #[test]
    fn identifier_matching() {
        let mut data = vec![0; 5 * REGION_SIZE];
        region(&mut data, 0, 0, 0, 1);
        assert!(matches(&data, 0, &IDENT, None, 0));
        assert!(!matches(&data, REGION_SIZE, &IDENT, None, 0));

        // The coded byte admits offsets below the variant count only.
        region(&mut data, 1, 2, 0, 1);
        assert!(matches(&data, REGION_SIZE, &IDENT, Some(3), 2));
        assert!(!matches(&data, REGION_SIZE, &IDENT, Some(3), 1));
        assert_eq!(scan_code(&data, &IDENT, 3, 3), Some(0));
    }

    #[test]
    fn highest_counter_wins() {
        let mut data = vec![0; 5 * REGION_SIZE];
        region(&mut data, 0, 0, 1, 3);
        region(&mut data, 2, 0, 1, 7);
        region(&mut data, 4, 0, 1, 5);
        assert_eq!(fetch_slot(&data, &IDENT, Some(3), 0, 1), Some(2));
    }

    #[test]
    fn equal_counters_keep_scan_order() {
        let mut data = vec![0; 5 * REGION_SIZE];
        region(&mut data, 1, 0, 2, 9);
        region(&mut data, 3, 0, 2, 9);
        assert_eq!(fetch_slot(&data, &IDENT, Some(3), 0, 2), Some(1));
    }

    #[test]
    fn unclaimed_slot_not_found() {
        let mut data = vec![0; 5 * REGION_SIZE];
        region(&mut data, 0, 0, 1, 3);
        assert_eq!(fetch_slot(&data, &IDENT, Some(3), 0, 0), None);
    }
}
