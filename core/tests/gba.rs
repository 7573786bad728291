use sim2save_core::{checksum, detect, gba::Language, GbaSav, SavError, SavKind};

const IDENT: [u8; 7] = [0x53, 0x54, 0x57, 0x4E, 0x30, 0x32, 0x34];

fn blank_sav() -> Vec<u8> {
    let mut data = vec![0; 0x10000];
    data[..7].copy_from_slice(&IDENT);
    data
}

// Any nonzero byte among a region's first ten marks the slot as in use.
fn with_slot(mut data: Vec<u8>, slot: usize) -> Vec<u8> {
    data[slot * 0x1000 + 0x2] = 10;
    data
}

#[test]
fn detects_format() {
    assert_eq!(detect(&blank_sav()), Some(SavKind::Gba));
    assert_eq!(detect(&vec![0; 0x10000]), None);
}

#[test]
fn rejects_off_by_one_size() {
    let mut data = blank_sav();
    data.pop();
    assert!(matches!(
        GbaSav::from_buffer(data),
        Err(SavError::InvalidSize(0xFFFF))
    ));
}

#[test]
fn rejects_single_flipped_identifier_byte() {
    let mut data = blank_sav();
    data[3] ^= 0x01;
    assert!(matches!(
        GbaSav::from_buffer(data),
        Err(SavError::InvalidIdentifier)
    ));
}

#[test]
fn accepts_double_size_cartridge() {
    let mut data = vec![0; 0x20000];
    data[..7].copy_from_slice(&IDENT);
    assert!(GbaSav::from_buffer(data).is_ok());
}

#[test]
fn out_of_range_language_clamped_on_load() {
    let mut data = blank_sav();
    data[0xA] = 7;
    let mut sav = GbaSav::from_buffer(data).unwrap();
    assert!(sav.dirty());
    assert_eq!(sav.as_bytes()[0xA], 0);
    assert_eq!(sav.settings().language(), Language::English);
}

#[test]
fn valid_language_kept() {
    let mut data = blank_sav();
    data[0xA] = 3;
    let mut sav = GbaSav::from_buffer(data).unwrap();
    assert!(!sav.dirty());
    assert_eq!(sav.settings().language(), Language::German);
}

#[test]
fn slot_existence() {
    let mut sav = GbaSav::from_buffer(blank_sav()).unwrap();
    for slot in 0..6 {
        assert!(!sav.slot_exists(slot));
    }
    assert!(sav.slot(1).is_none());

    let mut sav = GbaSav::from_buffer(with_slot(blank_sav(), 2)).unwrap();
    assert!(sav.slot_exists(2));
    assert!(!sav.slot_exists(1));
    assert!(sav.slot(2).is_some());
}

#[test]
fn field_round_trip_with_clamping() {
    let mut sav = GbaSav::from_buffer(with_slot(blank_sav(), 1)).unwrap();
    let mut slot = sav.slot(1).unwrap();

    slot.set_simoleons(123_456);
    assert_eq!(slot.simoleons(), 123_456);
    slot.set_simoleons(2_000_000);
    assert_eq!(slot.simoleons(), 999_999);

    slot.set_ratings(20_000);
    assert_eq!(slot.ratings(), 9999);

    slot.set_confidence(9);
    assert_eq!(slot.confidence(), 5);

    slot.set_fuelrods(255);
    assert_eq!(slot.fuelrods(), 250);

    assert!(sav.dirty());
}

#[test]
fn name_round_trip_uses_glyph_table() {
    let mut sav = GbaSav::from_buffer(with_slot(blank_sav(), 1)).unwrap();
    let mut slot = sav.slot(1).unwrap();

    slot.set_name("Mané");
    assert_eq!(slot.name(), "Mané");
    // "é" has no ASCII byte; it must have gone through the extended table.
    assert_eq!(sav.as_bytes()[0x100D..0x1011], [0x4D, 0x61, 0x6E, 0xA3]);
}

#[test]
fn finish_fixes_slot_and_settings_checksums() {
    let mut sav = GbaSav::from_buffer(with_slot(blank_sav(), 1)).unwrap();
    sav.slot(1).unwrap().set_simoleons(777);
    sav.settings().set_music(5);
    sav.finish();

    let bytes = sav.as_bytes();
    let slot_chks = u16::from_le_bytes([bytes[0x1FFE], bytes[0x1FFF]]);
    assert_eq!(slot_chks, checksum::calc(bytes, 0x1000 / 2, 0x1FFE / 2, &[]));

    let settings_chks = u16::from_le_bytes([bytes[0xE], bytes[0xF]]);
    assert_eq!(settings_chks, checksum::calc(bytes, 0, 0x18 / 2, &[0xE / 2]));
}

#[test]
fn finish_is_idempotent() {
    let mut sav = GbaSav::from_buffer(with_slot(blank_sav(), 3)).unwrap();
    sav.slot(3).unwrap().set_name("IDEMPOTENT");
    sav.finish();
    let first = sav.as_bytes().to_vec();
    sav.finish();
    assert_eq!(sav.as_bytes(), &first[..]);
}

#[test]
fn write_back_round_trip() {
    let path = std::env::temp_dir().join(format!("sim2save-gba-{}.sav", std::process::id()));
    std::fs::write(&path, blank_sav()).unwrap();

    let mut sav = GbaSav::open(&path).unwrap();
    // Nothing edited, nothing written.
    assert!(!sav.write_back(&path).unwrap());

    sav.settings().set_language(Language::French);
    assert!(sav.write_back(&path).unwrap());
    assert_eq!(std::fs::read(&path).unwrap(), sav.as_bytes());

    std::fs::remove_file(&path).unwrap();
}
