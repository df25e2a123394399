use fontdir::tables::name;

use crate::{name_table, utf16};

fn parse(data: &[u8]) -> name::Table {
    name::parse(data, &[]).unwrap()
}

#[test]
fn windows_record_decodes_as_utf16_be() {
    let data = name_table(&[
        (3, 1, 0x0409, 1, &utf16("Family")),
        (3, 1, 0x0409, 2, &utf16("Regular")),
    ]);

    let table = parse(&data);
    assert_eq!(table.family.as_deref(), Some("Family"));
    assert_eq!(table.subfamily.as_deref(), Some("Regular"));
}

#[test]
fn mac_record_decodes_byte_wise() {
    let data = name_table(&[(1, 0, 0, 1, b"Family")]);
    assert_eq!(parse(&data).family.as_deref(), Some("Family"));
}

#[test]
fn windows_beats_mac() {
    // The Macintosh record comes first but loses to the Windows one.
    let data = name_table(&[
        (1, 0, 0, 1, b"Mac Name"),
        (3, 1, 0x0409, 1, &utf16("Windows Name")),
    ]);

    assert_eq!(parse(&data).family.as_deref(), Some("Windows Name"));
}

#[test]
fn first_record_wins_among_equals() {
    let data = name_table(&[
        (3, 1, 0x0409, 1, &utf16("First")),
        (3, 1, 0x0407, 1, &utf16("Second")),
    ]);

    assert_eq!(parse(&data).family.as_deref(), Some("First"));
}

#[test]
fn unicode_platform_ranks_with_windows() {
    let data = name_table(&[
        (1, 0, 0, 1, b"Mac Name"),
        (0, 3, 0, 1, &utf16("Unicode Name")),
    ]);

    assert_eq!(parse(&data).family.as_deref(), Some("Unicode Name"));
}

#[test]
fn unrelated_name_ids_are_ignored() {
    let data = name_table(&[
        (3, 1, 0x0409, 0, &utf16("Copyright 2020")),
        (3, 1, 0x0409, 4, &utf16("Full Name")),
        (3, 1, 0x0409, 6, &utf16("PostScriptName")),
    ]);

    let table = parse(&data);
    assert_eq!(table.family, None);
    assert_eq!(table.subfamily, None);
}

#[test]
fn extended_language_indexes_the_tag_list() {
    let tags = vec!["en".to_string(), "sr".to_string()];
    let data = name_table(&[(1, 0, 0x8001, 1, b"Family")]);
    assert_eq!(
        name::parse(&data, &tags).unwrap().family.as_deref(),
        Some("Family")
    );
}

#[test]
fn unresolved_extended_language_skips_the_record() {
    let data = name_table(&[
        (1, 0, 0x8005, 1, b"Tagged"),
        (1, 0, 0, 1, b"Plain"),
    ]);

    // Only one tag: index 5 resolves nothing.
    let tags = vec!["en".to_string()];
    assert_eq!(
        name::parse(&data, &tags).unwrap().family.as_deref(),
        Some("Plain")
    );
}

#[test]
fn empty_strings_are_ignored() {
    let data = name_table(&[
        (3, 1, 0x0409, 1, &[]),
        (1, 0, 0, 1, b"Fallback"),
    ]);

    assert_eq!(parse(&data).family.as_deref(), Some("Fallback"));
}

#[test]
fn record_pointing_outside_storage_is_skipped() {
    let mut data = name_table(&[
        (3, 1, 0x0409, 1, &utf16("Good")),
        (1, 0, 0, 2, b"Sub"),
    ]);
    // Rewrite the second record's string offset to point past the end.
    data[6 + 12 + 10..6 + 12 + 12].copy_from_slice(&0xFFFFu16.to_be_bytes());

    let table = parse(&data);
    assert_eq!(table.family.as_deref(), Some("Good"));
    assert_eq!(table.subfamily, None);
}

#[test]
fn odd_length_utf16_is_skipped() {
    let data = name_table(&[
        (3, 1, 0x0409, 1, &[0x00, 0x46, 0x00]),
        (1, 0, 0, 1, b"Fallback"),
    ]);

    assert_eq!(parse(&data).family.as_deref(), Some("Fallback"));
}

#[test]
fn truncated_record_array() {
    // Header claims two records but only bytes for one follow.
    let mut data = name_table(&[(3, 1, 0x0409, 1, &utf16("X"))]);
    data[2..4].copy_from_slice(&2u16.to_be_bytes());
    data.truncate(6 + 12);

    assert!(name::parse(&data, &[]).is_none());
}

#[test]
fn no_records_at_all() {
    let table = parse(&name_table(&[]));
    assert_eq!(table.family, None);
    assert_eq!(table.subfamily, None);
}
