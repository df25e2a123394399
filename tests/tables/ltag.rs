use fontdir::tables::ltag;

use crate::ltag_table;

#[test]
fn ordered_tags() {
    // Sample from the TrueType reference manual.
    let tags = ltag::parse(&ltag_table(&["en", "sp", "sr"])).unwrap();
    assert_eq!(tags, ["en", "sp", "sr"]);
}

#[test]
fn empty_list() {
    assert_eq!(ltag::parse(&ltag_table(&[])).unwrap(), Vec::<String>::new());
}

#[test]
fn unknown_version() {
    let mut data = ltag_table(&["en"]);
    data[3] = 2;
    assert!(ltag::parse(&data).is_none());
}

#[test]
fn out_of_bounds_tag_range() {
    let data = &[
        0x00, 0x00, 0x00, 0x01, // version: 1
        0x00, 0x00, 0x00, 0x00, // flags: 0
        0x00, 0x00, 0x00, 0x01, // numTags: 1
        0x00, 0xFF, // offset: 255, past the end
        0x00, 0x02, // length: 2
    ];

    assert!(ltag::parse(data).is_none());
}

#[test]
fn truncated_header() {
    assert!(ltag::parse(&[0x00, 0x00, 0x00, 0x01]).is_none());
}
