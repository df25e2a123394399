use fontdir::tables::head::Table;

use crate::head_table;

#[test]
fn mac_style_bits() {
    let table = Table::parse(&head_table(0b11)).unwrap();
    assert!(table.is_bold());
    assert!(table.is_italic());

    let table = Table::parse(&head_table(0)).unwrap();
    assert!(!table.is_bold());
    assert!(!table.is_italic());
}

#[test]
fn truncated_before_mac_style() {
    assert!(Table::parse(&head_table(0b11)[..44]).is_none());
}

#[test]
fn trailing_fields_may_be_missing() {
    // macStyle ends at byte 46; whatever follows is not needed.
    let table = Table::parse(&head_table(0b01)[..46]).unwrap();
    assert!(table.is_bold());
}
