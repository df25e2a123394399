use fontdir::tables::os2::Table;
use fontdir::Weight;

use crate::os2_table;

#[test]
fn weight_and_flags() {
    let table = Table::parse(&os2_table(700, 0, 0b10_0001)).unwrap();
    assert_eq!(table.weight(), Weight::Bold);
    assert!(table.is_bold());
    assert!(table.is_italic());
}

#[test]
fn non_canonical_weight() {
    let table = Table::parse(&os2_table(450, 0, 0)).unwrap();
    assert_eq!(table.weight(), Weight::Other(450));
    assert_eq!(table.weight().to_number(), 450);
}

#[test]
fn family_class_high_byte() {
    let table = Table::parse(&os2_table(400, 0x0805, 0)).unwrap();
    assert_eq!(table.family_class(), 8);
}

#[test]
fn minimum_prefix_is_enough() {
    // 64 bytes: everything through fsSelection, nothing more.
    let table = Table::parse(&os2_table(500, 0, 0)[..64]).unwrap();
    assert_eq!(table.weight(), Weight::Medium);
    assert!(!table.is_bold());
}

#[test]
fn too_short_for_selection_flags() {
    assert!(Table::parse(&os2_table(500, 0, 0)[..63]).is_none());
}

#[test]
fn empty_table() {
    assert!(Table::parse(&[]).is_none());
}
