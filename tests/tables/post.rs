use fontdir::tables::post::Table;

use crate::post_table;

#[test]
fn fixed_pitch_flag() {
    assert!(Table::parse(&post_table(1)).unwrap().is_fixed_pitch);
    assert!(!Table::parse(&post_table(0)).unwrap().is_fixed_pitch);
}

#[test]
fn any_non_zero_value_counts() {
    assert!(Table::parse(&post_table(0xFFFF)).unwrap().is_fixed_pitch);
}

#[test]
fn truncated_before_flag() {
    assert!(Table::parse(&post_table(1)[..12]).is_none());
}
