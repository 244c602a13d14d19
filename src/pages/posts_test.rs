use super::*;

#[test]
fn short_content_passes_through_unchanged() {
    assert_eq!(excerpt("Match day!", 120), "Match day!");
}

#[test]
fn long_content_is_cut_with_an_ellipsis() {
    assert_eq!(excerpt("abcdefghij", 4), "abcd...");
}

#[test]
fn boundary_length_is_not_cut() {
    assert_eq!(excerpt("abcd", 4), "abcd");
}

#[test]
fn multibyte_content_cuts_on_char_boundaries() {
    assert_eq!(excerpt("åäöåäö", 3), "åäö...");
}
