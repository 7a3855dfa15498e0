use super::*;

#[test]
fn len_and_empty() {
    let span = Span::new(3, 10);
    assert_eq!(span.len(), 7);
    assert!(!span.is_empty());
    assert!(Span::new(4, 4).is_empty());
}

#[test]
fn contains_is_end_exclusive() {
    let span = Span::new(2, 5);
    assert!(span.contains(2));
    assert!(span.contains(4));
    assert!(!span.contains(5));
    assert!(!span.contains(1));
}

#[test]
fn shifted_moves_both_ends() {
    assert_eq!(Span::new(0, 6).shifted(10), Span::new(10, 16));
}

#[test]
fn range_round_trip() {
    let span = Span::from(7..12);
    assert_eq!(span.to_range(), 7..12);
}

#[test]
fn display_and_debug() {
    let span = Span::new(1, 9);
    assert_eq!(span.to_string(), "1..9");
    assert_eq!(format!("{span:?}"), "1..9");
}
