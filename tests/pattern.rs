#![forbid(unsafe_code)]
use roulement::{parse_pattern, PatternError, RotationPattern, DUPONT, PANAMA};

#[test]
fn parse_panama_literal() {
    let p = parse_pattern("OOFFOOOFFOOFFFOOFFOOOFFOOFFF").unwrap();
    assert_eq!(p.len(), 28);
    assert_eq!(p.on_days(), 14);
    assert_eq!(p, parse_pattern(PANAMA).unwrap());
}

#[test]
fn dupont_is_28_days() {
    let p = parse_pattern(DUPONT).unwrap();
    assert_eq!(p.len(), 28);
    assert_eq!(p.on_days(), 14);
}

#[test]
fn invalid_char_reports_position() {
    let err = parse_pattern("OOXF").unwrap_err();
    assert_eq!(err, PatternError::InvalidChar { ch: 'X', position: 2 });
    insta::assert_snapshot!(err.to_string(), @"invalid character 'X' at position 2 (expected O/F or 1/0)");
}

#[test]
fn position_counts_cleaned_characters() {
    // séparateurs ignorés : le 'z' est le 5e symbole utile
    let err = parse_pattern("OO-FF z").unwrap_err();
    assert_eq!(err, PatternError::InvalidChar { ch: 'z', position: 4 });
}

#[test]
fn empty_after_cleaning() {
    assert_eq!(parse_pattern("").unwrap_err(), PatternError::Empty);
    assert_eq!(parse_pattern(" - -\t").unwrap_err(), PatternError::Empty);
}

#[test]
fn mixed_symbols_and_case() {
    let p = parse_pattern("o-f 1 0").unwrap();
    assert_eq!(p.days(), &[true, false, true, false]);
    assert_eq!(p.to_string(), "OFOF");
}

#[test]
fn canonical_form_roundtrips() {
    for raw in ["OOFF-OOOF", "1100 1110", "f", "ooooFFFooo", PANAMA, DUPONT] {
        let p = parse_pattern(raw).unwrap();
        let again: RotationPattern = p.to_string().parse().unwrap();
        assert_eq!(again, p);
    }
}

#[test]
fn simple_pattern_shape() {
    assert_eq!(RotationPattern::simple(3, 3).to_string(), "OOOFFFFFF");
    assert_eq!(RotationPattern::simple(2, 1).to_string(), "OO");
    assert_eq!(RotationPattern::simple(0, 0).to_string(), "O");
}

#[test]
fn block_pattern_shape() {
    assert_eq!(RotationPattern::block(2, 5).to_string(), "OOFFF");
    assert_eq!(RotationPattern::block(7, 3).to_string(), "OOO");
}

#[test]
fn is_on_applies_circular_shift() {
    let p = parse_pattern("OOF").unwrap();
    // décalage 1 : le jour 0 tombe sur la position 2 du motif
    assert!(!p.is_on(0, 1));
    assert!(p.is_on(1, 1));
    assert!(p.is_on(2, 1));
    assert!(!p.is_on(3, 1));
    assert!(!RotationPattern::new(Vec::new()).is_on(0, 0));
}
