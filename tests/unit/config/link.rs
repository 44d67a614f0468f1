use super::*;
use crate::sequence::parse_sequence;

#[test]
fn missing_sequence_uses_default() {
    let link = ShareLink::parse("https://example.com/pacer");
    assert_eq!(link.sequence, "in 4 hold 7 out 8");
    assert_eq!(ShareLink::parse(""), ShareLink::default());
}

#[test]
fn reads_sequence_and_flags_from_full_url() {
    let link =
        ShareLink::parse("https://example.com/?sequence=in+5+out+5&dark=false&controls=0#top");
    assert_eq!(link.sequence, "in 5 out 5");
    assert!(!link.dark);
    assert!(!link.controls);
}

#[test]
fn percent_escapes_are_decoded() {
    let link = ShareLink::parse("sequence=in%204%20hold%207&dark");
    assert_eq!(link.sequence, "in 4 hold 7");
    assert!(link.dark);
}

#[test]
fn malformed_values_fall_back() {
    let link = ShareLink::parse("?dark=maybe&sequence=in%2&utm_source=x");
    assert!(link.dark);
    assert_eq!(link.sequence, "in%2");
    assert_eq!(percent_decode("%zz%"), "%zz%");
}

#[test]
fn query_round_trips() {
    let link = ShareLink {
        sequence: "in 4.5 hold 2 out 6".to_string(),
        dark: false,
        controls: true,
    };
    let q = link.to_query();
    assert_eq!(q, "sequence=in+4.5+hold+2+out+6&dark=false&controls=true");
    assert_eq!(ShareLink::parse(&q), link);
    assert_eq!(ShareLink::parse(&link.to_string()), link);
}

#[test]
fn with_sequence_writes_canonical_text() {
    let seq = parse_sequence("in 4.0 out 8").unwrap();
    let link = ShareLink::default().with_sequence(&seq);
    assert_eq!(link.sequence, "in 4 out 8");
}

#[test]
fn reserved_characters_are_escaped() {
    assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
    assert_eq!(percent_decode(&percent_encode("ü + ß")), "ü + ß");
}
