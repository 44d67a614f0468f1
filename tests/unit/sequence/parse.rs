use super::*;

#[test]
fn default_text_parses_into_three_steps() {
    let seq = parse_sequence("in 4 hold 7 out 8").unwrap();
    assert_eq!(
        seq.steps(),
        &[
            PhaseStep::new(PhaseKind::Inhale, 4.0),
            PhaseStep::new(PhaseKind::Hold, 7.0),
            PhaseStep::new(PhaseKind::Exhale, 8.0),
        ]
    );
    assert_eq!(seq.total_duration(), 19.0);
    assert_eq!(seq, Sequence::default());
    assert_eq!(parse_sequence(DEFAULT_SEQUENCE).unwrap(), seq);
}

#[test]
fn odd_token_count_is_rejected() {
    assert_eq!(
        parse_sequence("in 4 hold"),
        Err(ParseError::OddTokenCount { count: 3 })
    );
    assert_eq!(
        parse_sequence(""),
        Err(ParseError::OddTokenCount { count: 1 })
    );
}

#[test]
fn unknown_kind_is_rejected() {
    assert_eq!(
        parse_sequence("foo 4"),
        Err(ParseError::UnknownKind {
            token: "foo".to_string(),
            position: 0
        })
    );
    assert!(matches!(
        parse_sequence("in 4 Hold 2"),
        Err(ParseError::UnknownKind { position: 2, .. })
    ));
}

#[test]
fn non_positive_and_non_numeric_durations_are_rejected() {
    for bad in ["in 0", "in -1", "in abc", "in NaN", "in inf", "in 1e400", "in 4s"] {
        assert!(
            matches!(
                parse_sequence(bad),
                Err(ParseError::InvalidDuration { position: 1, .. })
            ),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn finite_durations_with_an_infinite_sum_are_rejected() {
    assert_eq!(
        parse_sequence("in 1e308 out 1e308"),
        Err(ParseError::TotalOverflow { steps: 2 })
    );
    assert!(!is_valid_sequence("in 1e308 hold 1e308 out 1"));

    let big = parse_sequence("in 1e308 out 1").unwrap();
    assert!(big.total_duration().is_finite());
}

#[test]
fn whitespace_is_not_trimmed() {
    assert!(parse_sequence(" in 4").is_err());
    assert!(parse_sequence("in 4 ").is_err());
    assert!(parse_sequence("in  4 out 4").is_err());
    assert!(!is_valid_sequence("in 4\thold 2"));
}

#[test]
fn fractional_and_single_step_sequences_parse() {
    let seq = parse_sequence("out 2.5").unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.total_duration(), 2.5);

    let seq = parse_sequence("in 0.75 in 1.25").unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.total_duration(), 2.0);
}

#[test]
fn display_round_trips() {
    for text in ["in 4 hold 7 out 8", "in 1.5 out 2.25", "hold 0.1"] {
        let seq = parse_sequence(text).unwrap();
        assert_eq!(seq.to_string(), text);
        assert_eq!(seq.to_string().parse::<Sequence>().unwrap(), seq);
    }
}

#[test]
fn step_starts_accumulate_in_order() {
    let seq = Sequence::default();
    assert_eq!(seq.step_starts(), vec![0.0, 4.0, 11.0]);
}

#[test]
fn new_validates_typed_steps() {
    assert_eq!(Sequence::new(vec![]), Err(ParseError::Empty));
    assert!(Sequence::new(vec![PhaseStep::new(PhaseKind::Hold, 0.0)]).is_err());
    assert!(Sequence::new(vec![PhaseStep::new(PhaseKind::Hold, f64::NAN)]).is_err());
    assert!(Sequence::new(vec![PhaseStep::new(PhaseKind::Hold, 3.0)]).is_ok());
}

#[test]
fn serde_uses_text_form() {
    let seq = Sequence::default();
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, "\"in 4 hold 7 out 8\"");
    let back: Sequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seq);
    assert!(serde_json::from_str::<Sequence>("\"in 4 hold\"").is_err());
}

#[test]
fn phase_kind_tokens_round_trip() {
    for kind in PhaseKind::ALL {
        assert_eq!(PhaseKind::from_token(kind.token()), Some(kind));
    }
    assert_eq!(PhaseKind::Inhale.label(), "Inhale");
    assert_eq!(PhaseKind::Exhale.scale(), 1.0);
}
