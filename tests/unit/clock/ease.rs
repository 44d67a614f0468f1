use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::InOutQuad, Ease::InOutCubic, Ease::InOutSine];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_of_range_inputs_clamp() {
    for ease in ALL {
        assert!(ease.apply(-3.0).abs() < 1e-12);
        assert!((ease.apply(7.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn serde_names_are_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutSine).unwrap(),
        "\"in_out_sine\""
    );
    let e: Ease = serde_json::from_str("\"linear\"").unwrap();
    assert_eq!(e, Ease::Linear);
}
