use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn inputs_outside_unit_interval_are_clamped() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(3.0), 1.0);
    }
}

#[test]
fn fast_out_slow_in_front_loads_motion() {
    let mid = Ease::FastOutSlowIn.apply(0.5);
    assert!(mid > 0.7 && mid < 0.85, "mid={mid}");
    assert!(Ease::FastOutSlowIn.apply(0.1) > 0.0);
}

#[test]
fn default_and_serde_names() {
    assert_eq!(Ease::default(), Ease::FastOutSlowIn);
    let v = serde_json::to_value(Ease::InOutCubic).unwrap();
    assert_eq!(v, serde_json::json!("in_out_cubic"));
    let e: Ease = serde_json::from_value(serde_json::json!("fast_out_slow_in")).unwrap();
    assert_eq!(e, Ease::FastOutSlowIn);
}
