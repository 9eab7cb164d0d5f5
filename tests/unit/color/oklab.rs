use super::*;

fn close(a: Color, b: Color, eps: f64) -> bool {
    (a.r - b.r).abs() < eps
        && (a.g - b.g).abs() < eps
        && (a.b - b.b).abs() < eps
        && (a.a - b.a).abs() < eps
}

#[test]
fn white_has_unit_lightness_and_no_chroma() {
    let w = Oklab::from_color(Color::rgb(1.0, 1.0, 1.0));
    assert!((w.l - 1.0).abs() < 1e-4);
    assert!(w.a.abs() < 1e-4);
    assert!(w.b.abs() < 1e-4);
}

#[test]
fn round_trip_is_stable() {
    for c in [
        Color::rgb(1.0, 0.0, 0.0),
        Color::rgb(0.0, 1.0, 0.0),
        Color::rgba(0.2, 0.4, 0.9, 0.5),
        Color::from_argb_u32(0xFFBD_4CE0),
    ] {
        let back = Oklab::from_color(c).to_color();
        assert!(close(c, back, 1e-6), "{c:?} -> {back:?}");
    }
}

#[test]
fn mix_endpoints_match_inputs() {
    let a = Oklab::from_color(Color::rgb(1.0, 0.0, 0.0));
    let b = Oklab::from_color(Color::rgb(0.0, 0.0, 1.0));
    assert_eq!(a.mix(b, 0.0), a);
    let end = a.mix(b, 1.0);
    assert!((end.l - b.l).abs() < 1e-12);
    assert!((end.a - b.a).abs() < 1e-12);
    assert!((end.b - b.b).abs() < 1e-12);
}
