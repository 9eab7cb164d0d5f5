use super::*;

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.0), 2.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 1.0), 6.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.25), 3.0);

    let p = <Point as Lerp>::lerp(&Point::new(0.0, 0.0), &Point::new(10.0, -4.0), 0.5);
    assert_eq!(p, Point::new(5.0, -2.0));
}

#[test]
fn clamp_unit_maps_nan_to_zero() {
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(-3.0), 0.0);
    assert_eq!(clamp_unit(7.0), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
}

#[test]
fn premul_and_unpremul_channels() {
    assert_eq!(premul_u8(255, 128), 128);
    assert_eq!(premul_u8(128, 128), 64);
    assert_eq!(premul_u8(9, 255), 9);
    assert_eq!(premul_u8(200, 0), 0);

    assert_eq!(unpremul_u8(64, 128), 128);
    assert_eq!(unpremul_u8(128, 128), 255);
    assert_eq!(unpremul_u8(9, 255), 9);
    // transparent pixels carry no recoverable color
    assert_eq!(unpremul_u8(10, 0), 10);
}
