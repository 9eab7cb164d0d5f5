use super::*;

#[test]
fn frame_range_iter_covers_half_open_interval() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    let frames: Vec<u64> = r.iter().map(|f| f.0).collect();
    assert_eq!(frames, vec![2, 3, 4]);
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_converts_frames_to_secs() {
    let fps = Fps::new(30, 1).unwrap();
    assert!((fps.frames_to_secs(45) - 1.5).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_ceil(10.0), 300);
}

#[test]
fn canvas_validation_bounds() {
    assert!(Canvas { width: 0, height: 10 }.validate().is_err());
    assert!(
        Canvas {
            width: 70_000,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(Canvas { width: 64, height: 32 }.validate().is_ok());
}

#[test]
fn premultiply_rounds_half_up() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8Premul::transparent().to_array(), [0, 0, 0, 0]);
}
