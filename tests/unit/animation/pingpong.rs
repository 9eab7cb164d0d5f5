use super::*;

fn linear(ms: u64) -> PingPong {
    PingPong::new(ms, Ease::Linear).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rejects_zero_duration() {
    assert!(matches!(
        PingPong::new(0, Ease::Linear),
        Err(RevealError::InvalidArgument(_))
    ));
}

#[test]
fn rises_then_falls_then_rises() {
    let p = linear(5000);
    assert_eq!(p.value_at_secs(0.0), 0.0);
    assert!(close(p.value_at_secs(2.5), 0.5));
    assert_eq!(p.value_at_secs(5.0), 1.0);
    assert!(close(p.value_at_secs(7.5), 0.5));
    assert_eq!(p.value_at_secs(10.0), 0.0);
    assert!(close(p.value_at_secs(12.5), 0.5));
    assert!(close(p.value_at_secs(1_000_001.0), 0.2));
}

#[test]
fn continuous_at_turnarounds() {
    for ease in Ease::ALL {
        let p = PingPong::new(5000, ease).unwrap();
        for turn in [5.0, 10.0, 15.0] {
            let before = p.value_at_secs(turn - 1e-7);
            let after = p.value_at_secs(turn + 1e-7);
            assert!((before - after).abs() < 1e-4, "{ease:?} at {turn}");
        }
    }
}

#[test]
fn falling_leg_mirrors_rising_leg() {
    let p = PingPong::new(4000, Ease::FastOutSlowIn).unwrap();
    for i in 0..=20 {
        let t = 4.0 * f64::from(i) / 20.0;
        assert!(close(p.value_at_secs(t), p.value_at_secs(8.0 - t)), "t={t}");
    }
}

#[test]
fn values_stay_in_unit_interval() {
    for ease in Ease::ALL {
        let p = PingPong::new(1500, ease).unwrap();
        for i in 0..500 {
            let v = p.value_at_secs(f64::from(i) * 0.017);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}

#[test]
fn negative_and_non_finite_time_clamp_to_start() {
    let p = linear(5000);
    assert_eq!(p.value_at_secs(-3.0), 0.0);
    assert_eq!(p.value_at_secs(f64::NAN), 0.0);
    assert_eq!(p.value_at_secs(f64::INFINITY), 0.0);
}

#[test]
fn frame_sampling_uses_fps() {
    let p = linear(5000);
    let fps = Fps::new(30, 1).unwrap();
    assert!(close(p.value_at_frame(FrameIndex(75), fps), 0.5));
    assert!(close(p.value_at_frame(FrameIndex(150), fps), 1.0));
    assert!(close(p.value_at(Duration::from_millis(1250)), 0.25));
}

#[test]
fn cycle_frames_cover_rise_and_fall() {
    let p = linear(5000);
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(p.cycle_frames(fps), 300);
    let r = p.cycles_range(fps, 2);
    assert_eq!(r.len_frames(), 600);
    assert_eq!(r.start, FrameIndex(0));
}
