use super::*;
use crate::animation::ease::Ease;

fn timer() -> PingPong {
    PingPong::new(5000, Ease::Linear).unwrap()
}

#[test]
fn progress_is_measured_from_start_not_clock_origin() {
    let clock = ManualClock::new();
    clock.set(Duration::from_secs(3));
    let driver = ProgressDriver::start(timer(), clock);
    assert_eq!(driver.progress(), 0.0);

    driver.clock().advance(Duration::from_millis(2500));
    assert_eq!(driver.elapsed(), Duration::from_millis(2500));
    assert!((driver.progress() - 0.5).abs() < 1e-9);

    driver.clock().advance(Duration::from_millis(5000));
    assert!((driver.progress() - 0.5).abs() < 1e-9);
}

#[test]
fn run_ticks_until_callback_breaks() {
    let driver = ProgressDriver::start(timer(), ManualClock::new());
    let mut seen = Vec::new();
    let ticks = driver.run(Duration::from_secs(1), |p| {
        seen.push(p);
        if seen.len() == 11 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    assert_eq!(ticks, 11);
    let expected = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 0.8, 0.6, 0.4, 0.2, 0.0];
    for (got, want) in seen.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{seen:?}");
    }
}

#[test]
fn immediate_break_delivers_one_tick() {
    let driver = ProgressDriver::start(timer(), ManualClock::new());
    let ticks = driver.run(Duration::from_millis(16), |_| ControlFlow::Break(()));
    assert_eq!(ticks, 1);
    assert_eq!(driver.elapsed(), Duration::ZERO);
}

#[test]
fn system_clock_driver_starts_near_zero() {
    let driver = ProgressDriver::start_now(timer());
    assert!(driver.progress() < 0.1);
    assert_eq!(driver.timer().duration_ms(), 5000);
}
