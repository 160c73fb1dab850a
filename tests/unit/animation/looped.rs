use super::*;

fn pulse() -> BreakpointTable<f64> {
    BreakpointTable::new(vec![0.0, 0.5, 1.0], vec![0.2, 1.0, 0.2]).unwrap()
}

#[test]
fn holds_start_value_during_delay() {
    let track = LoopedTrack::new(pulse(), 2.0).unwrap().delay(1.5);
    assert_eq!(track.sample(0.0), 0.2);
    assert_eq!(track.sample(1.5), 0.2);
    assert_eq!(track.sample(2.5), 1.0);
}

#[test]
fn repeat_wraps_each_duration() {
    let track = LoopedTrack::new(pulse(), 2.0).unwrap();
    assert_eq!(track.sample(1.0), track.sample(3.0));
    assert_eq!(track.sample(0.5), track.sample(10.5));
    assert!((track.phase(4.0)).abs() < 1e-12);
}

#[test]
fn ping_pong_reflects() {
    let ramp: BreakpointTable<f64> = BreakpointTable::new(vec![0.0, 1.0], vec![0.0, 10.0]).unwrap();
    let track = LoopedTrack::new(ramp, 1.0).unwrap().mode(LoopMode::PingPong);
    assert!((track.sample(0.25) - 2.5).abs() < 1e-9);
    assert!((track.sample(1.25) - 7.5).abs() < 1e-9);
    assert!((track.sample(2.25) - 2.5).abs() < 1e-9);
}

#[test]
fn rejects_non_positive_duration() {
    assert!(LoopedTrack::new(pulse(), 0.0).is_err());
    assert!(LoopedTrack::new(pulse(), f64::NAN).is_err());
}
