use super::*;

fn run(spring: &mut SpringFollower, secs: f64) {
    let frames = (secs * 60.0).round() as usize;
    for _ in 0..frames {
        spring.step(1.0 / 60.0);
    }
}

#[test]
fn converges_and_rests_on_target() {
    let mut s = SpringFollower::new(SpringConfig::SCROLL, 0.0);
    s.set_target(1.0);
    assert!(!s.is_at_rest());
    run(&mut s, 5.0);
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 1.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn moves_toward_target_monotonically_when_overdamped() {
    let mut s = SpringFollower::new(SpringConfig::SCROLL, 0.0);
    s.set_target(1.0);
    let mut prev = 0.0;
    for _ in 0..30 {
        let v = s.step(1.0 / 60.0);
        assert!(v >= prev);
        assert!(v <= 1.0);
        prev = v;
    }
    assert!(prev > 0.3);
}

#[test]
fn bouncy_spring_overshoots() {
    let mut s = SpringFollower::new(SpringConfig::BOUNCY, 0.0);
    s.set_target(100.0);
    let mut peak: f64 = 0.0;
    for _ in 0..120 {
        peak = peak.max(s.step(1.0 / 60.0));
    }
    assert!(peak > 100.0);
}

#[test]
fn resting_spring_ignores_steps() {
    let mut s = SpringFollower::new(SpringConfig::GENTLE, 3.0);
    assert_eq!(s.step(1.0), 3.0);
    s.set_target(3.0);
    assert!(s.is_at_rest());
}

#[test]
fn jump_resets_motion() {
    let mut s = SpringFollower::new(SpringConfig::STIFF, 0.0);
    s.set_target(10.0);
    s.step(0.05);
    s.jump(-2.0);
    assert_eq!(s.value(), -2.0);
    assert_eq!(s.target(), -2.0);
    assert!(s.is_at_rest());
}

#[test]
fn config_defaults_fill_from_json() {
    let c: SpringConfig = serde_json::from_str(r#"{"stiffness":150,"damping":20}"#).unwrap();
    assert_eq!(c.mass, 1.0);
    assert_eq!(c.rest_delta, 0.01);
}
