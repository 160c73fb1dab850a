use super::*;

#[test]
fn starts_at_zero_with_affixes() {
    let c = AnimatedCounter::new(250.0).prefix("$").suffix("+");
    assert_eq!(c.text(), "$0+");
    assert!(!c.has_entered());
}

#[test]
fn counts_up_once_in_view() {
    let mut c = AnimatedCounter::new(98.0).suffix("%");
    c.step(1.0);
    assert_eq!(c.current(), 0.0);

    c.enter_view();
    let mut last = 0.0;
    for _ in 0..30 {
        let v = c.step(1.0 / 60.0);
        assert!(v >= last);
        last = v;
    }
    assert!(last > 0.0 && last < 98.0);

    for _ in 0..600 {
        c.step(1.0 / 60.0);
    }
    assert!(c.is_settled());
    assert_eq!(c.text(), "98%");
}

#[test]
fn entering_twice_does_not_restart() {
    let mut c = AnimatedCounter::new(10.0);
    c.enter_view();
    for _ in 0..600 {
        c.step(1.0 / 60.0);
    }
    c.enter_view();
    assert_eq!(c.text(), "10");
    c.reset();
    assert_eq!(c.text(), "0");
    assert!(!c.has_entered());
}
