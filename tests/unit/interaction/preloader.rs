use super::*;
use crate::foundation::math::Rng64;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

struct Max;

impl RandomSource for Max {
    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }
}

#[test]
fn reaches_done_and_never_shows_over_100() {
    let mut p = Preloader::new(Rng64::new(99));
    let mut t = 0;
    while !p.is_done() {
        t += 16;
        p.tick(ms(t));
        assert!(p.percent() <= 100);
        assert!(t < 60_000, "preloader never finished");
    }
    assert_eq!(p.percent(), 100);
}

#[test]
fn holds_for_half_a_second_after_full() {
    let mut p = Preloader::new(Max);
    // Just under 15 per tick: seven ticks pass 100.
    p.tick(ms(700));
    assert!(p.progress() > 100.0);
    assert_eq!(p.percent(), 100);
    assert_eq!(p.phase(), PreloaderPhase::Loading);

    assert_eq!(
        p.tick(ms(800)),
        PreloaderPhase::Holding { until: ms(1300) }
    );
    assert_eq!(p.progress(), 100.0);
    assert_eq!(p.tick(ms(1299)), PreloaderPhase::Holding { until: ms(1300) });
    assert_eq!(p.tick(ms(1300)), PreloaderPhase::Done);
}

#[test]
fn nothing_happens_before_first_interval() {
    let mut p = Preloader::new(Max);
    p.tick(ms(99));
    assert_eq!(p.progress(), 0.0);
    p.tick(ms(100));
    assert!(p.progress() > 14.9);
}

#[test]
fn reset_restarts() {
    let mut p = Preloader::new(Rng64::new(1));
    p.tick(ms(5000));
    assert!(p.is_done());
    p.reset();
    assert_eq!(p.phase(), PreloaderPhase::Loading);
    assert_eq!(p.percent(), 0);
}
