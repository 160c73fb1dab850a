use super::*;

#[test]
fn same_seed_same_field() {
    for kind in FieldKind::ALL {
        let a = ParticleField::preset(kind, 7).unwrap();
        let b = ParticleField::preset(kind, 7).unwrap();
        assert_eq!(a, b, "{kind}");
        assert_eq!(a.sample(3.3), b.sample(3.3));
    }
}

#[test]
fn different_seeds_differ() {
    let a = ParticleField::preset(FieldKind::Starfield, 1).unwrap();
    let b = ParticleField::preset(FieldKind::Starfield, 2).unwrap();
    assert_ne!(a.particles[0].origin, b.particles[0].origin);
}

#[test]
fn presets_match_counts_and_ranges() {
    for kind in FieldKind::ALL {
        let field = ParticleField::preset(kind, 42).unwrap();
        let spec = kind.preset();
        assert_eq!(field.len(), spec.count);
        for p in &field.particles {
            assert!((0.0..=100.0).contains(&p.origin.x), "{kind} x {}", p.origin.x);
            assert!((0.0..=100.0).contains(&p.origin.y), "{kind} y {}", p.origin.y);
            assert!(spec.size_px.contains(p.size_px));
            assert!(spec.duration_secs.contains(p.motion.duration_secs));
            assert!(spec.delay_secs.contains(p.motion.delay_secs));
        }
    }
    assert_eq!(FieldKind::Starfield.preset().count, 50);
    assert_eq!(FieldKind::Embers.preset().count, 20);
    assert_eq!(FieldKind::Nodes.preset().count, 30);
}

#[test]
fn preset_delay_ranges() {
    assert_eq!(FieldKind::Starfield.preset().delay_secs, Span::new(0.0, 2.0));
    assert_eq!(FieldKind::Embers.preset().delay_secs, Span::new(0.0, 3.0));
    assert_eq!(FieldKind::Leaves.preset().delay_secs, Span::new(0.0, 5.0));
    assert_eq!(FieldKind::Nodes.preset().delay_secs, Span::new(0.0, 2.0));

    let stars = ParticleField::preset(FieldKind::Starfield, 1).unwrap();
    assert!(stars.particles.iter().all(|p| p.motion.delay_secs < 2.0));
}

#[test]
fn particles_hold_start_state_before_delay() {
    let field = ParticleField::preset(FieldKind::Embers, 9).unwrap();
    for p in &field.particles {
        let s = p.sample(0.0);
        assert_eq!(s.opacity, 0.8);
        assert_eq!(s.center.y, 105.0);
        assert_eq!(s.drift, Vec2::ZERO);
    }
}

#[test]
fn loops_with_period_duration() {
    let field = ParticleField::preset(FieldKind::Nodes, 3).unwrap();
    let p = &field.particles[0];
    let t = p.motion.delay_secs + p.motion.duration_secs * 0.25;
    let a = p.sample(t);
    let b = p.sample(t + p.motion.duration_secs * 4.0);
    assert!((a.opacity - b.opacity).abs() < 1e-9);
    assert!((a.radius_px - b.radius_px).abs() < 1e-9);
}

#[test]
fn stars_twinkle_between_bounds() {
    let field = ParticleField::preset(FieldKind::Starfield, 11).unwrap();
    for step in 0..40 {
        for s in field.sample(step as f64 * 0.37) {
            assert!((0.2 - 1e-9..=0.8 + 1e-9).contains(&s.opacity));
        }
    }
}

#[test]
fn injected_rng_drives_generation() {
    struct Fixed;
    impl RandomSource for Fixed {
        fn next_u64(&mut self) -> u64 {
            0
        }
    }
    let field = ParticleField::generate_with(FieldKind::Leaves.preset(), &mut Fixed).unwrap();
    for p in &field.particles {
        assert_eq!(p.origin, Point::new(0.0, 0.0));
        assert_eq!(p.motion.duration_secs, 10.0);
        assert_eq!(p.motion.delay_secs, 0.0);
    }
    assert_eq!(field.particles[0].sample(0.0).center.y, -10.0);
}

#[test]
fn invalid_spec_is_rejected() {
    let mut spec = FieldKind::Nodes.preset();
    spec.duration_secs = Span::new(0.0, 1.0);
    assert!(ParticleField::generate(spec, 0).is_err());

    let mut spec = FieldKind::Nodes.preset();
    spec.size_px = Span::new(4.0, 1.0);
    assert!(ParticleField::generate(spec, 0).is_err());
}

#[test]
fn field_kinds_parse() {
    assert_eq!(FieldKind::parse("embers").unwrap(), FieldKind::Embers);
    assert!(FieldKind::parse("snow").is_err());
}

#[test]
fn position_resolves_percent_then_pixels() {
    let s = ParticleState {
        id: 0,
        center: Point::new(50.0, 25.0),
        drift: Vec2::new(10.0, 0.0),
        radius_px: 1.0,
        opacity: 1.0,
        rotate: 0.0,
    };
    assert_eq!(s.position_in(200.0, 100.0), Point::new(110.0, 25.0));
}
