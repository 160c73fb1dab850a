use super::*;
use crate::foundation::core::Rgba8;

fn table(pairs: &[(f64, f64)]) -> BreakpointTable<f64> {
    BreakpointTable::from_pairs(pairs.iter().copied()).unwrap()
}

#[test]
fn clamps_below_and_above_domain() {
    let t = table(&[(0.2, 3.0), (0.6, 7.0), (0.9, -1.0)]);
    for v in [-10.0, 0.0, 0.1, 0.2] {
        assert_eq!(t.sample(v), 3.0);
    }
    for v in [0.9, 1.0, 42.0] {
        assert_eq!(t.sample(v), -1.0);
    }
}

#[test]
fn exact_breakpoints_return_their_outputs() {
    let t = table(&[(0.0, 0.0), (0.25, 40.0), (0.5, 10.0), (1.0, 90.0)]);
    assert_eq!(t.sample(0.0), 0.0);
    assert_eq!(t.sample(0.25), 40.0);
    assert_eq!(t.sample(0.5), 10.0);
    assert_eq!(t.sample(1.0), 90.0);
}

#[test]
fn rise_and_fall_midpoint() {
    let t = table(&[(0.0, 0.0), (0.5, 100.0), (1.0, 0.0)]);
    assert_eq!(t.sample(0.25), 50.0);
    assert_eq!(t.sample(0.75), 50.0);
}

#[test]
fn out_of_range_clamps_to_last_output() {
    let t = table(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(t.sample(1.5), 1.0);
}

#[test]
fn duplicated_first_input_clamps_then_takes_last_write() {
    let t = table(&[(0.0, 0.0), (0.0, 5.0), (1.0, 10.0)]);
    assert_eq!(t.sample(0.0), 0.0);
    assert_eq!(t.sample(0.5), 7.5);

    let u = t.unclamped();
    assert_eq!(u.sample(0.0), 0.0);
    assert_eq!(u.sample(0.5), 7.5);
}

#[test]
fn duplicated_interior_input_takes_last_write() {
    let t = table(&[(0.0, 0.0), (0.5, 1.0), (0.5, 2.0), (1.0, 3.0)]);
    assert_eq!(t.sample(0.5), 2.0);
    assert_eq!(t.sample(0.25), 0.5);
    assert_eq!(t.sample(0.75), 2.5);
}

#[test]
fn monotonic_between_breakpoints() {
    let t = table(&[(0.0, 0.0), (0.3, 0.2), (0.7, 0.9), (1.0, 1.0)]);
    let mut prev = t.sample(0.0);
    for i in 1..=200 {
        let v = t.sample(f64::from(i) / 200.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn sampling_is_pure() {
    let t = table(&[(0.0, 10.0), (1.0, 20.0)]);
    assert_eq!(t.sample(0.37), t.sample(0.37));
}

#[test]
fn single_breakpoint_is_constant() {
    let t = table(&[(0.5, 4.0)]);
    assert_eq!(t.sample(0.0), 4.0);
    assert_eq!(t.sample(0.5), 4.0);
    assert_eq!(t.sample(1.0), 4.0);
}

#[test]
fn nan_samples_as_start() {
    let t = table(&[(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(t.sample(f64::NAN), 1.0);
}

#[test]
fn malformed_tables_are_rejected() {
    assert!(BreakpointTable::<f64>::new(vec![], vec![]).is_err());
    assert!(BreakpointTable::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(BreakpointTable::new(vec![0.0, 0.6, 0.4], vec![0.0, 1.0, 2.0]).is_err());
    assert!(BreakpointTable::new(vec![0.0, f64::INFINITY], vec![0.0, 1.0]).is_err());
}

#[test]
fn unclamped_tables_extrapolate() {
    let t = table(&[(0.0, 0.0), (1.0, 10.0)]).unclamped();
    assert_eq!(t.sample(1.5), 15.0);
    assert_eq!(t.sample(-0.5), -5.0);
}

#[test]
fn segment_eases_shape_progress() {
    let t = table(&[(0.0, 0.0), (1.0, 1.0)]).with_ease(Ease::InQuad);
    assert_eq!(t.sample(0.5), 0.25);

    let t = table(&[(0.0, 0.0), (0.5, 1.0), (1.0, 2.0)])
        .with_eases(vec![Ease::Linear, Ease::InQuad])
        .unwrap();
    assert_eq!(t.sample(0.25), 0.5);
    assert_eq!(t.sample(0.75), 1.25);

    assert!(
        table(&[(0.0, 0.0), (1.0, 1.0)])
            .with_eases(vec![Ease::Linear, Ease::Linear])
            .is_err()
    );
}

#[test]
fn colour_tables_interpolate() {
    let t = BreakpointTable::new(
        vec![0.0, 100.0],
        vec![Rgba8::new(0, 0, 0, 0), Rgba8::new(0, 0, 0, 204)],
    )
    .unwrap();
    assert_eq!(t.sample(50.0), Rgba8::new(0, 0, 0, 102));
}

#[test]
fn deserialization_validates() {
    let ok: BreakpointTable<f64> =
        serde_json::from_str(r#"{"inputs":[0,1],"outputs":[0,2],"eases":["in_quad"]}"#).unwrap();
    assert_eq!(ok.sample(0.5), 0.5);
    assert!(ok.is_clamped());

    let bad = serde_json::from_str::<BreakpointTable<f64>>(r#"{"inputs":[1,0],"outputs":[0,2]}"#);
    assert!(bad.is_err());
}

#[test]
fn map_outputs_keeps_breakpoints() {
    let t = table(&[(0.0, 1.0), (1.0, 3.0)]).map_outputs(|v| v * 2.0);
    assert_eq!(t.inputs(), &[0.0, 1.0]);
    assert_eq!(t.sample(0.5), 4.0);
}
