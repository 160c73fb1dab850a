use super::*;

#[test]
fn numbers_and_lengths_interpolate() {
    let v = ChannelValue::lerp(&ChannelValue::Number(0.0), &ChannelValue::Number(10.0), 0.25);
    assert_eq!(v, ChannelValue::Number(2.5));

    let v = ChannelValue::lerp(&ChannelValue::px(10.0), &ChannelValue::px(0.0), 0.5);
    assert_eq!(v, ChannelValue::px(5.0));
    assert_eq!(v.to_css(), "5px");
}

#[test]
fn colours_interpolate_per_component() {
    let a = ChannelValue::Color(Rgba8::new(0, 0, 0, 0));
    let b = ChannelValue::Color(Rgba8::new(0, 0, 0, 204));
    let mid = ChannelValue::lerp(&a, &b, 0.5);
    assert_eq!(mid, ChannelValue::Color(Rgba8::new(0, 0, 0, 102)));
    assert_eq!(mid.to_css(), "rgba(0, 0, 0, 0.4)");
}

#[test]
fn mismatched_kinds_snap_to_nearer_end() {
    let a = ChannelValue::px(0.0);
    let b = ChannelValue::percent(100.0);
    assert_eq!(ChannelValue::lerp(&a, &b, 0.49), a);
    assert_eq!(ChannelValue::lerp(&a, &b, 0.5), b);

    let a = ChannelValue::from("hidden");
    let b = ChannelValue::from("visible");
    assert_eq!(ChannelValue::lerp(&a, &b, 0.2), a);
    assert_eq!(ChannelValue::lerp(&a, &b, 0.8), b);
}

#[test]
fn serde_shape_is_externally_tagged() {
    let v: ChannelValue = serde_json::from_str(r#"{"length":{"value":50,"unit":"percent"}}"#).unwrap();
    assert_eq!(v, ChannelValue::percent(50.0));
    assert_eq!(
        serde_json::to_string(&ChannelValue::Number(1.5)).unwrap(),
        r#"{"number":1.5}"#
    );
}
