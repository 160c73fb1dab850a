use super::*;
use crate::foundation::core::Rgba8;

fn parallax() -> Animator {
    AnimatorBuilder::new("parallax")
        .scalar("card", Channel::TranslateY, &[0.0, 1.0], &[50.0, -50.0])
        .unwrap()
        .scalar("card", Channel::Opacity, &[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0])
        .unwrap()
        .scalar("glow", Channel::Scale, &[0.0, 0.5, 1.0], &[0.8, 1.0, 0.8])
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn samples_every_binding() {
    let frame = parallax().sample(0.5);
    assert_eq!(frame.number("card", Channel::TranslateY), Some(0.0));
    assert_eq!(frame.number("card", Channel::Opacity), Some(1.0));
    assert_eq!(frame.number("glow", Channel::Scale), Some(1.0));
    assert_eq!(frame.value("card", Channel::TranslateY), Some(&ChannelValue::px(0.0)));
}

#[test]
fn bindings_share_one_input() {
    let a = parallax();
    let f = a.sample(0.1);
    assert_eq!(f.number("card", Channel::Opacity), Some(0.5));
    assert_eq!(f.number("card", Channel::TranslateY), Some(40.0));
    assert_eq!(f.input, 0.1);
}

#[test]
fn css_per_element() {
    let css = parallax().sample(0.0).css();
    assert_eq!(css["card"], "opacity: 0; transform: translateY(50px)");
    assert_eq!(css["glow"], "transform: scale(0.8)");
}

#[test]
fn duplicate_bindings_are_rejected() {
    let err = AnimatorBuilder::new("dup")
        .scalar("a", Channel::Opacity, &[0.0, 1.0], &[0.0, 1.0])
        .unwrap()
        .scalar("a", Channel::Opacity, &[0.0, 1.0], &[1.0, 0.0]);
    assert!(err.is_err());
}

#[test]
fn colour_bindings_interpolate() {
    let a = AnimatorBuilder::new("nav")
        .driver(Driver::ScrollPx)
        .values(
            "nav",
            Channel::BackgroundColor,
            &[0.0, 100.0],
            vec![Rgba8::new(0, 0, 0, 0), Rgba8::new(0, 0, 0, 204)],
        )
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(a.driver, Driver::ScrollPx);
    assert_eq!(
        a.sample(50.0).value("nav", Channel::BackgroundColor),
        Some(&ChannelValue::Color(Rgba8::new(0, 0, 0, 102)))
    );
}

#[test]
fn elements_keep_binding_order() {
    assert_eq!(parallax().elements(), vec!["card", "glow"]);
    assert!(parallax().binding("glow", Channel::Scale).is_some());
    assert!(parallax().binding("glow", Channel::Blur).is_none());
}

#[test]
fn deserialized_animators_validate() {
    let json = r#"{
        "name": "x",
        "bindings": [
            {"element": "a", "channel": "opacity", "table": {"inputs": [0, 1], "outputs": [{"number": 0}, {"number": 1}]}},
            {"element": "a", "channel": "opacity", "table": {"inputs": [0, 1], "outputs": [{"number": 1}, {"number": 0}]}}
        ]
    }"#;
    let a: Animator = serde_json::from_str(json).unwrap();
    assert_eq!(a.driver, Driver::Progress);
    assert!(a.validate().is_err());
}

#[test]
fn domain_covers_every_binding() {
    assert_eq!(parallax().domain(), (0.0, 1.0));
    let a = AnimatorBuilder::new("d")
        .scalar("a", Channel::Opacity, &[0.2, 0.4], &[0.0, 1.0])
        .unwrap()
        .scalar("b", Channel::Opacity, &[-50.0, 10.0], &[0.0, 1.0])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(a.domain(), (-50.0, 10.0));
}

#[test]
fn remapped_bindings_sample_the_derived_input() {
    let drawing = BreakpointTable::new(vec![0.2, 0.6], vec![0.0, 1.0]).unwrap();
    let a = AnimatorBuilder::new("drawing")
        .scalar_via(&drawing, "mark", Channel::PathLength, &[0.0, 0.5], &[0.0, 1.0])
        .unwrap()
        .scalar("plain", Channel::PathLength, &[0.0, 0.5], &[0.0, 1.0])
        .unwrap()
        .build()
        .unwrap();

    // 0.4 is halfway along the derived signal, the end of the mark's curve.
    let f = a.sample(0.4);
    assert_eq!(f.number("mark", Channel::PathLength), Some(1.0));
    assert_eq!(f.number("plain", Channel::PathLength), Some(0.8));
    assert_eq!(a.sample(0.2).number("mark", Channel::PathLength), Some(0.0));
    assert_eq!(a.binding("mark", Channel::PathLength).unwrap().domain(), (0.2, 0.6));

    let json = serde_json::to_string(&a).unwrap();
    let back: Animator = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
    assert!(!serde_json::to_string(a.binding("plain", Channel::PathLength).unwrap())
        .unwrap()
        .contains("remap"));
}
