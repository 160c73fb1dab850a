use super::*;

#[test]
fn parallax_scales_with_speed() {
    let a = parallax("card", 0.5).unwrap();
    assert_eq!(a.sample(0.0).number("card", Channel::TranslateY), Some(50.0));
    assert_eq!(a.sample(1.0).number("card", Channel::TranslateY), Some(-50.0));
    assert_eq!(a.sample(0.5).number("card", Channel::Scale), Some(1.0));
    assert_eq!(a.sample(0.1).number("card", Channel::Opacity), Some(0.5));
}

#[test]
fn wrapper_direction_flips_travel() {
    let up = wrapper("w", 1.0, ParallaxDirection::Up).unwrap();
    let down = wrapper("w", 1.0, ParallaxDirection::Down).unwrap();
    assert_eq!(up.sample(0.0).number("w", Channel::TranslateY), Some(-100.0));
    assert_eq!(down.sample(0.0).number("w", Channel::TranslateY), Some(100.0));
}

#[test]
fn zero_depth_layer_is_static() {
    let l = layer("bg", 0.0).unwrap();
    for p in [0.0, 0.3, 1.0] {
        let f = l.sample(p);
        assert_eq!(f.number("bg", Channel::TranslateY), Some(0.0));
        assert_eq!(f.number("bg", Channel::Scale), Some(1.0));
    }
}

#[test]
fn scene_layer_grows_with_depth() {
    let l = scene_layer("far", 0.5).unwrap();
    let f = l.sample(1.0);
    assert_eq!(f.number("far", Channel::TranslateY), Some(-100.0));
    let scale = f.number("far", Channel::Scale).unwrap();
    assert!((scale - 1.05).abs() < 1e-12);
}
