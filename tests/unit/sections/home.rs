use super::*;
use crate::timeline::channel::Channel;

#[test]
fn manifesto_last_line_stays_visible() {
    let m = manifesto().unwrap();
    let end = m.animator.sample(1.0);
    assert_eq!(end.number("line-7", Channel::Opacity), Some(1.0));
    assert_eq!(end.number("line-7", Channel::Scale), Some(1.0));
    assert_eq!(end.number("line-7", Channel::Blur), Some(0.0));
    for i in 0..7 {
        let el = format!("line-{i}");
        assert_eq!(end.number(&el, Channel::Opacity), Some(0.0), "{el}");
    }
}

#[test]
fn manifesto_lines_peak_in_their_slice() {
    let m = manifesto().unwrap();
    let seg = 1.0 / 8.0;
    for i in 0..8 {
        let peak = i as f64 * seg + seg * 0.5;
        let frame = m.animator.sample(peak);
        let el = format!("line-{i}");
        assert_eq!(frame.number(&el, Channel::Opacity), Some(1.0), "{el}");
        assert_eq!(frame.number(&el, Channel::TranslateY), Some(0.0), "{el}");
        assert_eq!(frame.number(&el, Channel::Blur), Some(0.0), "{el}");
    }
}

#[test]
fn manifesto_line_fades_out_after_its_slice() {
    let [opacity, y, scale, blur] = manifesto_line_tables(2, 8);
    assert_eq!(opacity.0, Channel::Opacity);
    assert_eq!(opacity.2.last(), Some(&0.0));
    assert_eq!(y.2.last(), Some(&-50.0));
    assert_eq!(scale.2.last(), Some(&0.95));
    assert_eq!(blur.2.last(), Some(&5.0));
    assert_eq!(opacity.1.first(), Some(&0.25));
    assert_eq!(opacity.1.last(), Some(&0.375));
}

#[test]
fn manifesto_has_one_element_per_line() {
    let m = manifesto().unwrap();
    let lines = m
        .animator
        .elements()
        .into_iter()
        .filter(|e| e.starts_with("line-"))
        .count();
    assert_eq!(lines, MANIFESTO_LINES.len());
}

#[test]
fn hero_fades_out_by_half_progress() {
    let hero = hero().unwrap();
    let f = hero.animator.sample(0.25);
    assert_eq!(f.number("content", Channel::Opacity), Some(0.5));
    assert_eq!(f.number("content", Channel::TranslateY), Some(50.0));
    let gone = hero.animator.sample(0.9);
    assert_eq!(gone.number("content", Channel::Opacity), Some(0.0));
    assert_eq!(gone.number("content", Channel::Scale), Some(0.8));
}

#[test]
fn navigation_backdrop_tracks_pixels() {
    let nav = navigation().unwrap();
    assert_eq!(
        nav.animator.sample(0.0).css()["nav"],
        "backdrop-filter: blur(0px); background-color: rgba(0, 0, 0, 0)"
    );
    assert_eq!(
        nav.animator.sample(400.0).css()["nav"],
        "backdrop-filter: blur(10px); background-color: rgba(0, 0, 0, 0.8)"
    );
}

#[test]
fn projects_rail_moves_in_percent() {
    let p = projects().unwrap();
    assert_eq!(
        p.animator.sample(0.5).value("track", Channel::TranslateX),
        Some(&ChannelValue::percent(-30.0))
    );
}

#[test]
fn infra_q_preview_untilts() {
    let s = infra_q_preview().unwrap();
    let f = s.animator.sample(0.5);
    assert_eq!(f.number("dashboard", Channel::RotateX), Some(0.0));
    assert_eq!(f.number("dashboard", Channel::Scale), Some(1.0));
    assert_eq!(f.number("dashboard", Channel::Opacity), Some(1.0));
}

#[test]
fn current_line_follows_raw_progress() {
    assert_eq!(manifesto_current_line(0.0), 0);
    assert_eq!(manifesto_current_line(-0.3), 0);
    assert_eq!(manifesto_current_line(f64::NAN), 0);
    assert_eq!(manifesto_current_line(0.124), 0);
    assert_eq!(manifesto_current_line(0.125), 1);
    assert_eq!(manifesto_current_line(0.5), 4);
    assert_eq!(manifesto_current_line(0.99), 7);
    assert_eq!(manifesto_current_line(1.0), 7);
}

#[test]
fn dots_fill_up_to_current_line() {
    let dots = manifesto_dots(2);
    assert_eq!(dots.len(), MANIFESTO_LINES.len());
    assert_eq!(dots[0].number(Channel::ScaleX), Some(1.0));
    assert_eq!(dots[2].number(Channel::ScaleX), Some(1.5));
    assert_eq!(
        dots[2].get(Channel::BackgroundColor),
        Some(&ChannelValue::Color(Rgba8::WHITE))
    );
    assert_eq!(
        dots[3].get(Channel::BackgroundColor),
        Some(&ChannelValue::Color(Rgba8::WHITE.with_alpha(0.2)))
    );
}

#[test]
fn manifesto_background_moves_with_progress() {
    let m = manifesto().unwrap();
    let mid = m.animator.sample(0.5);
    assert_eq!(mid.number("orb-blue", Channel::TranslateY), Some(0.0));
    assert_eq!(mid.number("orb-blue", Channel::Scale), Some(1.2));
    assert_eq!(mid.number("orb-violet", Channel::Scale), Some(0.8));
    assert_eq!(mid.number("orb-green", Channel::TranslateY), Some(50.0));
    assert_eq!(mid.number("rule-bottom", Channel::Opacity), Some(0.5));
    assert_eq!(mid.number("rule-bottom", Channel::ScaleX), Some(1.0));
    assert_eq!(mid.number("accents-left", Channel::TranslateY), Some(0.0));
    assert_eq!(mid.number("bracket-bottom", Channel::Opacity), Some(0.0));

    let end = m.animator.sample(1.0);
    assert_eq!(end.number("square-2", Channel::Rotate), Some(300.0));
    assert_eq!(end.number("dot-3", Channel::Scale), Some(1.0));
    assert_eq!(end.number("dot-3", Channel::Opacity), Some(0.4));
    assert_eq!(end.number("bracket-bottom", Channel::Scale), Some(1.0));
    assert_eq!(end.number("rule-bottom", Channel::Opacity), Some(0.0));
}
