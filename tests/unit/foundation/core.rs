use super::*;

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(0.0, 800.0).is_err());
    assert!(Viewport::new(1024.0, f64::NAN).is_err());
    assert!(Viewport::new(1024.0, 768.0).is_ok());
}

#[test]
fn parses_hex_and_functional_colours() {
    assert_eq!(Rgba8::parse("#0A0F3C").unwrap(), Rgba8::hex(0x0A0F3C));
    assert_eq!(Rgba8::parse("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse("#11223380").unwrap(),
        Rgba8::new(0x11, 0x22, 0x33, 0x80)
    );
    assert_eq!(
        Rgba8::parse("rgba(0, 0, 0, 0.8)").unwrap(),
        Rgba8::new(0, 0, 0, 204)
    );
    assert_eq!(
        Rgba8::parse("rgb(45, 90, 169)").unwrap(),
        Rgba8::rgb(45, 90, 169)
    );
    assert!(Rgba8::parse("hsl(0, 0%, 0%)").is_err());
    assert!(Rgba8::parse("#12").is_err());
}

#[test]
fn css_output_trims_alpha() {
    assert_eq!(Rgba8::new(0, 0, 0, 0).to_css(), "rgba(0, 0, 0, 0)");
    assert_eq!(Rgba8::WHITE.to_css(), "rgba(255, 255, 255, 1)");
    assert_eq!(Rgba8::hex(0x2C5DA9).to_hex(), "#2c5da9");
}

#[test]
fn css_numbers_are_compact() {
    assert_eq!(fmt_css_number(0.5), "0.5");
    assert_eq!(fmt_css_number(12.0), "12");
    assert_eq!(fmt_css_number(-0.0001), "0");
    assert_eq!(fmt_css_number(1.23456), "1.235");
}
