use super::*;
use crate::particles::field::{FieldKind, Span};

fn single_star() -> ParticleField {
    let mut spec = FieldKind::Starfield.preset();
    spec.count = 1;
    spec.size_px = Span::fixed(20.0);
    spec.delay_secs = Span::fixed(0.0);
    let mut field = ParticleField::generate(spec, 5).unwrap();
    field.particles[0].origin = crate::foundation::core::Point::new(50.0, 50.0);
    field
}

#[test]
fn background_fills_canvas() {
    let mut field = single_star();
    field.particles.clear();
    let frame = rasterize_field(
        &field,
        0.0,
        Canvas {
            width: 8,
            height: 4,
        },
        Rgba8::rgb(18, 20, 28),
    )
    .unwrap();
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert_eq!(frame.pixel(0, 0), Some([18, 20, 28, 255]));
    assert_eq!(frame.pixel(7, 3), Some([18, 20, 28, 255]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn star_lights_up_centre() {
    let field = single_star();
    let canvas = Canvas {
        width: 64,
        height: 64,
    };
    let frame = rasterize_field(&field, 0.0, canvas, Rgba8::BLACK).unwrap();
    let centre = frame.pixel(32, 32).unwrap();
    let corner = frame.pixel(0, 0).unwrap();
    assert_eq!(corner, [0, 0, 0, 255]);
    assert!(centre[0] > 20, "centre {centre:?}");
}

#[test]
fn empty_canvas_is_an_error() {
    let field = single_star();
    let err = rasterize_field(
        &field,
        0.0,
        Canvas {
            width: 0,
            height: 10,
        },
        Rgba8::BLACK,
    );
    assert!(err.is_err());
}

#[test]
fn straight_alpha_unpremultiplies() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight(), vec![128, 0, 0, 128]);
}
