use std::path::Path;

use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::{
        core::{Canvas, Rgba8},
        error::{ScrollError, ScrollResult},
    },
    particles::field::ParticleField,
};

/// A rasterised frame, row-major RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> ScrollResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| ScrollError::evaluation(format!("write png '{}': {e}", path.display())))
    }
}

/// Render every particle of `field` at `t_secs` as a filled disc.
#[tracing::instrument(level = "debug", skip(field), fields(kind = %field.spec.kind))]
pub fn rasterize_field(
    field: &ParticleField,
    t_secs: f64,
    canvas: Canvas,
    background: Rgba8,
) -> ScrollResult<FrameRGBA> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| ScrollError::evaluation("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| ScrollError::evaluation("canvas height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(ScrollError::evaluation("canvas must be non-empty"));
    }

    let (w, h) = (f64::from(width), f64::from(height));
    let mut ctx = vello_cpu::RenderContext::new(width, height);

    if background.a > 0 {
        ctx.set_paint(cpu_color(background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    }

    let color = field.spec.color;
    for state in field.sample(t_secs) {
        if state.opacity <= 0.0 || state.radius_px <= 0.0 {
            continue;
        }
        let p = state.position_in(w, h);
        let disc = vello_cpu::kurbo::Circle::new((p.x, p.y), state.radius_px).to_path(0.1);
        ctx.set_paint(cpu_color(color.with_alpha(color.alpha_f64() * state.opacity)));
        ctx.fill_path(&disc);
    }

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: u32::from(width),
        height: u32::from(height),
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
#[path = "../../tests/unit/particles/raster.rs"]
mod tests;
