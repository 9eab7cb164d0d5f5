use crate::color::rgba::Color;
use crate::foundation::core::{Affine, Canvas, Point};
use crate::foundation::error::{RevealError, RevealResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::{DrawSurface, GradientLine};

/// Raster [`DrawSurface`] powered by `vello_cpu`.
///
/// Usage per frame: [`CpuSurface::begin_frame`], any number of draw calls, then
/// [`CpuSurface::finish_frame`] to read back premultiplied pixels.
pub struct CpuSurface {
    width: u16,
    height: u16,
    background: Color,
    transform: Affine,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas, background: Color) -> RevealResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| RevealError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| RevealError::render("surface height exceeds u16"))?;

        let mut surface = Self {
            width,
            height,
            background,
            transform: Affine::IDENTITY,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
        };
        surface.begin_frame();
        Ok(surface)
    }

    /// Path-space to pixel-space mapping applied to every subsequent draw call.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Drop pending draw calls and paint the background.
    pub fn begin_frame(&mut self) {
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let [r, g, b, a] = self.background.to_rgba8();
        if a > 0 {
            self.ctx
                .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
    }

    /// Rasterize everything drawn since [`CpuSurface::begin_frame`].
    pub fn finish_frame(&mut self) -> FrameRGBA {
        clear_pixmap_to_transparent(&mut self.pixmap);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl DrawSurface for CpuSurface {
    fn draw_gradient_line(&mut self, line: &GradientLine) {
        let start = point_to_cpu(line.start);
        let end = point_to_cpu(line.end);

        let gradient = vello_cpu::peniko::Gradient::new_linear(start, end)
            .with_stops([color_to_cpu(line.start_color), color_to_cpu(line.end_color)]);

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(start);
        path.line_to(end);

        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(line.width).with_caps(vello_cpu::kurbo::Cap::Round),
        );
        self.ctx.set_paint(gradient);
        self.ctx.stroke_path(&path);
    }
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
