use cairo::{Context, Format, ImageSurface};
use kurbo::{BezPath, PathEl};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FillRule, FontWeight, FrameLayer, GlyphPrimitive, PartTone, RectPrimitive, RenderFrame,
    Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub glyphs_drawn: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint into a caller-owned Cairo context, such as a GTK
/// `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> ChartResult<()>;
}

/// Cairo + PangoCairo backend.
///
/// `Renderer::render` paints into an owned image surface sized to the frame;
/// `CairoContextRenderer` paints into an external context in canvas units.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: f64::from(width),
                height: f64::from(height),
            });
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            background: Color::WHITE,
            font_family: "Montserrat".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the last rendered surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.background, 1.0);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in frame.layers() {
            self.paint_layer(context, layer, &mut stats)?;
        }
        self.last_stats = stats;
        Ok(())
    }

    fn paint_layer(
        &self,
        context: &Context,
        layer: &FrameLayer,
        stats: &mut CairoRenderStats,
    ) -> ChartResult<()> {
        for glyph in &layer.glyphs {
            paint_glyph(context, glyph)?;
            stats.glyphs_drawn += 1;
        }

        for rect in &layer.rects {
            append_rect_path(context, rect);
            if let Some(fill) = rect.fill {
                apply_color(context, fill, rect.opacity);
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            if let Some(stroke) = rect.stroke {
                apply_color(context, stroke, rect.opacity);
                context.set_line_width(rect.stroke_width);
                context
                    .stroke_preserve()
                    .map_err(|err| map_backend_error("failed to stroke rectangle", err))?;
            }
            context.new_path();
            stats.rects_drawn += 1;
        }

        for line in &layer.lines {
            apply_color(context, line.color, 1.0);
            context.set_line_width(line.stroke_width);
            match line.dash {
                Some(pattern) => context.set_dash(&pattern, 0.0),
                None => context.set_dash(&[], 0.0),
            }
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for polygon in &layer.polygons {
            for (index, (x, y)) in polygon.points.iter().enumerate() {
                if index == 0 {
                    context.move_to(*x, *y);
                } else {
                    context.line_to(*x, *y);
                }
            }
            context.close_path();
            apply_color(context, polygon.fill, 1.0);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            stats.polygons_drawn += 1;
        }

        for text in &layer.texts {
            let layout = pangocairo::functions::create_layout(context);
            let mut font = FontDescription::new();
            font.set_family(&self.font_family);
            font.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
            font.set_weight(pango_weight(text.weight));
            layout.set_font_description(Some(&font));
            layout.set_text(&text.text);

            let (text_width, _) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            apply_color(context, text.color, 1.0);
            context.move_to(x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn paint_glyph(context: &Context, glyph: &GlyphPrimitive) -> ChartResult<()> {
    context.set_fill_rule(match glyph.shape.fill_rule() {
        FillRule::NonZero => cairo::FillRule::Winding,
        FillRule::EvenOdd => cairo::FillRule::EvenOdd,
    });
    for part in glyph
        .shape
        .paths_in(glyph.x, glyph.y, glyph.width, glyph.height)?
    {
        append_bez_path(context, &part.path);
        let color = match part.tone {
            PartTone::Fill => glyph.color,
            PartTone::Knockout => Color::WHITE,
        };
        apply_color(context, color, glyph.opacity);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill glyph", err))?;
    }
    context.set_fill_rule(cairo::FillRule::Winding);
    Ok(())
}

fn append_bez_path(context: &Context, path: &BezPath) {
    let mut current = (0.0, 0.0);
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => {
                context.move_to(p.x, p.y);
                current = (p.x, p.y);
            }
            PathEl::LineTo(p) => {
                context.line_to(p.x, p.y);
                current = (p.x, p.y);
            }
            PathEl::QuadTo(control, end) => {
                // Cairo has no quadratic segments; elevate to cubic.
                let c1 = (
                    current.0 + 2.0 / 3.0 * (control.x - current.0),
                    current.1 + 2.0 / 3.0 * (control.y - current.1),
                );
                let c2 = (
                    end.x + 2.0 / 3.0 * (control.x - end.x),
                    end.y + 2.0 / 3.0 * (control.y - end.y),
                );
                context.curve_to(c1.0, c1.1, c2.0, c2.1, end.x, end.y);
                current = (end.x, end.y);
            }
            PathEl::CurveTo(c1, c2, end) => {
                context.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
                current = (end.x, end.y);
            }
            PathEl::ClosePath => context.close_path(),
        }
    }
}

fn apply_color(context: &Context, color: Color, opacity: f64) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha * opacity);
}

fn pango_weight(weight: FontWeight) -> pango::Weight {
    match weight {
        FontWeight::Normal => pango::Weight::Normal,
        FontWeight::Medium => pango::Weight::Medium,
        FontWeight::SemiBold => pango::Weight::Semibold,
        FontWeight::Bold => pango::Weight::Bold,
    }
}

fn append_rect_path(context: &Context, rect: &RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
