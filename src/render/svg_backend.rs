use crate::error::ChartResult;
use crate::render::{
    Color, FillRule, FrameLayer, PartTone, RenderFrame, Renderer, TextHAlign,
};

const DEFAULT_FONT_FAMILY: &str = "Montserrat, sans-serif";

/// Serializes frames into standalone scalable SVG documents.
///
/// The document carries a `viewBox` equal to the canvas and `width="100%"`,
/// so it keeps its aspect ratio when the host resizes it.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    font_family: String,
    last_document: Option<String>,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            last_document: None,
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Document produced by the last successful `render`.
    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn take_document(&mut self) -> Option<String> {
        self.last_document.take()
    }

    /// Renders a frame straight into a string.
    pub fn to_svg_string(&self, frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;

        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="100%" preserveAspectRatio="xMidYMid meet" font-family="{}" role="img">"#,
            num(frame.canvas.width),
            num(frame.canvas.height),
            escape_xml(&self.font_family)
        ));
        out.push('\n');
        if let Some(title) = &frame.title {
            out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
        }
        if let Some(description) = &frame.description {
            out.push_str(&format!("<desc>{}</desc>\n", escape_xml(description)));
        }

        write_layer(&mut out, &frame.scene, "scene")?;
        if !frame.overlay.is_empty() {
            write_layer(&mut out, &frame.overlay, "tooltip")?;
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let document = self.to_svg_string(frame)?;
        self.last_document = Some(document);
        Ok(())
    }
}

fn write_layer(out: &mut String, layer: &FrameLayer, class: &str) -> ChartResult<()> {
    out.push_str(&format!(r#"<g class="{class}">"#));
    out.push('\n');

    for glyph in &layer.glyphs {
        match glyph.flat_index {
            Some(flat_index) => out.push_str(&format!(
                r#"<g data-glyph="{flat_index}" opacity="{}">"#,
                num(glyph.opacity)
            )),
            None => out.push_str(&format!(r#"<g opacity="{}">"#, num(glyph.opacity))),
        }
        let fill_rule = match glyph.shape.fill_rule() {
            FillRule::NonZero => "",
            FillRule::EvenOdd => r#" fill-rule="evenodd""#,
        };
        for part in glyph
            .shape
            .paths_in(glyph.x, glyph.y, glyph.width, glyph.height)?
        {
            let color = match part.tone {
                PartTone::Fill => glyph.color,
                PartTone::Knockout => Color::WHITE,
            };
            out.push_str(&format!(r#"<path d="{}""#, part.path.to_svg()));
            write_paint_attr(out, "fill", color);
            out.push_str(fill_rule);
            out.push_str("/>");
        }
        out.push_str("</g>\n");
    }

    for rect in &layer.rects {
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height)
        ));
        if rect.corner_radius > 0.0 {
            out.push_str(&format!(r#" rx="{}""#, num(rect.corner_radius)));
        }
        match rect.fill {
            Some(fill) => write_paint_attr(out, "fill", fill),
            None => out.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = rect.stroke {
            write_paint_attr(out, "stroke", stroke);
            out.push_str(&format!(r#" stroke-width="{}""#, num(rect.stroke_width)));
        }
        if rect.opacity < 1.0 {
            out.push_str(&format!(r#" opacity="{}""#, num(rect.opacity)));
        }
        out.push_str("/>\n");
    }

    for line in &layer.lines {
        out.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            num(line.stroke_width)
        ));
        write_paint_attr(out, "stroke", line.color);
        if let Some([dash, gap]) = line.dash {
            out.push_str(&format!(r#" stroke-dasharray="{},{}""#, num(dash), num(gap)));
        }
        out.push_str("/>\n");
    }

    for polygon in &layer.polygons {
        let points = polygon
            .points
            .iter()
            .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(r#"<polygon points="{points}""#));
        write_paint_attr(out, "fill", polygon.fill);
        out.push_str("/>\n");
    }

    for text in &layer.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" text-anchor="{anchor}""#,
            num(text.x),
            num(text.y),
            num(text.font_size_px),
            text.weight.css_weight()
        ));
        write_paint_attr(out, "fill", text.color);
        out.push('>');
        out.push_str(&escape_xml(&text.text));
        out.push_str("</text>\n");
    }

    out.push_str("</g>\n");
    Ok(())
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    out.push_str(&format!(r#" {name}="{}""#, color.to_hex()));
    if color.alpha < 1.0 {
        out.push_str(&format!(r#" {name}-opacity="{}""#, num(color.alpha)));
    }
}

/// Two-decimal number without trailing zeros.
fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
