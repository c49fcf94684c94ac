use kurbo::{Affine, BezPath, Circle, RoundedRect, Shape};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Flattening tolerance for circles and rounded corners, in design units.
const CURVE_TOLERANCE: f64 = 0.1;

const STANDING_PERSON_BODY: &str = "M295.71,480.19l-6.69,77.38c-.83,9.62-8.89,17.01-18.55,17.01h0c-10.28,0-18.62-8.33-18.62-18.62v-180.99c0-1.53-1.92-2.21-2.88-1.01l-35.64,44.41c-4.48,5.59-12.42,6.97-18.53,3.22h0c-6.71-4.11-8.8-12.88-4.68-19.58,10.47-17,29.28-47.32,38.54-60.7,13.25-19.13,34.59-23.18,47.46-23.18,12.88,0,33.85,0,46.73,0,12.88,0,34.22,4.05,47.46,23.18,9.27,13.39,28.08,43.7,38.54,60.7,4.12,6.7,2.03,15.47-4.68,19.58h0c-6.11,3.74-14.04,2.36-18.53-3.22l-35.64-44.41c-.96-1.19-2.88-.52-2.88,1.01v180.99c0,10.28-8.33,18.62-18.62,18.62h0c-9.66,0-17.71-7.39-18.55-17.01l-6.69-77.38c-.17-1.97-1.82-3.48-3.8-3.48h0c-1.98,0-3.63,1.51-3.8,3.48Z";

const FIGURE_OUTLINE: &str = "M410.79,461.57s-.37,22.84-24.34,22.86c-23.45.02-23.45-21.69-23.45-21.69v-128.04c0-16.71.07-20.7-4.25-20.7s-3.35,14.72-3.35,26.3c0,21.38-.4,323.75-.4,391.7,0,11.33-15.61,33.15-32.6,33.15-25.5,0-36.69-22.96-36.69-33.51v-178.38c0-15.37,1.43-23.78-6.1-25.01-7.53,1.23-6.1,9.64-6.1,25.01v178.38c0,10.56-11.19,33.51-36.69,33.51-16.99,0-32.6-21.83-32.6-33.15,0-67.95-.4-370.32-.4-391.7,0-11.58,1-26.3-3.35-26.3s-4.25,3.99-4.25,20.7v128.04s0,21.71-23.45,21.69c-23.96-.02-24.34-22.86-24.34-22.86,0,0-.62-137.44.55-174.93,2.18-70.51,55.67-84.94,76.37-85.25,35.82-.55,51.26-.4,54.26-.41,3.01,0,18.44-.14,54.26.41,20.7.32,74.19,14.74,76.38,85.25,1.17,37.49.54,174.93.54,174.93ZM279.62,61.24c-35.43,0-64.15,28.72-64.15,64.15s28.72,64.15,64.15,64.15,64.15-28.72,64.15-64.15-28.72-64.15-64.15-64.15Z";

/// Pictorial glyph artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphShape {
    /// Head and raised-arm body; admissions/deaths grid.
    StandingPerson,
    /// Single even-odd silhouette; population grid.
    Figure,
    /// Bed with a lying patient; pictorial bars.
    HospitalBed,
}

/// Design-space rectangle a shape's artwork is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

/// How a part is painted: in the glyph color or knocked out in white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartTone {
    Fill,
    Knockout,
}

/// One painted part of a placed glyph, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPath {
    pub path: BezPath,
    pub tone: PartTone,
}

#[derive(Debug, Clone, Copy)]
enum PartGeometry {
    Svg(&'static str),
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64, radius: f64 },
}

impl PartGeometry {
    fn to_design_path(self) -> ChartResult<BezPath> {
        match self {
            Self::Svg(data) => BezPath::from_svg(data).map_err(|err| {
                ChartError::InvalidData(format!("failed to parse glyph path data: {err}"))
            }),
            Self::Circle { cx, cy, r } => Ok(Circle::new((cx, cy), r).to_path(CURVE_TOLERANCE)),
            Self::Rect {
                x,
                y,
                width,
                height,
                radius,
            } => Ok(RoundedRect::new(x, y, x + width, y + height, radius).to_path(CURVE_TOLERANCE)),
        }
    }
}

const fn rect(x: f64, y: f64, width: f64, height: f64, radius: f64) -> PartGeometry {
    PartGeometry::Rect {
        x,
        y,
        width,
        height,
        radius,
    }
}

const STANDING_PERSON_PARTS: &[(PartGeometry, PartTone)] = &[
    (
        PartGeometry::Circle {
            cx: 299.51,
            cy: 254.51,
            r: 55.22,
        },
        PartTone::Fill,
    ),
    (PartGeometry::Svg(STANDING_PERSON_BODY), PartTone::Fill),
];

const FIGURE_PARTS: &[(PartGeometry, PartTone)] = &[(PartGeometry::Svg(FIGURE_OUTLINE), PartTone::Fill)];

const HOSPITAL_BED_PARTS: &[(PartGeometry, PartTone)] = &[
    // frame
    (rect(20.0, 45.0, 60.0, 3.0, 1.0), PartTone::Fill),
    (rect(25.0, 48.0, 50.0, 2.0, 0.0), PartTone::Fill),
    (rect(18.0, 38.0, 3.0, 15.0, 1.0), PartTone::Fill),
    (rect(79.0, 41.0, 3.0, 12.0, 1.0), PartTone::Fill),
    // wheels
    (
        PartGeometry::Circle {
            cx: 25.0,
            cy: 55.0,
            r: 2.5,
        },
        PartTone::Fill,
    ),
    (
        PartGeometry::Circle {
            cx: 75.0,
            cy: 55.0,
            r: 2.5,
        },
        PartTone::Fill,
    ),
    // patient
    (
        PartGeometry::Circle {
            cx: 31.0,
            cy: 35.0,
            r: 4.0,
        },
        PartTone::Fill,
    ),
    (
        PartGeometry::Svg("M22 43 L32 38 L42 43 L42 45 L22 45 Z"),
        PartTone::Fill,
    ),
    (
        PartGeometry::Svg("M40 38 L78 40 L78 45 L40 45 Z"),
        PartTone::Fill,
    ),
    (rect(36.0, 41.0, 12.0, 3.0, 1.5), PartTone::Knockout),
];

impl GlyphShape {
    #[must_use]
    pub fn view_box(self) -> ShapeViewBox {
        match self {
            Self::StandingPerson => ShapeViewBox {
                x: 180.0,
                y: 190.0,
                width: 240.0,
                height: 410.0,
            },
            Self::Figure => ShapeViewBox {
                x: 148.0,
                y: 50.0,
                width: 270.0,
                height: 720.0,
            },
            Self::HospitalBed => ShapeViewBox {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 100.0,
            },
        }
    }

    #[must_use]
    pub fn fill_rule(self) -> FillRule {
        match self {
            Self::Figure => FillRule::EvenOdd,
            Self::StandingPerson | Self::HospitalBed => FillRule::NonZero,
        }
    }

    fn parts(self) -> &'static [(PartGeometry, PartTone)] {
        match self {
            Self::StandingPerson => STANDING_PERSON_PARTS,
            Self::Figure => FIGURE_PARTS,
            Self::HospitalBed => HOSPITAL_BED_PARTS,
        }
    }

    /// Maps the view box into a glyph box, uniformly scaled and centred
    /// (SVG `xMidYMid meet`).
    #[must_use]
    pub fn placement(self, x: f64, y: f64, width: f64, height: f64) -> Affine {
        let view_box = self.view_box();
        let scale = (width / view_box.width).min(height / view_box.height);
        let offset_x = x + (width - view_box.width * scale) / 2.0 - view_box.x * scale;
        let offset_y = y + (height - view_box.height * scale) / 2.0 - view_box.y * scale;
        Affine::translate((offset_x, offset_y)) * Affine::scale(scale)
    }

    /// Artwork placed into the box `(x, y, width, height)` in paint order.
    pub fn paths_in(self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<Vec<GlyphPath>> {
        let transform = self.placement(x, y, width, height);
        self.parts()
            .iter()
            .map(|(geometry, tone)| {
                let mut path = geometry.to_design_path()?;
                path.apply_affine(transform);
                Ok(GlyphPath { path, tone: *tone })
            })
            .collect()
    }
}
