use serde::{Deserialize, Serialize};

use crate::core::CanvasSize;

/// On-screen bounds of a displayed chart, in client (page or widget) units.
///
/// Charts are drawn with a fixed aspect ratio and scaled to fit these bounds,
/// centred on the spare axis (`xMidYMid meet`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Uniform scale and letterbox offset mapping canvas units onto a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFit {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SurfaceRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns `None` when either size is degenerate.
    #[must_use]
    pub fn fit(self, canvas: CanvasSize) -> Option<SurfaceFit> {
        let usable = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.left.is_finite()
            && self.top.is_finite();
        if !usable || !canvas.is_valid() {
            return None;
        }
        let scale = (self.width / canvas.width).min(self.height / canvas.height);
        Some(SurfaceFit {
            scale,
            offset_x: self.left + (self.width - canvas.width * scale) / 2.0,
            offset_y: self.top + (self.height - canvas.height * scale) / 2.0,
        })
    }

    /// Maps a client-space pointer position into canvas units.
    #[must_use]
    pub fn to_canvas(self, client_x: f64, client_y: f64, canvas: CanvasSize) -> Option<(f64, f64)> {
        let fit = self.fit(canvas)?;
        Some(fit.to_canvas(client_x, client_y))
    }
}

impl SurfaceFit {
    #[must_use]
    pub fn to_canvas(self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            (client_x - self.offset_x) / self.scale,
            (client_y - self.offset_y) / self.scale,
        )
    }

    #[must_use]
    pub fn to_client(self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        (
            canvas_x * self.scale + self.offset_x,
            canvas_y * self.scale + self.offset_y,
        )
    }
}
