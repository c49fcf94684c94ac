mod hit_map;
mod surface;

pub use hit_map::GlyphHitMap;
pub use surface::{SurfaceFit, SurfaceRect};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

/// Hover state owned exclusively by [`HoverController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub hovered: Option<usize>,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            hovered: None,
            pointer_x: 0.0,
            pointer_y: 0.0,
        }
    }
}

/// When a hovered glyph stops being hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverRelease {
    /// Only leaving the whole surface clears hover; gaps keep it.
    #[default]
    SurfaceLeave,
    /// Leaving the hovered glyph's box also clears hover.
    GlyphLeave,
}

/// Tooltip footprint and placement rule.
///
/// The tooltip body is drawn entirely above its anchor, pointing down at the
/// hovered glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub width: f64,
    pub height: f64,
    /// Distance between the pointer and the anchor (tooltip tip).
    pub upward_offset: f64,
    /// Minimum gap kept between the tooltip body and the surface's side edges.
    #[serde(default)]
    pub edge_margin: f64,
}

impl TooltipPlacement {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            upward_offset: 10.0,
            edge_margin: 0.0,
        }
    }

    #[must_use]
    pub fn with_upward_offset(mut self, upward_offset: f64) -> Self {
        self.upward_offset = upward_offset;
        self
    }

    #[must_use]
    pub fn with_edge_margin(mut self, edge_margin: f64) -> Self {
        self.edge_margin = edge_margin;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "tooltip width must be finite and > 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "tooltip height must be finite and > 0".to_owned(),
            ));
        }
        if !self.upward_offset.is_finite() || !self.edge_margin.is_finite() || self.edge_margin < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "tooltip offsets must be finite and edge margin >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Anchor for a pointer position: x clamped so the full footprint stays
    /// within `[0, surface_width]`, y lifted by `upward_offset`.
    #[must_use]
    pub fn anchor(self, pointer_x: f64, pointer_y: f64, surface_width: f64) -> (f64, f64) {
        (
            clamp_tooltip_x(pointer_x, self.width, surface_width, self.edge_margin),
            pointer_y - self.upward_offset,
        )
    }
}

/// `clamp(pointer_x, tw/2 + margin, surface_width - tw/2 - margin)`.
///
/// A surface too narrow for the footprint centres the tooltip on the surface.
#[must_use]
pub fn clamp_tooltip_x(
    pointer_x: f64,
    tooltip_width: f64,
    surface_width: f64,
    edge_margin: f64,
) -> f64 {
    let half = tooltip_width / 2.0;
    let low = half + edge_margin;
    let high = surface_width - half - edge_margin;
    if low > high {
        return surface_width / 2.0;
    }
    pointer_x.max(low).min(high)
}

/// Resolved tooltip for the current hover state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub visible: bool,
    pub glyph: Option<usize>,
    pub lines: Vec<String>,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Tooltip {
    #[must_use]
    pub fn hidden(anchor_x: f64, anchor_y: f64, placement: TooltipPlacement) -> Self {
        Self {
            visible: false,
            glyph: None,
            lines: Vec::new(),
            anchor_x,
            anchor_y,
            width: placement.width,
            height: placement.height,
        }
    }

    /// All label lines on one line, separated by an em dash.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join(" \u{2014} ")
    }

    /// Headline (first line), empty when hidden.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// Left edge of the tooltip body.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.anchor_x - self.width / 2.0
    }

    /// Top edge of the tooltip body; the body ends at `anchor_y`.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.anchor_y - self.height
    }
}

/// Tracks which single glyph is hovered and where the pointer last was.
///
/// Category-agnostic: the owning chart supplies label text. Events are applied
/// strictly in delivery order; each handler is O(1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverController {
    state: HoverState,
    glyph_count: usize,
    surface_width: f64,
    placement: TooltipPlacement,
}

impl HoverController {
    pub fn new(
        glyph_count: usize,
        surface_width: f64,
        placement: TooltipPlacement,
    ) -> ChartResult<Self> {
        let placement = placement.validate()?;
        validate_surface_width(surface_width)?;
        Ok(Self {
            state: HoverState::default(),
            glyph_count,
            surface_width,
            placement,
        })
    }

    #[must_use]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.state.hovered
    }

    #[must_use]
    pub fn pointer(&self) -> (f64, f64) {
        (self.state.pointer_x, self.state.pointer_y)
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    #[must_use]
    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    #[must_use]
    pub fn placement(&self) -> TooltipPlacement {
        self.placement
    }

    /// Makes `flat_index` the hovered glyph.
    ///
    /// Indices outside the current glyph range (stale events after a dataset
    /// swap) are discarded. Returns `true` when the hovered glyph changed.
    pub fn on_glyph_enter(&mut self, flat_index: usize) -> bool {
        if flat_index >= self.glyph_count {
            debug!(
                flat_index,
                glyph_count = self.glyph_count,
                "discarding out-of-range glyph enter"
            );
            return false;
        }
        let changed = self.state.hovered != Some(flat_index);
        self.state.hovered = Some(flat_index);
        if changed {
            trace!(flat_index, "glyph hovered");
        }
        changed
    }

    /// Clears hover if `flat_index` is the hovered glyph; stale leaves for other
    /// glyphs are ignored. Returns `true` when hover was cleared.
    pub fn on_glyph_leave(&mut self, flat_index: usize) -> bool {
        if self.state.hovered != Some(flat_index) {
            return false;
        }
        self.state.hovered = None;
        trace!(flat_index, "glyph left");
        true
    }

    /// Clears the hovered glyph. Returns `true` when a glyph was hovered.
    pub fn on_surface_leave(&mut self) -> bool {
        let was_hovered = self.state.hovered.take().is_some();
        if was_hovered {
            trace!("hover cleared");
        }
        was_hovered
    }

    /// Records the pointer position; never changes the hovered glyph.
    pub fn on_surface_move(&mut self, pointer_x: f64, pointer_y: f64) {
        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            debug!(pointer_x, pointer_y, "ignoring non-finite pointer position");
            return;
        }
        self.state.pointer_x = pointer_x;
        self.state.pointer_y = pointer_y;
    }

    /// Re-targets the controller at a new layout and clears hover state.
    pub fn reset(&mut self, glyph_count: usize, surface_width: f64) -> ChartResult<()> {
        validate_surface_width(surface_width)?;
        self.glyph_count = glyph_count;
        self.surface_width = surface_width;
        self.state = HoverState::default();
        Ok(())
    }

    pub fn set_placement(&mut self, placement: TooltipPlacement) -> ChartResult<()> {
        self.placement = placement.validate()?;
        Ok(())
    }

    /// `true` for every glyph except the hovered one while any glyph is hovered.
    #[must_use]
    pub fn is_dimmed(&self, flat_index: usize) -> bool {
        self.state
            .hovered
            .is_some_and(|hovered| hovered != flat_index)
    }

    #[must_use]
    pub fn opacity_for(&self, flat_index: usize, dim_opacity: f64) -> f64 {
        if self.is_dimmed(flat_index) {
            dim_opacity
        } else {
            1.0
        }
    }

    /// Clamped tooltip anchor for the last pointer position.
    #[must_use]
    pub fn anchor(&self) -> (f64, f64) {
        self.placement
            .anchor(self.state.pointer_x, self.state.pointer_y, self.surface_width)
    }

    /// Builds the tooltip, asking `label` for the hovered glyph's lines.
    pub fn current_tooltip<F>(&self, label: F) -> Tooltip
    where
        F: FnOnce(usize) -> Vec<String>,
    {
        let (anchor_x, anchor_y) = self.anchor();
        match self.state.hovered {
            Some(flat_index) => Tooltip {
                visible: true,
                glyph: Some(flat_index),
                lines: label(flat_index),
                anchor_x,
                anchor_y,
                width: self.placement.width,
                height: self.placement.height,
            },
            None => Tooltip::hidden(anchor_x, anchor_y, self.placement),
        }
    }
}

fn validate_surface_width(surface_width: f64) -> ChartResult<()> {
    // Zero is a valid degenerate surface (empty dataset, no margins).
    if !surface_width.is_finite() || surface_width < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "surface width must be finite and >= 0, got {surface_width}"
        )));
    }
    Ok(())
}
