use tracing::{debug, trace};

use crate::core::{CanvasSize, Glyph};
use crate::error::ChartResult;
use crate::extensions::{ChartPlugin, PluginContext, PluginEvent, RevealCapability, RevealKind, RevealRegion};
use crate::interaction::{GlyphHitMap, HoverController, HoverRelease, HoverState, SurfaceRect, Tooltip};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::chart::PictorialChart;
use super::engine_config::ChartEngineConfig;

/// Main facade consumed by host pages and widgets.
///
/// Owns the active chart, its hover controller and hit map, the renderer and
/// the plugin list. All methods run synchronously on the caller's thread;
/// events are applied strictly in call order.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) chart: PictorialChart,
    pub(super) hover: HoverController,
    pub(super) hit_map: GlyphHitMap,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let chart = config.chart.build()?;
        let canvas = chart.canvas_size();
        let hover = HoverController::new(
            chart.glyphs().len(),
            canvas.width,
            chart.tooltip_style().placement,
        )?;
        let hit_map = GlyphHitMap::build(chart.glyphs());
        debug!(
            kind = ?chart.kind(),
            glyph_count = chart.glyphs().len(),
            canvas_width = canvas.width,
            canvas_height = canvas.height,
            "chart engine created"
        );
        Ok(Self {
            renderer,
            config,
            chart,
            hover,
            hit_map,
            plugins: Vec::new(),
        })
    }

    /// Swaps in a new chart and clears hover state.
    ///
    /// On error the current chart stays active.
    pub fn set_chart(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        let chart = config.chart.build()?;
        let canvas = chart.canvas_size();
        let mut hover = self.hover;
        hover.set_placement(chart.tooltip_style().placement)?;
        hover.reset(chart.glyphs().len(), canvas.width)?;

        self.hit_map = GlyphHitMap::build(chart.glyphs());
        self.hover = hover;
        self.chart = chart;
        self.config = config;
        debug!(
            kind = ?self.chart.kind(),
            glyph_count = self.chart.glyphs().len(),
            "chart replaced"
        );
        self.emit_plugin_event(PluginEvent::ChartReplaced {
            glyph_count: self.chart.glyphs().len(),
        });
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn chart(&self) -> &PictorialChart {
        &self.chart
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        self.chart.glyphs()
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.chart.canvas_size()
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    #[must_use]
    pub fn hovered_glyph(&self) -> Option<usize> {
        self.hover.hovered()
    }

    /// Pointer entered a glyph's hit region. Stale indices are ignored.
    pub fn glyph_enter(&mut self, flat_index: usize) -> bool {
        let changed = self.hover.on_glyph_enter(flat_index);
        if changed {
            self.emit_plugin_event(PluginEvent::GlyphEntered { flat_index });
        }
        changed
    }

    /// Pointer left a glyph's hit region; clears hover only for charts that
    /// release on glyph leave.
    pub fn glyph_leave(&mut self, flat_index: usize) -> bool {
        if self.chart.hover_release() != HoverRelease::GlyphLeave {
            return false;
        }
        let cleared = self.hover.on_glyph_leave(flat_index);
        if cleared {
            self.emit_plugin_event(PluginEvent::HoverCleared);
        }
        cleared
    }

    /// Surface-wide pointer move in canvas units.
    ///
    /// Records the pointer, then hit-tests it: landing on a different glyph
    /// counts as entering it. Returns the hovered glyph afterwards.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            trace!(x, y, "ignoring non-finite pointer move");
            return self.hover.hovered();
        }
        self.hover.on_surface_move(x, y);
        self.emit_plugin_event(PluginEvent::PointerMoved { x, y });

        match (self.hit_map.hit(x, y), self.hover.hovered()) {
            (Some(hit), hovered) if hovered != Some(hit) => {
                if let Some(previous) = hovered {
                    self.glyph_leave(previous);
                }
                self.glyph_enter(hit);
            }
            (None, Some(hovered)) => {
                self.glyph_leave(hovered);
            }
            _ => {}
        }
        self.hover.hovered()
    }

    /// Pointer move in client units over a chart shown inside `surface`.
    ///
    /// Returns `None` without touching state when the surface is degenerate.
    pub fn pointer_move_client(
        &mut self,
        client_x: f64,
        client_y: f64,
        surface: SurfaceRect,
    ) -> Option<usize> {
        let (x, y) = surface.to_canvas(client_x, client_y, self.canvas_size())?;
        self.pointer_move(x, y)
    }

    /// Pointer left the whole surface: hover is cleared unconditionally.
    pub fn pointer_leave(&mut self) -> bool {
        let cleared = self.hover.on_surface_leave();
        if cleared {
            self.emit_plugin_event(PluginEvent::HoverCleared);
        }
        self.emit_plugin_event(PluginEvent::PointerLeft);
        cleared
    }

    /// Current tooltip: hovered glyph's label at the clamped anchor.
    #[must_use]
    pub fn tooltip(&self) -> Tooltip {
        let chart = &self.chart;
        self.hover
            .current_tooltip(|flat_index| chart.label_lines(flat_index).unwrap_or_default())
    }

    /// `1.0` for the hovered glyph or when nothing is hovered; the chart's dim
    /// opacity otherwise.
    #[must_use]
    pub fn glyph_opacity(&self, flat_index: usize) -> f64 {
        self.hover.opacity_for(flat_index, self.chart.dim_opacity())
    }

    /// Offers the chart canvas to the page's scroll-reveal layer as one
    /// fade-up region named `region_id`.
    pub fn declare_reveal_regions(&self, region_id: &str, capability: &mut dyn RevealCapability) {
        let canvas = self.canvas_size();
        capability.mark_revealable(RevealRegion {
            id: region_id.to_owned(),
            kind: RevealKind::FadeUpOnEntry,
            x: 0.0,
            y: 0.0,
            width: canvas.width,
            height: canvas.height,
        });
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders into an external cairo context, e.g. a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn plugin_context(&self) -> PluginContext {
        let (pointer_x, pointer_y) = self.hover.pointer();
        PluginContext {
            canvas: self.canvas_size(),
            glyph_count: self.chart.glyphs().len(),
            hovered: self.hover.hovered(),
            pointer_x,
            pointer_y,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
