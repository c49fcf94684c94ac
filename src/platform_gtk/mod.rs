//! GTK4 embedding: a `DrawingArea` that draws the chart scaled to fit and
//! feeds pointer motion/leave into the engine.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartEngine;
use crate::interaction::SurfaceRect;
use crate::render::{CairoContextRenderer, Renderer};

/// Shared handle to an engine driven by GTK callbacks.
pub type SharedChartEngine<R> = Rc<RefCell<ChartEngine<R>>>;

pub struct GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    engine: SharedChartEngine<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R> GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let canvas = engine.canvas_size();
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(canvas.width.round() as i32);
        drawing_area.set_content_height(canvas.height.round() as i32);
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let draw_engine = Rc::clone(&engine);
        drawing_area.set_draw_func(move |_, context, width, height| {
            let mut engine = draw_engine.borrow_mut();
            let surface = SurfaceRect::new(0.0, 0.0, f64::from(width), f64::from(height));
            let Some(fit) = surface.fit(engine.canvas_size()) else {
                return;
            };
            if let Err(err) = context.save() {
                warn!(error = %err, "failed to save cairo state");
                return;
            }
            context.translate(fit.offset_x, fit.offset_y);
            context.scale(fit.scale, fit.scale);
            if let Err(err) = engine.render_on_cairo_context(context) {
                warn!(error = %err, "chart draw failed");
            }
            if let Err(err) = context.restore() {
                warn!(error = %err, "failed to restore cairo state");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let motion_engine = Rc::clone(&engine);
        let motion_area = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            let surface = widget_surface(&motion_area);
            let mut engine = motion_engine.borrow_mut();
            let before = engine.hover_state();
            engine.pointer_move_client(x, y, surface);
            if engine.hover_state() != before {
                motion_area.queue_draw();
            }
        });
        let leave_engine = Rc::clone(&engine);
        let leave_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            if leave_engine.borrow_mut().pointer_leave() {
                leave_area.queue_draw();
            }
        });
        drawing_area.add_controller(motion);

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedChartEngine<R> {
        Rc::clone(&self.engine)
    }

    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }
}

fn widget_surface(area: &gtk::DrawingArea) -> SurfaceRect {
    SurfaceRect::new(0.0, 0.0, f64::from(area.width()), f64::from(area.height()))
}
