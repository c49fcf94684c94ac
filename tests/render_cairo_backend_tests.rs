#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use isotype_charts::ChartError;
use isotype_charts::api::ChartEngine;
use isotype_charts::api::article::{
    ArticleBarMode, admissions_deaths_isotype, population_isotype, yearly_admissions_bars,
};
use isotype_charts::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn cairo_renderer_paints_grid_glyphs_and_footer() {
    let renderer = CairoRenderer::new(1066, 522).expect("renderer");
    let mut engine = ChartEngine::new(renderer, admissions_deaths_isotype()).expect("engine init");

    engine.render().expect("render");
    let stats = engine.renderer().last_stats();

    assert_eq!(stats.glyphs_drawn, 276);
    assert_eq!(stats.texts_drawn, 3);
    assert_eq!(stats.rects_drawn, 0);
    assert_eq!(stats.polygons_drawn, 0);
}

#[test]
fn cairo_renderer_paints_tooltip_overlay_when_hovered() {
    let renderer = CairoRenderer::new(818, 406).expect("renderer");
    let mut engine = ChartEngine::new(renderer, population_isotype()).expect("engine init");
    engine.pointer_move(70.0, 290.0);

    engine.render().expect("render");
    let stats = engine.renderer().last_stats();

    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.texts_drawn, 5);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let mut engine = ChartEngine::new(
        renderer,
        yearly_admissions_bars(ArticleBarMode::Comparison),
    )
    .expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 1140, 468).expect("surface");
    let context = Context::new(&surface).expect("context");
    context.scale(0.5, 0.5);
    engine
        .render_on_cairo_context(&context)
        .expect("render on external context");

    let stats = engine.renderer().last_stats();
    assert_eq!(stats.lines_drawn, 1);
    assert_eq!(stats.rects_drawn, 2);
    assert!(stats.glyphs_drawn > 300);
}

#[test]
fn cairo_renderer_exports_png() {
    let renderer = CairoRenderer::new(818, 406).expect("renderer");
    let mut engine = ChartEngine::new(renderer, population_isotype()).expect("engine init");
    engine.render().expect("render");

    let mut png = Vec::new();
    engine.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
