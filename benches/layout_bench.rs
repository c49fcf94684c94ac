use isotype_charts::api::ChartEngine;
use isotype_charts::api::article::{
    ArticleBarMode, admissions_deaths_isotype, yearly_admissions, yearly_admissions_bars,
};
use isotype_charts::core::{BarLayoutConfig, Glyph, GlyphCategory, ToneMode, layout_bars, layout_grid};
use isotype_charts::interaction::GlyphHitMap;
use isotype_charts::render::{NullRenderer, SvgRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_grid_layout_10k(c: &mut Criterion) {
    c.bench_function("grid_layout_10k", |b| {
        b.iter(|| {
            let _ = layout_grid(
                black_box(10_000),
                black_box(100),
                black_box(36.0),
                black_box(44.0),
                black_box(2.0),
                black_box(2.0),
            )
            .expect("grid layout");
        })
    });
}

fn bench_bar_layout_article(c: &mut Criterion) {
    let dataset = yearly_admissions();
    let config = BarLayoutConfig::new(5_000.0, 3).with_tone(ToneMode::TwoTone {
        threshold_period: 2020,
    });

    c.bench_function("bar_layout_article", |b| {
        b.iter(|| {
            let _ = layout_bars(black_box(&dataset), black_box(config)).expect("bar layout");
        })
    });
}

fn bench_hit_test_10k(c: &mut Criterion) {
    let layout = layout_grid(10_000, 100, 36.0, 44.0, 2.0, 2.0).expect("grid layout");
    let glyphs: Vec<Glyph> = layout
        .placements
        .iter()
        .map(|placement| Glyph {
            flat_index: placement.flat_index,
            period: None,
            row: placement.row,
            column: placement.column,
            category: GlyphCategory::Major,
            x: placement.x,
            y: placement.y,
            width: 36.0,
            height: 44.0,
        })
        .collect();
    let map = GlyphHitMap::build(&glyphs);

    c.bench_function("hit_test_10k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for step in 0..256 {
                let x = (step as f64 * 14.9) % layout.width;
                let y = (step as f64 * 17.3) % layout.height;
                if map.hit(black_box(x), black_box(y)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_pointer_sweep_admissions(c: &mut Criterion) {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), admissions_deaths_isotype()).expect("engine init");

    c.bench_function("pointer_sweep_admissions", |b| {
        b.iter(|| {
            for step in 0..1_066 {
                let _ = engine.pointer_move(black_box(step as f64), black_box(240.0));
            }
            engine.pointer_leave();
        })
    });
}

fn bench_svg_render_comparison_bars(c: &mut Criterion) {
    let mut engine = ChartEngine::new(
        SvgRenderer::new(),
        yearly_admissions_bars(ArticleBarMode::Comparison),
    )
    .expect("engine init");
    engine.pointer_move(50.0, 800.0);

    c.bench_function("svg_render_comparison_bars", |b| {
        b.iter(|| {
            engine.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_grid_layout_10k,
    bench_bar_layout_article,
    bench_hit_test_10k,
    bench_pointer_sweep_admissions,
    bench_svg_render_comparison_bars
);
criterion_main!(benches);
