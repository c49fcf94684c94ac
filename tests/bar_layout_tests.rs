use approx::assert_relative_eq;
use isotype_charts::ChartError;
use isotype_charts::api::article::yearly_admissions;
use isotype_charts::core::{
    BarLayoutConfig, DatasetEntry, GlyphCategory, ToneMode, layout_bars,
};

fn comparison_config() -> BarLayoutConfig {
    BarLayoutConfig::new(5_000.0, 3).with_tone(ToneMode::TwoTone {
        threshold_period: 2020,
    })
}

#[test]
fn icon_counts_round_to_nearest_unit() {
    let layout = layout_bars(&yearly_admissions(), comparison_config()).expect("layout");
    let counts: Vec<usize> = layout.columns.iter().map(|column| column.icon_count).collect();
    assert_eq!(counts, vec![43, 36, 32, 31, 33, 25, 29, 28, 26, 22]);
    assert_eq!(layout.glyphs.len(), counts.iter().sum::<usize>());
}

#[test]
fn tallest_column_sets_the_shared_row_budget() {
    let layout = layout_bars(&yearly_admissions(), comparison_config()).expect("layout");

    assert_eq!(layout.shared_row_count, 15);
    let tallest = layout.column_for_period(2015).expect("2015 column");
    assert_eq!(tallest.row_count, 15);
    assert_eq!(tallest.summary_label, "214,118");

    assert_relative_eq!(layout.canvas_width, 2280.0);
    assert_relative_eq!(layout.canvas_height, 935.0);
    assert_relative_eq!(layout.baseline_y, 835.0);
    assert_relative_eq!(layout.row_budget_top(), 160.0);
}

#[test]
fn columns_stack_upward_from_the_baseline() {
    let layout = layout_bars(&yearly_admissions(), comparison_config()).expect("layout");

    let first = layout.glyphs[0];
    assert_eq!(first.period, Some(2015));
    assert_eq!((first.row, first.column), (0, 0));
    assert_relative_eq!(first.x, 40.0);
    assert_relative_eq!(first.y, 790.0);
    assert_relative_eq!(first.bottom(), 835.0);

    let third = layout.glyphs[2];
    assert_relative_eq!(third.x, 130.0);

    let top = layout.glyphs[42];
    assert_eq!((top.row, top.column), (14, 0));
    assert_relative_eq!(top.y, 160.0);

    let next_column = layout.column_for_period(2016).expect("2016 column");
    assert_eq!(next_column.first_flat_index, 43);
    assert_relative_eq!(next_column.x_offset, 260.0);
    assert_eq!(layout.glyphs[43].period, Some(2016));
    assert_relative_eq!(layout.glyphs[43].x, 260.0);
}

#[test]
fn flat_indices_are_contiguous_in_display_order() {
    let layout = layout_bars(&yearly_admissions(), comparison_config()).expect("layout");
    for (index, glyph) in layout.glyphs.iter().enumerate() {
        assert_eq!(glyph.flat_index, index);
    }
    let column = layout.column_for_glyph(50).expect("owning column");
    assert_eq!(column.period, 2016);
}

#[test]
fn two_tone_splits_categories_at_threshold() {
    let layout = layout_bars(&yearly_admissions(), comparison_config()).expect("layout");

    let before = layout.column_for_period(2019).expect("2019");
    let after = layout.column_for_period(2020).expect("2020");
    assert_eq!(before.category, GlyphCategory::BeforeThreshold);
    assert_eq!(after.category, GlyphCategory::AfterThreshold);
    assert_eq!(
        layout.glyphs[after.first_flat_index].category,
        GlyphCategory::AfterThreshold
    );
}

#[test]
fn divider_sits_between_last_before_and_first_after_period() {
    let layout = layout_bars(&yearly_admissions(), comparison_config()).expect("layout");
    let divider = layout.divider.expect("divider");

    assert_eq!((divider.before_period, divider.after_period), (2019, 2020));
    assert_relative_eq!(divider.x, 1095.0);
    assert_relative_eq!(divider.y_top, 85.0);
    assert_relative_eq!(divider.y_bottom, 835.0);

    let before = layout.column_for_period(2019).expect("2019");
    let after = layout.column_for_period(2020).expect("2020");
    assert!(divider.x > before.block_right);
    assert!(divider.x < after.x_offset);
}

#[test]
fn single_tone_has_no_divider() {
    let dataset: Vec<DatasetEntry> = yearly_admissions()
        .into_iter()
        .filter(|entry| entry.period < 2020)
        .collect();
    let layout = layout_bars(&dataset, BarLayoutConfig::new(5_000.0, 3)).expect("layout");

    assert!(layout.divider.is_none());
    assert_eq!(layout.columns.len(), 5);
    assert_relative_eq!(layout.canvas_width, 1180.0);
    assert!(
        layout
            .glyphs
            .iter()
            .all(|glyph| glyph.category == GlyphCategory::Uniform)
    );
}

#[test]
fn threshold_outside_dataset_draws_no_divider() {
    let config = BarLayoutConfig::new(5_000.0, 3).with_tone(ToneMode::TwoTone {
        threshold_period: 2030,
    });
    let layout = layout_bars(&yearly_admissions(), config).expect("layout");
    assert!(layout.divider.is_none());
    assert!(
        layout
            .glyphs
            .iter()
            .all(|glyph| glyph.category == GlyphCategory::BeforeThreshold)
    );
}

#[test]
fn empty_dataset_yields_empty_layout() {
    let layout = layout_bars(&[], BarLayoutConfig::new(5_000.0, 3)).expect("layout");
    assert!(layout.glyphs.is_empty());
    assert!(layout.columns.is_empty());
    assert_eq!(layout.shared_row_count, 0);
    assert!(layout.divider.is_none());
}

#[test]
fn zero_value_period_keeps_its_column() {
    let dataset = [DatasetEntry::new(2001, 0), DatasetEntry::new(2002, 12_000)];
    let layout = layout_bars(&dataset, BarLayoutConfig::new(5_000.0, 3)).expect("layout");
    assert_eq!(layout.columns[0].icon_count, 0);
    assert_eq!(layout.columns[1].icon_count, 2);
    assert_eq!(layout.columns[1].first_flat_index, 0);
    assert_eq!(layout.glyphs[0].period, Some(2002));
}

#[test]
fn invalid_configs_are_rejected() {
    let err = layout_bars(&yearly_admissions(), BarLayoutConfig::new(0.0, 3))
        .expect_err("unit must be > 0");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = layout_bars(&yearly_admissions(), BarLayoutConfig::new(5_000.0, 0))
        .expect_err("icons per row must be >= 1");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = layout_bars(
        &yearly_admissions(),
        BarLayoutConfig::new(5_000.0, 3).with_column_width(100.0),
    )
    .expect_err("column narrower than icon block");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let duplicate = [DatasetEntry::new(2015, 10), DatasetEntry::new(2015, 20)];
    let err = layout_bars(&duplicate, BarLayoutConfig::new(5_000.0, 3))
        .expect_err("duplicate period");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
