//! Ready-made configurations for the malaria/SMC data story.

use serde::{Deserialize, Serialize};

use crate::core::{
    BarLayoutConfig, DatasetEntry, GridLayoutConfig, ToneMode, format_millions, group_thousands,
};
use crate::interaction::{HoverRelease, TooltipPlacement};
use crate::render::{Color, FontWeight, GlyphShape};

use super::bar_chart::{BarChartConfig, TonePalette};
use super::chart::ChartSpec;
use super::decoration::{HighlightStyle, LegendStyle, LegendSwatch, TextLine, TooltipStyle};
use super::engine_config::ChartEngineConfig;
use super::isotype_chart::{CategoryStyle, IsotypeChartConfig};

pub const NAVY: Color = Color::from_rgb8(0x39, 0x4a, 0x62);
pub const CRIMSON: Color = Color::from_rgb8(0x9f, 0x1c, 0x20);
pub const TEAL: Color = Color::from_rgb8(0x02, 0x60, 0x5b);
pub const BAR_NAVY: Color = Color::from_rgb8(0x2c, 0x3e, 0x75);
const MUTED_GREY: Color = Color::from_rgb8(0x66, 0x66, 0x66);

pub const ADMISSIONS_TOTAL: u64 = 17_833;
pub const ADMISSION_GLYPHS: usize = 178;
pub const DEATHS_TOTAL: usize = 96;

pub const POPULATION_GLYPHS: usize = 70;
pub const POPULATION_CASE_GLYPHS: usize = 13;
pub const PEOPLE_PER_FIGURE: f64 = 500_000.0;

pub const CASES_PER_BED: f64 = 5_000.0;
/// First period of seasonal malaria chemoprevention.
pub const SMC_START_YEAR: i32 = 2020;

const YEARLY_ADMISSIONS: [(i32, u64); 10] = [
    (2015, 214_118),
    (2016, 182_053),
    (2017, 161_151),
    (2018, 157_367),
    (2019, 165_608),
    (2020, 122_553),
    (2021, 142_938),
    (2022, 142_251),
    (2023, 128_087),
    (2024, 110_260),
];

/// Which yearly-admissions chart to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleBarMode {
    /// Pre-intervention years only, single tone.
    Admissions,
    /// All years, two-tone around the intervention start.
    Comparison,
}

/// Malaria admissions per year, 2015 to 2024.
#[must_use]
pub fn yearly_admissions() -> Vec<DatasetEntry> {
    YEARLY_ADMISSIONS
        .iter()
        .map(|&(period, value)| DatasetEntry { period, value })
        .collect()
}

/// Admissions grid: 178 glyphs of ~100 admissions followed by 96 deaths.
#[must_use]
pub fn admissions_deaths_isotype() -> ChartEngineConfig {
    let unit_per_icon = ADMISSIONS_TOTAL as f64 / ADMISSION_GLYPHS as f64;
    let config = IsotypeChartConfig::new(
        ADMISSIONS_TOTAL as f64,
        unit_per_icon,
        DEATHS_TOTAL,
        GridLayoutConfig::new(28, 36.0, 44.0).with_padding(2.0, 2.0),
    )
    .with_shape(GlyphShape::StandingPerson)
    .with_category_styles(
        CategoryStyle::new(NAVY, "Admission group", "represents ~100 admissions")
            .with_legend_label("Admissions (each icon \u{2248} 100)"),
        CategoryStyle::new(CRIMSON, "Death", "represents 1 death")
            .with_legend_label("Deaths (each icon = 1)"),
    )
    .with_dim_opacity(0.2)
    .with_highlight(Some(HighlightStyle::default()))
    .with_summary(
        TextLine::new(
            format!(
                "{} admissions  |  {DEATHS_TOTAL} deaths",
                group_thousands(ADMISSIONS_TOTAL)
            ),
            15.0,
            NAVY,
        )
        .with_weight(FontWeight::SemiBold),
    )
    .with_legend(
        LegendStyle::new(LegendSwatch::Glyph(GlyphShape::StandingPerson), 14.0, 18.0, NAVY)
            .with_font_px(13.0),
    )
    .with_tooltip(TooltipStyle::new(
        TooltipPlacement::new(260.0, 50.0).with_upward_offset(10.0),
    ))
    .with_hover_release(HoverRelease::SurfaceLeave);

    ChartEngineConfig::new(ChartSpec::Isotype(config))
        .with_title("Malaria admissions and deaths")
        .with_alt_text(
            "Grid of 274 figures: 178 navy figures each standing for about 100 admissions, \
             followed by 96 crimson figures each standing for one death.",
        )
}

/// Population grid: 70 figures of 500,000 people, the last 13 malaria cases.
#[must_use]
pub fn population_isotype() -> ChartEngineConfig {
    let healthy = POPULATION_GLYPHS - POPULATION_CASE_GLYPHS;
    let config = IsotypeChartConfig::new(
        healthy as f64 * PEOPLE_PER_FIGURE,
        PEOPLE_PER_FIGURE,
        POPULATION_CASE_GLYPHS,
        GridLayoutConfig::new(14, 52.0, 62.0).with_padding(6.0, 6.0),
    )
    .with_shape(GlyphShape::Figure)
    .with_category_styles(
        CategoryStyle::new(TEAL, "Healthy group", "represents 500,000 people").with_legend_label(
            format!("Healthy ({})", format_millions(healthy as f64 * PEOPLE_PER_FIGURE)),
        ),
        CategoryStyle::new(CRIMSON, "Malaria case group", "represents 500,000 people")
            .with_legend_label(format!(
                "Malaria Cases ({})",
                format_millions(POPULATION_CASE_GLYPHS as f64 * PEOPLE_PER_FIGURE)
            )),
    )
    .with_dim_opacity(0.3)
    .with_highlight(Some(HighlightStyle::default().with_stroke_width(2.0)))
    .with_summary(
        TextLine::new("1 icon = 500,000 people", 13.0, NAVY).with_weight(FontWeight::Medium),
    )
    .with_legend(
        LegendStyle::new(LegendSwatch::Glyph(GlyphShape::Figure), 18.0, 22.0, NAVY)
            .with_font_px(13.0),
    )
    .with_tooltip(TooltipStyle::new(
        TooltipPlacement::new(220.0, 50.0).with_upward_offset(16.0),
    ))
    .with_hover_release(HoverRelease::GlyphLeave);

    ChartEngineConfig::new(ChartSpec::Isotype(config))
        .with_title("6.5 million cases out of 35 million population")
        .with_alt_text(
            "Grid of 70 figures, each standing for 500,000 people; the last 13 are \
             highlighted as malaria cases.",
        )
}

/// Yearly admissions as hospital-bed bars, one bed per 5,000 cases.
#[must_use]
pub fn yearly_admissions_bars(mode: ArticleBarMode) -> ChartEngineConfig {
    let (dataset, tone, title) = match mode {
        ArticleBarMode::Admissions => (
            yearly_admissions()
                .into_iter()
                .filter(|entry| entry.period < SMC_START_YEAR)
                .collect::<Vec<_>>(),
            ToneMode::Single,
            "YEARLY MALARIA ADMISSIONS (2015 - 2019)",
        ),
        ArticleBarMode::Comparison => (
            yearly_admissions(),
            ToneMode::TwoTone {
                threshold_period: SMC_START_YEAR,
            },
            "MALARIA ADMISSIONS: PRE-SMC vs POST-SMC",
        ),
    };

    let mut config = BarChartConfig::new(
        dataset,
        BarLayoutConfig::new(CASES_PER_BED, 3).with_tone(tone),
    )
    .with_palette(TonePalette {
        uniform: BAR_NAVY,
        before: CRIMSON,
        after: TEAL,
    })
    .with_text_color(BAR_NAVY)
    .with_titles(
        TextLine::new(title, 18.0, BAR_NAVY),
        Some(TextLine::new(
            format!("1 ICON = {} CASES", group_thousands(CASES_PER_BED as u64)),
            12.0,
            MUTED_GREY,
        )),
    )
    .with_dim_opacity(0.4)
    .with_hover_release(HoverRelease::GlyphLeave);
    if mode == ArticleBarMode::Comparison {
        config = config
            .with_divider_caption("SMC starts")
            .with_legend_labels("Before SMC", "After SMC");
    }

    ChartEngineConfig::new(ChartSpec::PictorialBars(config))
        .with_title(title)
        .with_alt_text(
            "Columns of hospital beds per year; each bed stands for 5,000 malaria admissions.",
        )
}
