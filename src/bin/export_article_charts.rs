//! Writes the article's four charts as standalone SVG files.
//!
//! Usage: `export_article_charts <output-dir>`

use std::fs;
use std::path::PathBuf;

use isotype_charts::api::article::{self, ArticleBarMode};
use isotype_charts::api::{ChartEngine, ChartEngineConfig};
use isotype_charts::render::SvgRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = isotype_charts::telemetry::init_default_tracing();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: export_article_charts <output-dir>")?;
    fs::create_dir_all(&output_dir)?;

    let charts: [(&str, ChartEngineConfig); 4] = [
        ("admissions_deaths.svg", article::admissions_deaths_isotype()),
        ("population.svg", article::population_isotype()),
        (
            "yearly_admissions.svg",
            article::yearly_admissions_bars(ArticleBarMode::Admissions),
        ),
        (
            "admissions_comparison.svg",
            article::yearly_admissions_bars(ArticleBarMode::Comparison),
        ),
    ];

    for (file_name, config) in charts {
        let mut engine = ChartEngine::new(SvgRenderer::new(), config)?;
        engine.render()?;
        let document = engine
            .into_renderer()
            .take_document()
            .ok_or("renderer produced no document")?;
        let path = output_dir.join(file_name);
        fs::write(&path, document)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
