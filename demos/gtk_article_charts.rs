#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use isotype_charts::api::article::{self, ArticleBarMode};
    use isotype_charts::api::{ChartEngine, ChartEngineConfig};
    use isotype_charts::platform_gtk::GtkChartAdapter;
    use isotype_charts::render::CairoRenderer;

    let _ = isotype_charts::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.isotype.demos.article")
        .build();

    app.connect_activate(|app| {
        let notebook = gtk::Notebook::new();
        let charts: [(&str, ChartEngineConfig); 4] = [
            ("Admissions & deaths", article::admissions_deaths_isotype()),
            ("Population", article::population_isotype()),
            (
                "Yearly admissions",
                article::yearly_admissions_bars(ArticleBarMode::Admissions),
            ),
            (
                "Pre/post SMC",
                article::yearly_admissions_bars(ArticleBarMode::Comparison),
            ),
        ];

        for (tab, config) in charts {
            let engine = CairoRenderer::new(1, 1)
                .and_then(|renderer| ChartEngine::new(renderer, config));
            let engine = match engine {
                Ok(engine) => engine,
                Err(err) => {
                    eprintln!("failed to build `{tab}` chart: {err}");
                    continue;
                }
            };
            let adapter = GtkChartAdapter::new(engine);
            notebook.append_page(adapter.drawing_area(), Some(&gtk::Label::new(Some(tab))));
        }

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("isotype-charts | article charts")
            .default_width(1280)
            .default_height(820)
            .build();
        window.set_child(Some(&notebook));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_article_charts");
}
