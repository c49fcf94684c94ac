use isotype_charts::ChartError;
use isotype_charts::api::article::{
    ArticleBarMode, admissions_deaths_isotype, population_isotype, yearly_admissions_bars,
};
use isotype_charts::api::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartEngine, ChartEngineConfig, ChartKind, ChartSnapshot,
    ENGINE_CONFIG_JSON_SCHEMA_V1,
};
use isotype_charts::render::NullRenderer;

#[test]
fn engine_config_contract_v1_round_trips() {
    let config = yearly_admissions_bars(ArticleBarMode::Comparison).with_source("Facility records");
    let json = config.to_json_contract_v1_pretty().expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(ENGINE_CONFIG_JSON_SCHEMA_V1))
    );
    assert_eq!(value["config"]["chart"]["kind"], "pictorial_bars");

    let restored = ChartEngineConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn bare_config_payload_is_accepted() {
    let config = population_isotype();
    let bare = serde_json::to_string(&config).expect("serialize");
    let restored = ChartEngineConfig::from_json_compat_str(&bare).expect("parse");
    assert_eq!(restored, config);
    assert_eq!(restored.chart.kind(), ChartKind::Isotype);
}

#[test]
fn metadata_keeps_insertion_order() {
    let config = admissions_deaths_isotype().with_metadata("section", "burden");
    let keys: Vec<&str> = config.metadata.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["title", "alt_text", "section"]);

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    let restored = ChartEngineConfig::from_json_compat_str(&json).expect("parse");
    let restored_keys: Vec<&str> = restored.metadata.keys().map(String::as_str).collect();
    assert_eq!(restored_keys, keys);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let config = population_isotype();
    let json = config
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 99", 1);
    let err = ChartEngineConfig::from_json_compat_str(&json).expect_err("unsupported version");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ChartEngineConfig::from_json_compat_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn snapshot_captures_layout_and_hover() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), admissions_deaths_isotype()).expect("engine init");
    engine.pointer_move(390.0, 290.0);
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.kind, ChartKind::Isotype);
    assert_eq!(snapshot.glyphs.len(), 274);
    assert_eq!(snapshot.hover.hovered, Some(178));
    assert_eq!(snapshot.tooltip.headline(), "Death 1 of 96");
    let partition = snapshot.partition.expect("partition");
    assert_eq!(partition.boundary_index, 178);
    assert!(snapshot.columns.is_empty());

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(CHART_SNAPSHOT_JSON_SCHEMA_V1))
    );
    let restored = ChartSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn bar_snapshot_carries_columns_and_divider() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        yearly_admissions_bars(ArticleBarMode::Comparison),
    )
    .expect("engine init");
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.kind, ChartKind::PictorialBars);
    assert_eq!(snapshot.columns.len(), 10);
    assert_eq!(snapshot.shared_row_count, Some(15));
    let divider = snapshot.divider.expect("divider");
    assert_eq!((divider.before_period, divider.after_period), (2019, 2020));
    assert!(snapshot.partition.is_none());

    let bare = serde_json::to_string(&snapshot).expect("serialize");
    let restored = ChartSnapshot::from_json_compat_str(&bare).expect("parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn imported_config_with_oversized_glyph_count_is_rejected() {
    let mut value = serde_json::to_value(population_isotype()).expect("serialize");
    value["chart"]["raw_major_units"] = serde_json::json!(1e15);
    value["chart"]["unit_per_icon"] = serde_json::json!(1.0);
    let json = serde_json::to_string(&value).expect("serialize");

    let config = ChartEngineConfig::from_json_compat_str(&json).expect("parse");
    let err = ChartEngine::new(NullRenderer::default(), config)
        .err()
        .expect("glyph limit exceeded");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
