use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BarColumn, CanvasSize, CategoryPartition, Glyph, ThresholdDivider};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, Tooltip};
use crate::render::Renderer;

use super::ChartEngine;
use super::chart::{ChartKind, PictorialChart};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub kind: ChartKind,
    pub canvas: CanvasSize,
    pub glyphs: Vec<Glyph>,
    pub hover: HoverState,
    pub tooltip: Tooltip,
    #[serde(default)]
    pub partition: Option<CategoryPartition>,
    #[serde(default)]
    pub columns: Vec<BarColumn>,
    #[serde(default)]
    pub shared_row_count: Option<usize>,
    #[serde(default)]
    pub divider: Option<ThresholdDivider>,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts a v1 contract envelope or a bare snapshot payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let mut snapshot = ChartSnapshot {
            kind: self.chart.kind(),
            canvas: self.canvas_size(),
            glyphs: self.chart.glyphs().to_vec(),
            hover: self.hover.state(),
            tooltip: self.tooltip(),
            partition: None,
            columns: Vec::new(),
            shared_row_count: None,
            divider: None,
            metadata: self.config.metadata.clone(),
        };
        match &self.chart {
            PictorialChart::Isotype(chart) => snapshot.partition = Some(chart.partition()),
            PictorialChart::PictorialBars(chart) => {
                let layout = chart.layout();
                snapshot.columns = layout.columns.clone();
                snapshot.shared_row_count = Some(layout.shared_row_count);
                snapshot.divider = layout.divider;
            }
        }
        snapshot
    }
}
