use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use riskq_charts::{ScenarioPoint, SeriesPoint};
use riskq_core::errors::ExportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyValueRow {
    pub key: String,
    pub value: String,
}

impl KeyValueRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "points", rename_all = "snake_case")]
pub enum ChartSeries {
    Bars(Vec<SeriesPoint>),
    Scenarios(Vec<ScenarioPoint>),
}

/// One unit of report content. Pagination never splits a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    KeyValue { rows: Vec<KeyValueRow> },
    Chart { title: String, series: ChartSeries },
    /// Shown in place of every aggregate-driven block when no aggregate
    /// could be computed.
    Unavailable { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub blocks: Vec<Block>,
}

/// The exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub title: String,
    pub risk_file_id: String,
    pub generated_at: DateTime<Utc>,
    pub pages: Vec<Page>,
    /// blake3 hex digest of the serialized pages.
    pub checksum: String,
}

impl Report {
    pub(crate) fn new(
        title: String,
        risk_file_id: String,
        pages: Vec<Page>,
    ) -> Result<Self, ExportError> {
        let checksum = content_checksum(&pages)?;
        Ok(Self {
            title,
            risk_file_id,
            generated_at: Utc::now(),
            pages,
            checksum,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.pages.iter().flat_map(|p| p.blocks.iter())
    }

    /// True when the pages still match the recorded checksum.
    pub fn verify(&self) -> bool {
        content_checksum(&self.pages).is_ok_and(|c| c == self.checksum)
    }

    /// Serialize the document artifact.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(self).map_err(|e| ExportError::Render {
            message: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        serde_json::from_slice(bytes).map_err(|e| ExportError::Parse {
            name: "report".to_string(),
            message: e.to_string(),
        })
    }
}

fn content_checksum(pages: &[Page]) -> Result<String, ExportError> {
    let bytes = serde_json::to_vec(pages).map_err(|e| ExportError::Render {
        message: e.to_string(),
    })?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}
