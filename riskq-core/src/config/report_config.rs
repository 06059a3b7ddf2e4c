use serde::{Deserialize, Serialize};

use super::defaults;

/// Report export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Content blocks placed on one page before a page break.
    pub blocks_per_page: usize,
    /// Prefix of every report title.
    pub title_prefix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            blocks_per_page: defaults::DEFAULT_BLOCKS_PER_PAGE,
            title_prefix: defaults::DEFAULT_REPORT_TITLE_PREFIX.to_string(),
        }
    }
}
