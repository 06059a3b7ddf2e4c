use serde::{Deserialize, Serialize};

use super::defaults;

/// Default geometry of the marker track drawn under probability bars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub track_width: f64,
    pub left_inset: f64,
    pub right_inset: f64,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            track_width: defaults::DEFAULT_TRACK_WIDTH,
            left_inset: defaults::DEFAULT_TRACK_LEFT_INSET,
            right_inset: defaults::DEFAULT_TRACK_RIGHT_INSET,
        }
    }
}
