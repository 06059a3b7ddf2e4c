use serde::{Deserialize, Serialize};
use ts_rs::TS;

use riskq_core::config::ChartsConfig;
use riskq_core::constants::SCALE_MAX;

use crate::bars::clamp_scale;

/// A horizontal track a marker arrow slides along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Track {
    pub width: f64,
    pub left_inset: f64,
    pub right_inset: f64,
}

/// Where to draw a marker for a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Marker {
    pub value: f64,
    pub x: f64,
}

impl Track {
    pub fn new(width: f64, left_inset: f64, right_inset: f64) -> Self {
        Self {
            width,
            left_inset,
            right_inset,
        }
    }

    pub fn from_config(config: &ChartsConfig) -> Self {
        Self::new(config.track_width, config.left_inset, config.right_inset)
    }

    /// Distance between the two insets.
    pub fn usable_width(&self) -> f64 {
        self.width - self.left_inset - self.right_inset
    }

    /// Right inset position measured from the left edge.
    pub fn right_edge(&self) -> f64 {
        self.width - self.right_inset
    }

    /// Linear position of `value`: 0 sits on the left inset, 5 on the
    /// right inset. Out-of-range values are clamped.
    pub fn marker_x(&self, value: f64) -> f64 {
        let value = clamp_scale(value);
        if value >= SCALE_MAX {
            return self.right_edge();
        }
        self.left_inset + self.usable_width() * value / SCALE_MAX
    }

    pub fn marker(&self, value: f64) -> Marker {
        Marker {
            value: clamp_scale(value),
            x: self.marker_x(value),
        }
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::from_config(&ChartsConfig::default())
    }
}
