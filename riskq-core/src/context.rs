//! AppContext: page title and breadcrumb trail for one application session.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::DEFAULT_PAGE_TITLE;

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Breadcrumb {
    pub label: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Session-scoped UI state, passed explicitly to whatever needs to change
/// the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppContext {
    pub page_title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            breadcrumbs: Vec::new(),
        }
    }

    /// Replace the title and the whole trail.
    pub fn set_page(&mut self, title: impl Into<String>, breadcrumbs: Vec<Breadcrumb>) {
        self.page_title = title.into();
        self.breadcrumbs = breadcrumbs;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.page_title = title.into();
    }

    pub fn push_breadcrumb(&mut self, crumb: Breadcrumb) {
        self.breadcrumbs.push(crumb);
    }

    /// Drop the trail back to `len` entries.
    pub fn truncate_breadcrumbs(&mut self, len: usize) {
        self.breadcrumbs.truncate(len);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
