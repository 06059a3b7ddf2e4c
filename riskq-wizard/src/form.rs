use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use riskq_core::errors::StoreError;
use riskq_core::traits::IFieldSink;

use crate::debounce::{Debouncer, SaveStatus};

/// The fields one wizard step edits, each behind its own debouncer.
pub struct StepForm {
    sink: Arc<dyn IFieldSink>,
    delay: Duration,
    fields: BTreeMap<String, Debouncer>,
}

impl StepForm {
    pub fn new(sink: Arc<dyn IFieldSink>, delay: Duration) -> Self {
        Self {
            sink,
            delay,
            fields: BTreeMap::new(),
        }
    }

    /// Route input to the field's debouncer, creating it on first use.
    pub fn input(&mut self, field: &str, value: Option<String>) {
        let debouncer = self.fields.entry(field.to_string()).or_insert_with(|| {
            Debouncer::new(field, Arc::clone(&self.sink), self.delay)
        });
        debouncer.input(value);
    }

    /// Save every pending field now. Returns the fields whose save was
    /// rejected; their values stay pending for a retry.
    pub fn flush_all(&mut self) -> Vec<(String, StoreError)> {
        self.fields
            .iter_mut()
            .filter_map(|(field, debouncer)| {
                debouncer.flush().err().map(|err| (field.clone(), err))
            })
            .collect()
    }

    pub fn status(&self, field: &str) -> Option<SaveStatus> {
        self.fields.get(field).map(Debouncer::status)
    }

    pub fn latest(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(Debouncer::latest)
    }

    pub fn has_pending(&self) -> bool {
        self.fields.values().any(Debouncer::has_pending)
    }

    pub fn debouncer_mut(&mut self, field: &str) -> Option<&mut Debouncer> {
        self.fields.get_mut(field)
    }
}
