//! Read-through cache over any store.
//!
//! The inner store stays the source of truth. Reads are served from moka
//! caches when possible; every write goes to the inner store first and then
//! invalidates whatever it may have made stale. A read that raced a write
//! drops the entry it just cached, so a stale load never outlives the write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;
use tracing::trace;

use riskq_core::config::CacheConfig;
use riskq_core::errors::StoreError;
use riskq_core::records::{CascadeAnalysis, DirectAnalysis, RiskFile, Validation};
use riskq_core::traits::IRiskDataStore;

pub struct CachedStore<S> {
    inner: S,
    risk_files: Cache<String, RiskFile>,
    direct: Cache<String, DirectAnalysis>,
    /// Direct analyses by risk file id.
    direct_lists: Cache<String, Vec<DirectAnalysis>>,
    cascades: Cache<String, CascadeAnalysis>,
    /// Cascade analyses by effect id.
    cascade_lists: Cache<String, Vec<CascadeAnalysis>>,
    /// Bumped by every write, before it invalidates.
    writes: AtomicU64,
}

fn build<V: Clone + Send + Sync + 'static>(config: &CacheConfig) -> Cache<String, V> {
    Cache::builder()
        .max_capacity(config.max_entries)
        .time_to_live(Duration::from_secs(config.ttl_secs))
        .build()
}

impl<S: IRiskDataStore> CachedStore<S> {
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        Self {
            inner,
            risk_files: build(config),
            direct: build(config),
            direct_lists: build(config),
            cascades: build(config),
            cascade_lists: build(config),
            writes: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.risk_files.invalidate_all();
        self.direct.invalidate_all();
        self.direct_lists.invalidate_all();
        self.cascades.invalidate_all();
        self.cascade_lists.invalidate_all();
    }

    fn written(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    fn invalidate_risk_file(&self, id: &str) {
        self.written();
        self.risk_files.invalidate(id);
    }

    fn invalidate_direct(&self, id: &str) {
        self.written();
        self.direct.invalidate(id);
        // The owning risk file is unknown here; drop all listings.
        self.direct_lists.invalidate_all();
    }

    fn invalidate_cascade(&self, id: &str) {
        self.written();
        self.cascades.invalidate(id);
        self.cascade_lists.invalidate_all();
    }

    fn read_through<V, F>(
        &self,
        cache: &Cache<String, V>,
        key: &str,
        load: F,
    ) -> Result<V, StoreError>
    where
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<V, StoreError>,
    {
        if let Some(hit) = cache.get(key) {
            trace!(key, "cache hit");
            return Ok(hit);
        }
        let before = self.writes.load(Ordering::SeqCst);
        let value = load()?;
        cache.insert(key.to_string(), value.clone());
        if self.writes.load(Ordering::SeqCst) != before {
            // A write landed while loading; the loaded value may predate it.
            trace!(key, "write during load, dropping cached entry");
            cache.invalidate(key);
        }
        Ok(value)
    }
}

impl<S: IRiskDataStore> IRiskDataStore for CachedStore<S> {
    fn get_risk_file(&self, id: &str) -> Result<RiskFile, StoreError> {
        self.read_through(&self.risk_files, id, || self.inner.get_risk_file(id))
    }

    fn list_risk_files(&self) -> Result<Vec<RiskFile>, StoreError> {
        self.inner.list_risk_files()
    }

    fn upsert_risk_file(&self, risk_file: &RiskFile) -> Result<(), StoreError> {
        let result = self.inner.upsert_risk_file(risk_file);
        self.invalidate_risk_file(&risk_file.id);
        result
    }

    fn update_risk_file_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        let result = self.inner.update_risk_file_field(id, field, value);
        self.invalidate_risk_file(id);
        result
    }

    fn get_direct_analysis(&self, id: &str) -> Result<DirectAnalysis, StoreError> {
        self.read_through(&self.direct, id, || self.inner.get_direct_analysis(id))
    }

    fn list_direct_analyses(&self, risk_file_id: &str) -> Result<Vec<DirectAnalysis>, StoreError> {
        self.read_through(&self.direct_lists, risk_file_id, || {
            self.inner.list_direct_analyses(risk_file_id)
        })
    }

    fn upsert_direct_analysis(&self, analysis: &DirectAnalysis) -> Result<(), StoreError> {
        let result = self.inner.upsert_direct_analysis(analysis);
        self.invalidate_direct(&analysis.id);
        result
    }

    fn update_direct_analysis_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        let result = self.inner.update_direct_analysis_field(id, field, value);
        self.invalidate_direct(id);
        result
    }

    fn delete_direct_analysis(&self, id: &str) -> Result<(), StoreError> {
        let result = self.inner.delete_direct_analysis(id);
        self.invalidate_direct(id);
        result
    }

    fn get_cascade_analysis(&self, id: &str) -> Result<CascadeAnalysis, StoreError> {
        self.read_through(&self.cascades, id, || self.inner.get_cascade_analysis(id))
    }

    fn list_cascade_analyses(&self, effect_id: &str) -> Result<Vec<CascadeAnalysis>, StoreError> {
        self.read_through(&self.cascade_lists, effect_id, || {
            self.inner.list_cascade_analyses(effect_id)
        })
    }

    fn upsert_cascade_analysis(&self, analysis: &CascadeAnalysis) -> Result<(), StoreError> {
        let result = self.inner.upsert_cascade_analysis(analysis);
        self.invalidate_cascade(&analysis.id);
        result
    }

    fn update_cascade_analysis_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        let result = self.inner.update_cascade_analysis_field(id, field, value);
        self.invalidate_cascade(id);
        result
    }

    fn delete_cascade_analysis(&self, id: &str) -> Result<(), StoreError> {
        let result = self.inner.delete_cascade_analysis(id);
        self.invalidate_cascade(id);
        result
    }

    // Validations are written once per expert and rarely re-read; no cache.
    fn get_validation(&self, id: &str) -> Result<Validation, StoreError> {
        self.inner.get_validation(id)
    }

    fn list_validations(&self, risk_file_id: &str) -> Result<Vec<Validation>, StoreError> {
        self.inner.list_validations(risk_file_id)
    }

    fn upsert_validation(&self, validation: &Validation) -> Result<(), StoreError> {
        self.inner.upsert_validation(validation)
    }

    fn update_validation_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        self.inner.update_validation_field(id, field, value)
    }
}
