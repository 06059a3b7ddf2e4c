use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;

use riskq_core::config::CacheConfig;
use riskq_core::errors::StoreError;
use riskq_core::records::{CascadeAnalysis, DirectAnalysis, RiskFile, Validation};
use riskq_core::traits::IRiskDataStore;
use riskq_store::{CachedStore, InMemoryStore};
use test_fixtures::{direct_analysis, risk_file};

use riskq_core::records::{CodeField, Scenario};

/// Counts reads that reach the underlying store. When a gate is armed, the
/// next risk file read pauses after loading until released.
#[derive(Default)]
struct CountingStore {
    inner: InMemoryStore,
    reads: AtomicUsize,
    gate: Mutex<Option<(mpsc::Sender<()>, mpsc::Receiver<()>)>>,
}

impl CountingStore {
    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }
}

impl IRiskDataStore for CountingStore {
    fn get_risk_file(&self, id: &str) -> Result<RiskFile, StoreError> {
        self.read();
        let loaded = self.inner.get_risk_file(id);
        let gate = self.gate.lock().unwrap().take();
        if let Some((loaded_tx, release_rx)) = gate {
            loaded_tx.send(()).unwrap();
            release_rx.recv().unwrap();
        }
        loaded
    }
    fn list_risk_files(&self) -> Result<Vec<RiskFile>, StoreError> {
        self.read();
        self.inner.list_risk_files()
    }
    fn upsert_risk_file(&self, risk_file: &RiskFile) -> Result<(), StoreError> {
        self.inner.upsert_risk_file(risk_file)
    }
    fn update_risk_file_field(&self, id: &str, field: &str, value: Option<String>) -> Result<(), StoreError> {
        self.inner.update_risk_file_field(id, field, value)
    }
    fn get_direct_analysis(&self, id: &str) -> Result<DirectAnalysis, StoreError> {
        self.read();
        self.inner.get_direct_analysis(id)
    }
    fn list_direct_analyses(&self, risk_file_id: &str) -> Result<Vec<DirectAnalysis>, StoreError> {
        self.read();
        self.inner.list_direct_analyses(risk_file_id)
    }
    fn upsert_direct_analysis(&self, analysis: &DirectAnalysis) -> Result<(), StoreError> {
        self.inner.upsert_direct_analysis(analysis)
    }
    fn update_direct_analysis_field(&self, id: &str, field: &str, value: Option<String>) -> Result<(), StoreError> {
        self.inner.update_direct_analysis_field(id, field, value)
    }
    fn delete_direct_analysis(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete_direct_analysis(id)
    }
    fn get_cascade_analysis(&self, id: &str) -> Result<CascadeAnalysis, StoreError> {
        self.read();
        self.inner.get_cascade_analysis(id)
    }
    fn list_cascade_analyses(&self, effect_id: &str) -> Result<Vec<CascadeAnalysis>, StoreError> {
        self.read();
        self.inner.list_cascade_analyses(effect_id)
    }
    fn upsert_cascade_analysis(&self, analysis: &CascadeAnalysis) -> Result<(), StoreError> {
        self.inner.upsert_cascade_analysis(analysis)
    }
    fn update_cascade_analysis_field(&self, id: &str, field: &str, value: Option<String>) -> Result<(), StoreError> {
        self.inner.update_cascade_analysis_field(id, field, value)
    }
    fn delete_cascade_analysis(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete_cascade_analysis(id)
    }
    fn get_validation(&self, id: &str) -> Result<Validation, StoreError> {
        self.read();
        self.inner.get_validation(id)
    }
    fn list_validations(&self, risk_file_id: &str) -> Result<Vec<Validation>, StoreError> {
        self.read();
        self.inner.list_validations(risk_file_id)
    }
    fn upsert_validation(&self, validation: &Validation) -> Result<(), StoreError> {
        self.inner.upsert_validation(validation)
    }
    fn update_validation_field(&self, id: &str, field: &str, value: Option<String>) -> Result<(), StoreError> {
        self.inner.update_validation_field(id, field, value)
    }
}

fn cached() -> CachedStore<CountingStore> {
    CachedStore::new(CountingStore::default(), &CacheConfig::default())
}

#[test]
fn repeated_reads_hit_the_cache() {
    let store = cached();
    store.upsert_risk_file(&risk_file("rf-1")).unwrap();

    for _ in 0..3 {
        assert_eq!(store.get_risk_file("rf-1").unwrap().id, "rf-1");
    }
    assert_eq!(store.inner().reads(), 1);
}

#[test]
fn field_update_invalidates_the_record() {
    let store = cached();
    store.upsert_risk_file(&risk_file("rf-1")).unwrap();
    assert!(store.get_risk_file("rf-1").unwrap().definition.is_none());

    store
        .update_risk_file_field("rf-1", "definition", Some("Heat wave".into()))
        .unwrap();
    assert_eq!(
        store.get_risk_file("rf-1").unwrap().definition.as_deref(),
        Some("Heat wave")
    );
    assert_eq!(store.inner().reads(), 2);
}

#[test]
fn writes_refresh_listings() {
    let store = cached();
    store
        .upsert_direct_analysis(&direct_analysis("e1", "rf-1", Scenario::Considerable, &[]))
        .unwrap();
    assert_eq!(store.list_direct_analyses("rf-1").unwrap().len(), 1);
    assert_eq!(store.list_direct_analyses("rf-1").unwrap().len(), 1);
    assert_eq!(store.inner().reads(), 1);

    store
        .upsert_direct_analysis(&direct_analysis("e2", "rf-1", Scenario::Considerable, &[]))
        .unwrap();
    assert_eq!(store.list_direct_analyses("rf-1").unwrap().len(), 2);

    store
        .update_direct_analysis_field("da-e2-rf-1", "dp_c", Some("DP4".into()))
        .unwrap();
    let listed = store.list_direct_analyses("rf-1").unwrap();
    assert_eq!(
        listed[1].scenarios.get(Scenario::Considerable).get(CodeField::DirectProbability),
        Some("DP4")
    );

    store.delete_direct_analysis("da-e1-rf-1").unwrap();
    assert_eq!(store.list_direct_analyses("rf-1").unwrap().len(), 1);
    assert!(store.get_direct_analysis("da-e1-rf-1").is_err());
}

#[test]
fn failed_reads_are_not_cached() {
    let store = cached();
    assert!(store.get_risk_file("rf-late").is_err());
    store.inner().inner.upsert_risk_file(&risk_file("rf-late")).unwrap();
    assert!(store.get_risk_file("rf-late").is_ok());
}

#[test]
fn clear_forces_reload() {
    let store = cached();
    store.upsert_risk_file(&risk_file("rf-1")).unwrap();
    store.get_risk_file("rf-1").unwrap();
    store.clear();
    store.get_risk_file("rf-1").unwrap();
    assert_eq!(store.inner().reads(), 2);
}

#[test]
fn write_during_load_does_not_leave_stale_entry() {
    let store = cached();
    store.upsert_risk_file(&risk_file("rf-1")).unwrap();

    let (loaded_tx, loaded_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    *store.inner().gate.lock().unwrap() = Some((loaded_tx, release_rx));

    thread::scope(|scope| {
        let reader = scope.spawn(|| store.get_risk_file("rf-1").unwrap());

        // The reader holds the old record; update it before it is cached.
        loaded_rx.recv().unwrap();
        store
            .update_risk_file_field("rf-1", "definition", Some("Storm surge".into()))
            .unwrap();
        release_tx.send(()).unwrap();

        assert!(reader.join().unwrap().definition.is_none());
    });

    assert_eq!(
        store.get_risk_file("rf-1").unwrap().definition.as_deref(),
        Some("Storm surge")
    );
}
