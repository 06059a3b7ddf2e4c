use std::sync::Arc;
use std::time::Duration;

use riskq_core::config::PersistenceConfig;
use riskq_core::errors::StoreError;
use riskq_core::records::{CodeField, RiskType, Scenario};
use riskq_core::traits::{IFieldSink, IRiskDataStore};
use riskq_core::AppContext;
use riskq_store::{InMemoryStore, SinkTarget, StoreFieldSink};
use riskq_wizard::{Debouncer, Flow, Nav, SaveStatus, Wizard};
use test_fixtures::{cascade_analysis, direct_analysis, risk_file};

fn store_with_records() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.upsert_risk_file(&risk_file("rf-1")).unwrap();
    store
        .upsert_direct_analysis(&direct_analysis("e1", "rf-1", Scenario::Considerable, &[]))
        .unwrap();
    store
        .upsert_cascade_analysis(&cascade_analysis("e1", "rf-2", "rf-1", &[]))
        .unwrap();
    store
        .upsert_cascade_analysis(&cascade_analysis("e1", "rf-3", "rf-1", &[]))
        .unwrap();
    store
}

#[test]
fn sink_routes_to_the_bound_record() {
    let store = store_with_records();
    let sink = StoreFieldSink::new(store.clone(), SinkTarget::DirectAnalysis("da-e1-rf-1".into()));

    sink.persist("f_e", Some("FA3")).unwrap();
    let analysis = store.get_direct_analysis("da-e1-rf-1").unwrap();
    assert_eq!(
        analysis.scenarios.get(Scenario::Extreme).get(CodeField::Financial),
        Some("FA3")
    );

    let sink = StoreFieldSink::new(store.clone(), SinkTarget::RiskFile("rf-1".into()));
    sink.persist("definition", Some("Long drought")).unwrap();
    assert_eq!(
        store.get_risk_file("rf-1").unwrap().definition.as_deref(),
        Some("Long drought")
    );
}

#[test]
fn keyed_cascade_sink_addresses_each_analysis() {
    let store = store_with_records();
    let sink = StoreFieldSink::new(store.clone(), SinkTarget::CascadeAnalyses);

    sink.persist(&StoreFieldSink::cascade_key("ca-e1-rf-2-rf-1", "m2e"), Some("CP4"))
        .unwrap();
    sink.persist(&StoreFieldSink::cascade_key("ca-e1-rf-3-rf-1", "quali"), Some("Rare"))
        .unwrap();

    let first = store.get_cascade_analysis("ca-e1-rf-2-rf-1").unwrap();
    assert_eq!(first.matrix.get(Scenario::Major, Scenario::Extreme), Some("CP4"));
    let second = store.get_cascade_analysis("ca-e1-rf-3-rf-1").unwrap();
    assert_eq!(second.quali.as_deref(), Some("Rare"));

    let err = sink.persist("m2e", Some("CP1")).unwrap_err();
    assert!(matches!(err, StoreError::Rejected { .. }));
}

#[tokio::test(start_paused = true)]
async fn debounced_edits_land_in_the_store_once() {
    let store = store_with_records();
    let sink = Arc::new(StoreFieldSink::new(
        store.clone(),
        SinkTarget::DirectAnalysis("da-e1-rf-1".into()),
    ));
    let mut debouncer = Debouncer::new("quali_c", sink, Duration::from_millis(500));

    for value in ["R", "Ri", "Riv", "River"] {
        debouncer.input(Some(value.to_string()));
        tokio::time::sleep(Duration::from_millis(30)).await;
    }
    tokio::time::sleep(Duration::from_millis(600)).await;

    let analysis = store.get_direct_analysis("da-e1-rf-1").unwrap();
    assert_eq!(analysis.quali.get(Scenario::Considerable), Some("River"));
    assert_eq!(debouncer.status(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn offline_store_keeps_value_until_retry() {
    let store = store_with_records();
    let sink = Arc::new(StoreFieldSink::new(store.clone(), SinkTarget::RiskFile("rf-1".into())));
    let mut debouncer = Debouncer::new("definition", sink, Duration::from_millis(500));

    store.set_offline(true);
    debouncer.input(Some("Cold wave".to_string()));
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(matches!(debouncer.status(), SaveStatus::Failed { .. }));

    store.set_offline(false);
    assert!(store.get_risk_file("rf-1").unwrap().definition.is_none());
    debouncer.retry().unwrap();
    assert_eq!(
        store.get_risk_file("rf-1").unwrap().definition.as_deref(),
        Some("Cold wave")
    );
}

#[tokio::test(start_paused = true)]
async fn wizard_navigation_flushes_into_the_store() {
    let store = store_with_records();
    let sink = Arc::new(StoreFieldSink::new(store.clone(), SinkTarget::CascadeAnalyses));
    let mut wizard = Wizard::new(
        Flow::Cascade(RiskType::Standard),
        "rf-1",
        "Risk rf-1",
        sink,
        &PersistenceConfig::default(),
    );
    let mut ctx = AppContext::new();

    wizard.navigate(Nav::Next, &mut ctx).unwrap();
    wizard.input(
        &StoreFieldSink::cascade_key("ca-e1-rf-2-rf-1", "c2c"),
        Some("CP2".to_string()),
    );
    wizard.navigate(Nav::Next, &mut ctx).unwrap();

    let cascade = store.get_cascade_analysis("ca-e1-rf-2-rf-1").unwrap();
    assert_eq!(
        cascade.matrix.get(Scenario::Considerable, Scenario::Considerable),
        Some("CP2")
    );
}
