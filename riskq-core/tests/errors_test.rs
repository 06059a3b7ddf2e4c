use riskq_core::errors::*;

#[test]
fn store_not_found_carries_entity_and_id() {
    let err = StoreError::NotFound {
        entity: "risk_file",
        id: "rf-42".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("risk_file"));
    assert!(msg.contains("rf-42"));
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[test]
fn store_rejection_has_store_code() {
    let err = StoreError::Rejected {
        entity: "direct_analysis",
        id: "da-1".into(),
        reason: "read-only".into(),
    };
    assert_eq!(err.error_code(), "STORE_ERROR");
    assert!(err.notice().starts_with("[STORE_ERROR]"));
}

#[test]
fn record_unknown_field_carries_key() {
    let err = RecordError::UnknownField {
        entity: "validation",
        field: "bogus".into(),
    };
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn worker_closed_has_dedicated_code() {
    assert_eq!(WorkerError::Closed.error_code(), "WORKER_CLOSED");
    let failed = WorkerError::ComputationFailed {
        risk_file_id: "rf-1".into(),
        reason: "panic".into(),
    };
    assert_eq!(failed.error_code(), "WORKER_ERROR");
}

#[test]
fn top_level_error_forwards_codes() {
    let err: RiskqError = StoreError::Unavailable {
        reason: "offline".into(),
    }
    .into();
    assert_eq!(err.error_code(), "STORE_ERROR");
    assert!(err.to_string().contains("offline"));

    let err: RiskqError = WizardError::StepNotInFlow {
        flow: "direct".into(),
        step: "attacks".into(),
    }
    .into();
    assert_eq!(err.error_code(), "WIZARD_ERROR");
}
