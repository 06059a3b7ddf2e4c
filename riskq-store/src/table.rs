use dashmap::DashMap;

use riskq_core::errors::StoreError;
use riskq_core::traits::Record;

/// One record collection, keyed by record id.
pub(crate) struct Table<R: Record> {
    rows: DashMap<String, R>,
}

impl<R: Record> Table<R> {
    pub(crate) fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    pub(crate) fn get(&self, id: &str) -> Result<R, StoreError> {
        self.rows
            .get(id)
            .map(|r| r.clone())
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Rows matching `pred`, sorted by id so listings are stable.
    pub(crate) fn list_by(&self, pred: impl Fn(&R) -> bool) -> Vec<R> {
        let mut rows: Vec<R> = self
            .rows
            .iter()
            .filter(|r| pred(r.value()))
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by(|a, b| a.id().cmp(b.id()));
        rows
    }

    pub(crate) fn upsert(&self, record: &R) {
        self.rows.insert(record.id().to_string(), record.clone());
    }

    /// Write one field in place. Unknown fields and invalid values are
    /// rejected and leave the row unchanged.
    pub(crate) fn update_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        let mut row = self.rows.get_mut(id).ok_or_else(|| not_found::<R>(id))?;
        row.set_field(field, value)
            .map_err(|err| StoreError::Rejected {
                entity: R::ENTITY,
                id: id.to_string(),
                reason: err.to_string(),
            })
    }

    pub(crate) fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.rows
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found::<R>(id))
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

pub(crate) fn not_found<R: Record>(id: &str) -> StoreError {
    StoreError::NotFound {
        entity: R::ENTITY,
        id: id.to_string(),
    }
}
