//! Debounced persistence of one form field.
//!
//! Every keystroke replaces the pending value and restarts the quiet-period
//! timer; only the value present when the timer fires is saved. `flush`
//! saves immediately, and dropping the debouncer flushes whatever is still
//! pending, so the last value typed is never lost on teardown.
//!
//! Saves of one field never overlap: a flush that races a timer save in
//! flight waits for it, then writes the newer value.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use ts_rs::TS;

use riskq_core::errors::{ErrorCode, StoreError};
use riskq_core::traits::IFieldSink;

/// Save state of one field, published for the inline notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SaveStatus {
    Idle,
    Pending,
    Saving,
    Saved,
    /// The store rejected the save. The value is kept for `retry`.
    Failed { notice: String },
}

#[derive(Default)]
struct DebounceState {
    /// Value waiting to be saved. The inner `None` clears the field.
    pending: Option<Option<String>>,
    /// Latest value typed, saved or not.
    latest: Option<String>,
    /// Bumped on every input; a timer only fires for its own generation.
    generation: u64,
}

struct Shared {
    field: String,
    sink: Arc<dyn IFieldSink>,
    state: Mutex<DebounceState>,
    /// Held across `sink.persist`.
    save: Mutex<()>,
    status: watch::Sender<SaveStatus>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, DebounceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Save the pending value, if any. With `expected_generation`, a timer
    /// that was superseded by newer input does nothing.
    fn persist_pending(&self, expected_generation: Option<u64>) -> Result<(), StoreError> {
        let _save = self.save.lock().unwrap_or_else(PoisonError::into_inner);
        let value = {
            let mut state = self.lock();
            if expected_generation.is_some_and(|g| g != state.generation) {
                return Ok(());
            }
            match state.pending.take() {
                Some(value) => value,
                None => return Ok(()),
            }
        };

        let _span = riskq_core::save_span!(self.field).entered();
        self.status.send_replace(SaveStatus::Saving);
        match self.sink.persist(&self.field, value.as_deref()) {
            Ok(()) => {
                debug!(field = %self.field, "field saved");
                // Newer input may have arrived while saving.
                let next = if self.lock().pending.is_some() {
                    SaveStatus::Pending
                } else {
                    SaveStatus::Saved
                };
                self.status.send_replace(next);
                Ok(())
            }
            Err(err) => {
                warn!(field = %self.field, error = %err, "save rejected, keeping value for retry");
                {
                    let mut state = self.lock();
                    if state.pending.is_none() {
                        state.pending = Some(value);
                    }
                }
                self.status.send_replace(SaveStatus::Failed {
                    notice: err.notice(),
                });
                Err(err)
            }
        }
    }
}

/// Debounced saver for one field.
pub struct Debouncer {
    shared: Arc<Shared>,
    delay: Duration,
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(field: impl Into<String>, sink: Arc<dyn IFieldSink>, delay: Duration) -> Self {
        let (status, _) = watch::channel(SaveStatus::Idle);
        Self {
            shared: Arc::new(Shared {
                field: field.into(),
                sink,
                state: Mutex::new(DebounceState::default()),
                save: Mutex::new(()),
                status,
            }),
            delay,
            timer: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.shared.field
    }

    /// Record new input and restart the quiet-period timer.
    ///
    /// Outside a tokio runtime there is no timer; the value stays pending
    /// until `flush`, `retry` or drop.
    pub fn input(&mut self, value: Option<String>) {
        let generation = {
            let mut state = self.shared.lock();
            state.latest = value.clone();
            state.pending = Some(value);
            state.generation += 1;
            state.generation
        };
        self.shared.status.send_replace(SaveStatus::Pending);

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let shared = Arc::clone(&self.shared);
            let deadline = tokio::time::Instant::now() + self.delay;
            self.timer = Some(handle.spawn(async move {
                tokio::time::sleep_until(deadline).await;
                // The sink blocks; keep it off the async workers. Failures
                // are published on the status channel.
                let _ = tokio::task::spawn_blocking(move || {
                    shared.persist_pending(Some(generation))
                })
                .await;
            }));
        }
    }

    /// Cancel the timer and save the pending value now.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.shared.persist_pending(None)
    }

    /// Retry a rejected save. Same as `flush`; the rejected value is still
    /// pending unless newer input replaced it.
    pub fn retry(&mut self) -> Result<(), StoreError> {
        self.flush()
    }

    /// True while a value is waiting to be saved.
    pub fn has_pending(&self) -> bool {
        self.shared.lock().pending.is_some()
    }

    /// Latest value typed, whether or not it has been saved.
    pub fn latest(&self) -> Option<String> {
        self.shared.lock().latest.clone()
    }

    pub fn status(&self) -> SaveStatus {
        self.shared.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.shared.status.subscribe()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        if let Err(err) = self.shared.persist_pending(None) {
            warn!(field = %self.shared.field, error = %err, "flush on teardown failed");
        }
    }
}
