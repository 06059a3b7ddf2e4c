use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use riskq_core::config::PersistenceConfig;
use riskq_core::errors::{StoreError, WizardError};
use riskq_core::traits::IFieldSink;
use riskq_core::{AppContext, Breadcrumb};

use crate::form::StepForm;
use crate::step::{transition, Flow, Nav, Step};

/// Result of a navigation: the step now shown, plus any saves that were
/// rejected while flushing the step that was left.
#[derive(Debug)]
pub struct NavigationOutcome {
    pub step: Step,
    pub save_failures: Vec<(String, StoreError)>,
}

/// A running wizard for one risk file.
pub struct Wizard {
    flow: Flow,
    current: Step,
    risk_file_id: String,
    risk_file_title: String,
    sink: Arc<dyn IFieldSink>,
    delay: Duration,
    forms: HashMap<Step, StepForm>,
}

impl Wizard {
    pub fn new(
        flow: Flow,
        risk_file_id: impl Into<String>,
        risk_file_title: impl Into<String>,
        sink: Arc<dyn IFieldSink>,
        config: &PersistenceConfig,
    ) -> Self {
        Self {
            flow,
            current: flow.first(),
            risk_file_id: risk_file_id.into(),
            risk_file_title: risk_file_title.into(),
            sink,
            delay: Duration::from_millis(config.debounce_ms),
            forms: HashMap::new(),
        }
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn steps(&self) -> Vec<Step> {
        self.flow.steps()
    }

    /// 0-based position of the current step.
    pub fn position(&self) -> usize {
        self.steps()
            .iter()
            .position(|s| *s == self.current)
            .unwrap_or(0)
    }

    /// Point the page header at the current step.
    pub fn enter(&self, ctx: &mut AppContext) {
        ctx.set_page(
            format!("{}: {}", self.risk_file_title, self.current.label()),
            vec![
                Breadcrumb::new("Risk files", "/risks"),
                Breadcrumb::new(
                    self.risk_file_title.clone(),
                    format!("/risks/{}", self.risk_file_id),
                ),
                Breadcrumb::new(self.current.label(), self.step_url(self.current)),
            ],
        );
    }

    fn step_url(&self, step: Step) -> String {
        let slug = step.label().to_lowercase().replace(' ', "-");
        format!("/risks/{}/analysis/{}", self.risk_file_id, slug)
    }

    /// Route input to a field of the current step.
    pub fn input(&mut self, field: &str, value: Option<String>) {
        let sink = &self.sink;
        let delay = self.delay;
        self.forms
            .entry(self.current)
            .or_insert_with(|| StepForm::new(Arc::clone(sink), delay))
            .input(field, value);
    }

    pub fn form(&self, step: Step) -> Option<&StepForm> {
        self.forms.get(&step)
    }

    pub fn form_mut(&mut self, step: Step) -> Option<&mut StepForm> {
        self.forms.get_mut(&step)
    }

    /// Move one step. The current step's pending saves are flushed before
    /// the move; rejected saves do not block navigation and stay pending
    /// in that step's form.
    #[instrument(skip(self, ctx), fields(flow = self.flow.name(), from = %self.current))]
    pub fn navigate(
        &mut self,
        nav: Nav,
        ctx: &mut AppContext,
    ) -> Result<NavigationOutcome, WizardError> {
        let target = transition(self.flow, self.current, nav)?;

        let save_failures = match self.forms.get_mut(&self.current) {
            Some(form) => form.flush_all(),
            None => Vec::new(),
        };
        for (field, err) in &save_failures {
            warn!(field = %field, error = %err, "save failed while leaving step");
        }

        self.current = target;
        self.enter(ctx);
        info!(to = %target, "wizard step changed");

        Ok(NavigationOutcome {
            step: target,
            save_failures,
        })
    }

    /// Flush every step's pending saves, e.g. before the page unmounts.
    pub fn flush_all(&mut self) -> Vec<(String, StoreError)> {
        self.forms
            .values_mut()
            .flat_map(StepForm::flush_all)
            .collect()
    }
}
