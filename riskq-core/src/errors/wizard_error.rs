use super::error_code::{self, ErrorCode};

/// Wizard navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("no {direction} step after {step} in the {flow} flow")]
    NoTransition {
        flow: String,
        step: String,
        direction: &'static str,
    },

    #[error("step {step} is not part of the {flow} flow")]
    StepNotInFlow { flow: String, step: String },
}

impl ErrorCode for WizardError {
    fn error_code(&self) -> &'static str {
        error_code::WIZARD_ERROR
    }
}
