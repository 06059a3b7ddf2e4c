//! # riskq-wizard
//!
//! The analysis wizards: a tagged step enum with an explicit transition
//! table per flow, and per-step forms whose fields persist through
//! debounced saves that flush on navigation and on teardown.

pub mod debounce;
pub mod form;
pub mod step;
pub mod wizard;

pub use debounce::{Debouncer, SaveStatus};
pub use form::StepForm;
pub use step::{transition, Flow, Nav, Step};
pub use wizard::{NavigationOutcome, Wizard};
