//! # Swap Orchestration
//!
//! - [`workflow`]: the validation → network → allowance → swap → confirm state machine
//! - [`controller`]: glue between the workflow and the view state (single
//!   in-flight guard, status updates, success-label reset)
//! - [`phase`]: in-flight phases and their status labels

pub mod controller;
pub mod phase;
pub mod workflow;

use std::time::Duration;

use async_trait::async_trait;

pub use controller::{SwapController, ViewStore};
pub use phase::SwapPhase;
pub use workflow::SwapWorkflow;

/// Timer used for the success-label reset and the optional pre-submission timeout.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}
