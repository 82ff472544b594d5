//! Browser timer for the core workflow.

use std::time::Duration;

use async_trait::async_trait;
use lib_core::swap::Delay;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
