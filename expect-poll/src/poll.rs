//! Fixed-interval poll loop bounded by a deadline.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::core::deadline::{Budget, Deadline};

/// One attempt of the loop. Returns `true` when polling should stop.
pub trait Attempt {
    fn attempt(&mut self, budget: Budget) -> impl Future<Output = Result<bool>>;
}

/// Run `attempt` until it reports a match or the deadline passes.
///
/// The remaining budget is recomputed before every attempt. At least one
/// attempt is made even when the deadline is already in the past, and expiry
/// is only checked after an attempt completes. With [`Deadline::Unbounded`]
/// the loop runs until a match. An attempt error stops the loop immediately.
pub async fn poll_until_deadline<A: Attempt>(
    attempt: &mut A,
    deadline: Deadline,
    interval: Duration,
) -> Result<bool> {
    let mut attempts = 0u32;
    loop {
        let budget = deadline.budget(Instant::now());
        attempts += 1;
        debug!(attempt = attempts, budget = ?budget, "poll attempt");

        if attempt.attempt(budget).await? {
            debug!(attempts, "poll matched");
            return Ok(true);
        }
        if deadline.is_expired(Instant::now()) {
            debug!(attempts, "poll deadline reached");
            return Ok(false);
        }
        sleep(interval).await;
    }
}
