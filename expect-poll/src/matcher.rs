//! Assertion entry point: `toBeTruthy` over a polled query.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::{DEFAULT_POLL_INTERVAL_MS, ExpectConfig};
use crate::context::TestContext;
use crate::core::deadline::{Budget, compute_deadline};
use crate::core::outcome::{Outcome, OutcomeSnapshot, build_outcome};
use crate::core::truthy::Truthy;
use crate::core::types::MatcherOptions;
use crate::error::MatcherError;
use crate::handle::ExpectTarget;
use crate::poll::{Attempt, poll_until_deadline};
use crate::query::Query;

pub const TO_BE_TRUTHY: &str = "toBeTruthy";

/// Everything an assertion call needs besides the query itself.
#[derive(Debug)]
pub struct ExpectRequest<'a, H: ?Sized> {
    pub matcher_name: &'a str,
    /// Active test; `None` fails the call before any query runs.
    pub context: Option<&'a TestContext>,
    pub target: &'a H,
    pub options: MatcherOptions,
    pub poll_interval: Duration,
}

impl<'a, H: ?Sized> ExpectRequest<'a, H> {
    pub fn new(matcher_name: &'a str, context: Option<&'a TestContext>, target: &'a H) -> Self {
        Self {
            matcher_name,
            context,
            target,
            options: MatcherOptions::default(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    pub fn options(mut self, options: MatcherOptions) -> Self {
        self.options = options;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Take the poll interval from loaded configuration.
    pub fn with_config(self, config: &ExpectConfig) -> Self {
        self.poll_interval(config.poll_interval())
    }
}

/// Wraps the caller's query: applies polarity and keeps the last observed value.
struct TruthyAttempt<'q, Q: Query> {
    query: &'q mut Q,
    matcher_name: &'q str,
    options: MatcherOptions,
    received: Option<Q::Output>,
    attempts: u32,
}

impl<Q> Attempt for TruthyAttempt<'_, Q>
where
    Q: Query,
    Q::Output: Truthy,
{
    async fn attempt(&mut self, budget: Budget) -> Result<bool> {
        self.attempts += 1;
        let attempt = self.attempts;
        let value = self
            .query
            .query(budget)
            .await
            .with_context(|| format!("{} query failed on attempt {attempt}", self.matcher_name))?;
        let matched = self.options.matches(value.is_truthy());
        self.received = Some(value);
        Ok(matched)
    }
}

/// Poll `query` until its truthiness matches the requested polarity or the
/// deadline passes.
///
/// Fails with [`MatcherError`] when there is no active test or the target is
/// invalid; in both cases the query is never invoked. A query error aborts
/// polling and is returned as-is with matcher context. Running out of time is
/// not an error: it yields an [`Outcome`] with `pass = false`.
#[instrument(skip_all, fields(matcher = request.matcher_name, is_not = request.options.is_not))]
pub async fn to_be_truthy<H, Q>(
    request: ExpectRequest<'_, H>,
    mut query: Q,
) -> Result<Outcome<Q::Output>>
where
    H: ExpectTarget + ?Sized,
    Q: Query,
    Q::Output: Truthy,
{
    let ExpectRequest {
        matcher_name,
        context,
        target,
        options,
        poll_interval,
    } = request;

    let context = context.ok_or_else(|| MatcherError::missing_context(matcher_name))?;
    target.check(matcher_name)?;

    let start = Instant::now();
    let (timeout, deadline) = compute_deadline(context.timeout, options.timeout, start);
    debug!(
        test = %context.title,
        timeout = ?timeout,
        "deadline resolved"
    );

    let mut attempt = TruthyAttempt {
        query: &mut query,
        matcher_name,
        options,
        received: None,
        attempts: 0,
    };
    let pass = poll_until_deadline(&mut attempt, deadline, poll_interval).await?;
    let elapsed = start.elapsed();

    debug!(
        pass,
        attempts = attempt.attempts,
        elapsed = ?elapsed,
        "assertion finished"
    );

    // The loop only stops without a match once a bounded deadline expired.
    let snapshot = OutcomeSnapshot {
        matcher_name: matcher_name.to_string(),
        options,
        received: attempt.received,
        attempts: attempt.attempts,
        elapsed,
        timeout,
        timed_out: !pass,
    };
    Ok(build_outcome(pass, snapshot))
}
