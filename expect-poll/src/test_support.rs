//! Test-only helpers: scripted queries, targets and contexts.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};

use crate::context::TestContext;
use crate::core::deadline::Budget;
use crate::error::MatcherError;
use crate::handle::{ExpectTarget, Locator};
use crate::query::Query;
use crate::state::{ElementState, StateQuery};

/// Context for a test named `test` with the given default timeout.
pub fn context(timeout_ms: u64) -> TestContext {
    TestContext::new("test", Duration::from_millis(timeout_ms))
}

/// One scripted query response.
#[derive(Debug, Clone)]
pub enum Step<T> {
    Value(T),
    Error(String),
}

#[derive(Debug)]
struct ScriptState<T> {
    steps: VecDeque<Step<T>>,
    last: Option<T>,
    budgets: Vec<Budget>,
}

/// Query returning queued values in order; the final value repeats once the
/// queue is drained.
///
/// Clones share state, so a test can keep one handle while the assertion
/// consumes another.
#[derive(Debug, Clone)]
pub struct ScriptedQuery<T> {
    state: Arc<Mutex<ScriptState<T>>>,
    latency: Duration,
}

impl<T: Clone> ScriptedQuery<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self::from_steps(values.into_iter().map(Step::Value).collect())
    }

    pub fn from_steps(steps: Vec<Step<T>>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScriptState {
                steps: steps.into(),
                last: None,
                budgets: Vec::new(),
            })),
            latency: Duration::ZERO,
        }
    }

    /// Sleep this long inside every invocation before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.lock().budgets.len()
    }

    /// Budgets received, in invocation order.
    pub fn budgets(&self) -> Vec<Budget> {
        self.lock().budgets.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState<T>> {
        self.state.lock().expect("script state lock")
    }

    fn next(&self, budget: Budget) -> Result<T> {
        let mut state = self.lock();
        state.budgets.push(budget);
        match state.steps.pop_front() {
            Some(Step::Value(value)) => {
                state.last = Some(value.clone());
                Ok(value)
            }
            Some(Step::Error(message)) => Err(anyhow!(message)),
            None => state
                .last
                .clone()
                .ok_or_else(|| anyhow!("scripted query has no values")),
        }
    }
}

impl<T: Clone> Query for ScriptedQuery<T> {
    type Output = T;

    async fn query(&mut self, budget: Budget) -> Result<T> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.next(budget)
    }
}

/// Locator that answers every state query from a scripted sequence.
#[derive(Debug, Clone)]
pub struct ScriptedLocator {
    pub locator: Locator,
    answers: ScriptedQuery<bool>,
    requests: Arc<Mutex<Vec<(ElementState, Budget)>>>,
}

impl ScriptedLocator {
    pub fn new(selector: &str, answers: Vec<bool>) -> Self {
        Self {
            locator: Locator::new(selector),
            answers: ScriptedQuery::new(answers),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<(ElementState, Budget)> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl ExpectTarget for ScriptedLocator {
    fn check(&self, matcher_name: &str) -> Result<(), MatcherError> {
        self.locator.check(matcher_name)
    }
}

impl StateQuery for ScriptedLocator {
    async fn query_state(&self, state: ElementState, budget: Budget) -> Result<bool> {
        self.requests
            .lock()
            .expect("requests lock")
            .push((state, budget));
        self.answers.next(budget)
    }
}
