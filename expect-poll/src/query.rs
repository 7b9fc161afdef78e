//! Query contract: read the current state of the target under a time budget.
//!
//! Queries are invoked repeatedly, once per poll attempt, and never stored
//! past the assertion call. An `Err` aborts the assertion.

use std::future::Future;

use anyhow::Result;

use crate::core::deadline::Budget;

pub trait Query {
    type Output;

    fn query(&mut self, budget: Budget) -> impl Future<Output = Result<Self::Output>>;
}

impl<F, Fut, T> Query for F
where
    F: FnMut(Budget) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    type Output = T;

    fn query(&mut self, budget: Budget) -> impl Future<Output = Result<T>> {
        self(budget)
    }
}
