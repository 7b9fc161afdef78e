//! Element-state matchers built on [`to_be_truthy`].
//!
//! Each state maps to a named matcher (`toBeChecked`, `toBeVisible`, ...)
//! whose query asks the target whether it is currently in that state.

use std::fmt;
use std::future::Future;

use anyhow::Result;
use tracing::debug;

use crate::core::deadline::Budget;
use crate::core::outcome::Outcome;
use crate::handle::ExpectTarget;
use crate::matcher::{ExpectRequest, to_be_truthy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    Checked,
    Unchecked,
    Disabled,
    Enabled,
    Editable,
    Empty,
    Hidden,
    Visible,
    Focused,
}

impl ElementState {
    pub const ALL: [ElementState; 9] = [
        ElementState::Checked,
        ElementState::Unchecked,
        ElementState::Disabled,
        ElementState::Enabled,
        ElementState::Editable,
        ElementState::Empty,
        ElementState::Hidden,
        ElementState::Visible,
        ElementState::Focused,
    ];

    pub fn matcher_name(self) -> &'static str {
        match self {
            ElementState::Checked => "toBeChecked",
            ElementState::Unchecked => "toBeUnchecked",
            ElementState::Disabled => "toBeDisabled",
            ElementState::Enabled => "toBeEnabled",
            ElementState::Editable => "toBeEditable",
            ElementState::Empty => "toBeEmpty",
            ElementState::Hidden => "toBeHidden",
            ElementState::Visible => "toBeVisible",
            ElementState::Focused => "toBeFocused",
        }
    }
}

impl fmt::Display for ElementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementState::Checked => "checked",
            ElementState::Unchecked => "unchecked",
            ElementState::Disabled => "disabled",
            ElementState::Enabled => "enabled",
            ElementState::Editable => "editable",
            ElementState::Empty => "empty",
            ElementState::Hidden => "hidden",
            ElementState::Visible => "visible",
            ElementState::Focused => "focused",
        };
        f.write_str(name)
    }
}

/// A target that can report whether it is currently in a given state.
pub trait StateQuery: ExpectTarget {
    /// `budget` bounds how long the target may wait for the element itself.
    fn query_state(
        &self,
        state: ElementState,
        budget: Budget,
    ) -> impl Future<Output = Result<bool>>;
}

/// Assert that `request.target` reaches `state` (or leaves it, when negated).
///
/// The request's matcher name is replaced by the state's matcher name.
pub async fn expect_state<L>(
    request: ExpectRequest<'_, L>,
    state: ElementState,
) -> Result<Outcome<bool>>
where
    L: StateQuery,
{
    let target = request.target;
    debug!(%state, is_not = request.options.is_not, "state assertion");
    let request = ExpectRequest {
        matcher_name: state.matcher_name(),
        ..request
    };
    to_be_truthy(request, move |budget: Budget| {
        target.query_state(state, budget)
    })
    .await
}
