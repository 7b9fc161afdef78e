//! Deadline resolution and remaining time budgets.
//!
//! A zero timeout is the "no bound" sentinel throughout: it never produces a
//! deadline, and an unbounded budget is rendered to queries as zero.

use std::time::Duration;

use tokio::time::Instant;

/// Smallest timeout handed to a query whose bounded budget is already spent.
///
/// Zero is reserved for "unbounded", so an expired budget must stay non-zero.
pub const MIN_BOUNDED_TIMEOUT: Duration = Duration::from_millis(1);

/// Absolute expiry instant for one assertion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    At(Instant),
    Unbounded,
}

/// Time budget handed to a single query attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// No deadline: the query applies its own default wait.
    Unbounded,
    /// Time left until the deadline (zero once it has passed).
    Remaining(Duration),
}

impl Budget {
    /// Render the budget using the `0 = no bound` timeout convention.
    pub fn as_timeout(self) -> Duration {
        match self {
            Budget::Unbounded => Duration::ZERO,
            Budget::Remaining(remaining) => remaining.max(MIN_BOUNDED_TIMEOUT),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Budget::Unbounded)
    }
}

impl Deadline {
    /// Remaining budget at `now`, saturating at zero.
    pub fn budget(self, now: Instant) -> Budget {
        match self {
            Deadline::At(at) => Budget::Remaining(at.saturating_duration_since(now)),
            Deadline::Unbounded => Budget::Unbounded,
        }
    }

    /// Whether a bounded deadline has been reached. Never true when unbounded.
    pub fn is_expired(self, now: Instant) -> bool {
        match self {
            Deadline::At(at) => now >= at,
            Deadline::Unbounded => false,
        }
    }
}

/// Resolve the effective timeout from the caller's option and the context default.
///
/// An explicit zero wins over the default; absence falls back to the default,
/// which may itself be zero.
pub fn resolve_timeout(context_default: Duration, options_timeout: Option<Duration>) -> Duration {
    match options_timeout {
        Some(timeout) => timeout,
        None => context_default,
    }
}

/// Resolve the effective timeout and the deadline it implies at `now`.
pub fn compute_deadline(
    context_default: Duration,
    options_timeout: Option<Duration>,
    now: Instant,
) -> (Duration, Deadline) {
    let timeout = resolve_timeout(context_default, options_timeout);
    if timeout.is_zero() {
        return (timeout, Deadline::Unbounded);
    }
    let deadline = now
        .checked_add(timeout)
        .map_or(Deadline::Unbounded, Deadline::At);
    (timeout, deadline)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn explicit_zero_overrides_context_default() {
        let now = Instant::now();
        let (timeout, deadline) = compute_deadline(SECOND * 5, Some(Duration::ZERO), now);
        assert_eq!(timeout, Duration::ZERO);
        assert_eq!(deadline, Deadline::Unbounded);
    }

    #[test]
    fn explicit_timeout_sets_deadline() {
        let now = Instant::now();
        let (timeout, deadline) = compute_deadline(SECOND * 5, Some(SECOND), now);
        assert_eq!(timeout, SECOND);
        assert_eq!(deadline, Deadline::At(now + SECOND));
    }

    #[test]
    fn missing_timeout_falls_back_to_context() {
        let now = Instant::now();
        let (timeout, deadline) = compute_deadline(SECOND * 5, None, now);
        assert_eq!(timeout, SECOND * 5);
        assert_eq!(deadline, Deadline::At(now + SECOND * 5));
    }

    #[test]
    fn zero_context_default_is_unbounded() {
        let (timeout, deadline) = compute_deadline(Duration::ZERO, None, Instant::now());
        assert_eq!(timeout, Duration::ZERO);
        assert_eq!(deadline, Deadline::Unbounded);
    }

    #[test]
    fn budget_saturates_after_deadline() {
        let now = Instant::now();
        let deadline = Deadline::At(now);
        let later = now + SECOND;
        assert_eq!(deadline.budget(later), Budget::Remaining(Duration::ZERO));
        assert!(deadline.is_expired(later));
        assert!(deadline.is_expired(now));
    }

    #[test]
    fn unbounded_never_expires() {
        let now = Instant::now();
        assert!(!Deadline::Unbounded.is_expired(now + SECOND * 3600));
        assert_eq!(Deadline::Unbounded.budget(now), Budget::Unbounded);
    }

    #[test]
    fn expired_budget_is_not_rendered_as_unbounded() {
        assert_eq!(Budget::Unbounded.as_timeout(), Duration::ZERO);
        assert_eq!(
            Budget::Remaining(Duration::ZERO).as_timeout(),
            MIN_BOUNDED_TIMEOUT
        );
        assert_eq!(Budget::Remaining(SECOND).as_timeout(), SECOND);
    }
}
