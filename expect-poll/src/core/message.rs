//! Pure formatting of assertion hints and failure messages.

use std::fmt::{Debug, Write};

use crate::core::outcome::OutcomeSnapshot;
use crate::core::types::MatcherOptions;

/// Render `expect(received)[.resolves|.rejects][.not].<matcher_name>()`.
pub fn matcher_hint(matcher_name: &str, options: &MatcherOptions) -> String {
    let not = if options.is_not { ".not" } else { "" };
    format!(
        "expect(received){}{not}.{matcher_name}()",
        options.promise.hint_segment()
    )
}

/// Render the diagnostic for a finished assertion from its snapshot.
pub fn failure_message<T: Debug>(snapshot: &OutcomeSnapshot<T>) -> String {
    let mut out = matcher_hint(&snapshot.matcher_name, &snapshot.options);
    out.push_str("\n\n");

    let expected = if snapshot.options.is_not {
        "not truthy"
    } else {
        "truthy"
    };
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Expected: {expected}");
    match &snapshot.received {
        Some(value) => {
            let _ = writeln!(out, "Received: {value:?}");
        }
        None => out.push_str("Received: <no value>\n"),
    }
    if snapshot.timed_out {
        let _ = writeln!(
            out,
            "Timed out {}ms after {} attempt{}",
            snapshot.timeout.as_millis(),
            snapshot.attempts,
            if snapshot.attempts == 1 { "" } else { "s" }
        );
    }
    out.trim_end().to_string()
}
