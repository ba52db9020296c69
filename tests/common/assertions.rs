//! Domain-specific assertion macros for unify harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! mapping invariant was violated and for *which* input line.

use unify::{MappingOutcome, UnifiedEvent};

// ---------------------------------------------------------------------------
// Outcome assertions
// ---------------------------------------------------------------------------

/// Unwrap an outcome as a unified event, panicking with the rejection
/// reasons otherwise.
///
/// ```rust
/// let event = assert_unified!(outcome);
/// ```
#[macro_export]
macro_rules! assert_unified {
    ($outcome:expr) => {{
        let outcome: &unify::MappingOutcome = &$outcome;
        match outcome {
            unify::MappingOutcome::Unified { event, .. } => event,
            unify::MappingOutcome::Rejected(rejection) => panic!(
                "assert_unified! failed: line {} was rejected.\n  reasons: {:?}",
                rejection.line, rejection.reasons
            ),
        }
    }};
}

/// Assert an outcome is a rejection carrying exactly the given reasons.
///
/// ```rust
/// assert_rejected_with!(outcome, ["missing timestamp"]);
/// ```
#[macro_export]
macro_rules! assert_rejected_with {
    ($outcome:expr, $reasons:expr) => {{
        let outcome: &unify::MappingOutcome = &$outcome;
        match outcome {
            unify::MappingOutcome::Rejected(rejection) => {
                let expected: Vec<String> = $reasons.iter().map(|r| r.to_string()).collect();
                if rejection.reasons != expected {
                    panic!(
                        "assert_rejected_with! failed on line {}:\n  expected: {:?}\n  actual:   {:?}",
                        rejection.line, expected, rejection.reasons
                    );
                }
                rejection
            }
            unify::MappingOutcome::Unified { line, event } => panic!(
                "assert_rejected_with! failed: line {} was unified as {:?}",
                line, event.id
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// Check every invariant a unified event must hold.
pub fn assert_event_invariants(event: &UnifiedEvent) {
    assert!(!event.id.is_empty(), "id must never be empty: {event:?}");
    assert!(
        !event.event_type.trim().is_empty(),
        "eventType must never be empty: {event:?}"
    );
    let ts = unify::unify_core::format_utc(&event.timestamp);
    assert!(ts.ends_with('Z'), "timestamp must end in Z: {ts}");
    assert!(
        chrono::DateTime::parse_from_rfc3339(&ts).is_ok(),
        "timestamp must be ISO-8601: {ts}"
    );
    if let Some(user) = &event.user_id {
        assert!(!user.trim().is_empty(), "userId must never be blank: {event:?}");
        assert_eq!(user.trim(), user, "userId must be trimmed: {event:?}");
        assert!(
            !user.trim().eq_ignore_ascii_case("guest"),
            "userId must never be guest: {event:?}"
        );
    }
}

/// Serialize outcomes exactly as the JSON-lines writer would.
pub fn render(outcomes: &[MappingOutcome]) -> String {
    let mut buf = Vec::new();
    unify::unify_io::writer::write_outcomes_jsonl(&mut buf, outcomes).expect("in-memory write");
    String::from_utf8(buf).expect("serde_json emits UTF-8")
}
