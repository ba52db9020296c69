//! User extraction. A missing user is a normal outcome, not a failure.
//!
//! Values are trimmed once, up front: the placeholder check and the
//! returned `userId` both see the trimmed form.

use super::{coerce_to_string, first_candidate, Extractor};
use crate::types::RawRecord;

/// Values that stand in for "no real user". Compared case-insensitively.
pub static PLACEHOLDER_USERS: phf::Set<&'static str> = phf::phf_set! { "guest" };

pub fn is_placeholder(user: &str) -> bool {
    PLACEHOLDER_USERS.contains(user.to_lowercase().as_str())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UserExtractor;

impl Extractor for UserExtractor {
    type Output = String;

    fn extract(&self, record: &RawRecord, candidates: &[String]) -> Option<String> {
        first_candidate(record, candidates, |value| {
            coerce_to_string(value)
                .map(|user| user.trim().to_string())
                .filter(|user| !is_placeholder(user))
        })
    }
}
