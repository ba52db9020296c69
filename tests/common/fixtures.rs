//! Static record corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of JSON lines, shaped after the
//! kinds of producers unify has to cope with: app telemetry, payment
//! vendors, crashing devices, and lines with nothing usable.

/// Events from unrelated producers, each naming its fields differently.
pub const CORPUS_HETEROGENEOUS: &[&str] = &[
    r#"{"id":"evt-001","timestamp":"2024-08-01T10:00:00Z","event_type":"page_view","user_id":"u-17","path":"/home"}"#,
    r#"{"transaction_id":"txn-9","created_at":1722506400000,"transaction_type":"purchase","customer_id":"alice","payment_method":"card","amount":42.5}"#,
    r#"{"device_id":"dev-3","time":1722506400,"error":"NullPointerException","stack_trace":"at Main.run(Main.java:10)"}"#,
    r#"{"uid":"e-4","date":"2024-08-01 10:00:00","action":"logout","user":"guest"}"#,
    r#"{"session":"s-5","is_login":true,"occurred_time":"2024-08-01T12:00:00+02:00","username":"bob"}"#,
    r#"{"message":"free text with nothing canonical"}"#,
    r#"{"order_details":{"sku":"A-1"},"timestamp":"invalid-date","type":"order"}"#,
];

/// Records with no id-like field at all.
pub const CORPUS_NO_IDS: &[&str] = &[
    r#"{"time":1722506400,"action":"open"}"#,
    r#"{"time":1722506460,"action":"close"}"#,
];

/// A corpus with decode failures sprinkled in, as it would arrive on disk.
pub const CORPUS_WITH_GARBAGE: &str = r#"{"id":"a","time":1722506400,"type":"x"}
this is not json

{"id":"b","time":"2024-08-01T10:01:00Z","type":"y"}
[1,2,3]
{"id":"c","note":"no time, no type"}
"#;

/// Generate `n` synthetic records cycling through producer shapes, for
/// throughput and idempotence checks.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 4 {
            0 => format!(
                r#"{{"id":"evt-{i}","timestamp":{},"event_type":"tick","user_id":"u-{}"}}"#,
                1_722_506_400 + i,
                i % 7
            ),
            1 => format!(
                r#"{{"transaction_id":"txn-{i}","created_at":{},"transaction_type":"refund","customer_id":"guest"}}"#,
                1_722_506_400_000u64 + i as u64
            ),
            2 => format!(
                r#"{{"error":"boom {i}","stack_trace":"frame","time":"2024-08-01 10:00:00"}}"#
            ),
            _ => format!(r#"{{"note":"unusable {i}"}}"#),
        })
        .collect()
}
