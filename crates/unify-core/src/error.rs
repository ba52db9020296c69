use thiserror::Error;

/// Errors surfaced by unify-core outside the per-record mapping path.
///
/// Mapping itself never fails: a record that cannot be unified becomes a
/// [`Rejection`](crate::Rejection), not an error.
#[derive(Debug, Error)]
pub enum UnifyError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("unknown rejected payload policy '{0}'; expected 'retain' or 'drop'")]
    PayloadPolicy(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
