use thiserror::Error;

/// The only way simplification can fail.
///
/// The variant carries nothing: a caller can learn that an expression was
/// rejected, not why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid expression")]
    InvalidExpression,
}
