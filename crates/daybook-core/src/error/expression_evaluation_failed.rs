use super::Error;

/// Error when expression evaluation fails.
///
/// This occurs when:
/// - A column reference cannot be resolved against the input row
/// - An ordered comparison involves NULL or incompatible types
/// - A pattern is applied to a non-string value
///
/// These are runtime evaluation failures, not syntax errors.
#[derive(Debug)]
pub(super) struct ExpressionEvaluationFailed {
    message: Box<str>,
}

impl std::error::Error for ExpressionEvaluationFailed {}

impl core::fmt::Display for ExpressionEvaluationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "expression evaluation failed: {}", self.message)
    }
}

impl Error {
    /// Creates an expression evaluation failed error.
    pub fn expression_evaluation_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ExpressionEvaluationFailed(
            ExpressionEvaluationFailed {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an expression evaluation failure.
    pub fn is_expression_evaluation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExpressionEvaluationFailed(_))
    }
}
