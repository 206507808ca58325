use super::Error;

/// Error when the number of bound values does not line up with the number of
/// `?` placeholders in a statement.
///
/// Binding past the end is reported at bind time; missing values are reported
/// when the statement is executed.
#[derive(Debug)]
pub(super) struct ParameterCountMismatch {
    expected: usize,
    actual: usize,
}

impl std::error::Error for ParameterCountMismatch {}

impl core::fmt::Display for ParameterCountMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "parameter count mismatch: statement has {} placeholders, got {} values",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a parameter count mismatch error.
    pub fn parameter_count_mismatch(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::ParameterCountMismatch(
            ParameterCountMismatch { expected, actual },
        ))
    }

    /// Returns `true` if this error is a parameter count mismatch.
    pub fn is_parameter_count_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ParameterCountMismatch(_))
    }
}
