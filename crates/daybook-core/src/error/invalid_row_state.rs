use super::Error;

/// Error when an operation is not valid for a row's current lifecycle state.
///
/// This occurs when:
/// - A deleted row is mutated, saved, or deleted again
/// - A row that was never inserted is deleted from the database
/// - A row referencing an unsaved parent is written out
#[derive(Debug)]
pub(super) struct InvalidRowState {
    message: Box<str>,
}

impl std::error::Error for InvalidRowState {}

impl core::fmt::Display for InvalidRowState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid row state: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid row state error.
    pub fn invalid_row_state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRowState(InvalidRowState {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid row state error.
    pub fn is_invalid_row_state(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRowState(_))
    }
}
