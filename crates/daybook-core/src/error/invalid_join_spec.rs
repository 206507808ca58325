use super::Error;

/// Error when a join specification is malformed.
///
/// This occurs when:
/// - A join alias is blank
/// - A join column does not belong to the table it is supposed to join
/// - The parent node of a join does not exist in the table set
#[derive(Debug)]
pub(super) struct InvalidJoinSpec {
    message: Box<str>,
}

impl std::error::Error for InvalidJoinSpec {}

impl core::fmt::Display for InvalidJoinSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid join: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid join spec error.
    pub fn invalid_join_spec(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidJoinSpec(InvalidJoinSpec {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid join spec.
    pub fn is_invalid_join_spec(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidJoinSpec(_))
    }
}
