use super::Error;

/// Error when SQL text is appended to a statement builder after its SQL has
/// been finalized for parameter binding.
#[derive(Debug)]
pub(super) struct StatementFinalized;

impl std::error::Error for StatementFinalized {}

impl core::fmt::Display for StatementFinalized {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("SQL statement has already been finalized")
    }
}

impl Error {
    /// Creates a statement finalized error.
    pub fn statement_finalized() -> Error {
        Error::from(super::ErrorKind::StatementFinalized(StatementFinalized))
    }

    /// Returns `true` if this error is a statement finalized error.
    pub fn is_statement_finalized(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::StatementFinalized(_))
    }
}
