use std::fmt;

/// Lifecycle state of a [`Row`](crate::Row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// The row was deleted, locally or from the database.
    Deleted,
    /// The row exists in the database and carries unsaved changes.
    Modified,
    /// The row was created locally and has never been saved.
    New,
    /// The row mirrors the database.
    Unmodified,
}

impl RowState {
    /// Returns true when the row has a database-assigned identity.
    pub fn is_persisted(self) -> bool {
        matches!(self, RowState::Modified | RowState::Unmodified)
    }
}

impl fmt::Display for RowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowState::Deleted => "DELETED".fmt(f),
            RowState::Modified => "MODIFIED".fmt(f),
            RowState::New => "NEW".fmt(f),
            RowState::Unmodified => "UNMODIFIED".fmt(f),
        }
    }
}
