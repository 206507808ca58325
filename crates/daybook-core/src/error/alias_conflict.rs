use super::Error;

/// Error when a table alias is already taken within a joined table set.
///
/// Aliases are compared case-insensitively against every alias and table
/// name already present in the set.
#[derive(Debug)]
pub(super) struct AliasConflict {
    alias: Box<str>,
}

impl std::error::Error for AliasConflict {}

impl core::fmt::Display for AliasConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "alias conflict: `{}` is already in use", self.alias)
    }
}

impl Error {
    /// Creates an alias conflict error.
    pub fn alias_conflict(alias: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AliasConflict(AliasConflict {
            alias: alias.into().into(),
        }))
    }

    /// Returns `true` if this error is an alias conflict.
    pub fn is_alias_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AliasConflict(_))
    }
}
