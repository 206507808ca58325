use super::Error;

use std::fmt;

/// An ad-hoc error built from a format string.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl std::error::Error for AdhocError {}

impl fmt::Display for AdhocError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from format arguments.
    ///
    /// Prefer the [`err!`](crate::err!) and [`bail!`](crate::bail!) macros
    /// over calling this directly.
    pub fn from_args(args: fmt::Arguments<'_>) -> Error {
        let message = match args.as_str() {
            Some(message) => message.into(),
            None => args.to_string().into_boxed_str(),
        };
        Error::from(super::ErrorKind::Adhoc(AdhocError { message }))
    }
}
