use super::{Formatter, Params, ToSql};

use std::fmt;

/// An identifier, quoted with backticks.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use std::fmt::Write;

        write!(f.dst, "{self}").unwrap();
    }
}

impl<S: AsRef<str>> fmt::Display for Ident<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.0.as_ref())
    }
}
