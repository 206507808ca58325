use super::{Formatter, Params};

/// A piece of a statement that writes itself into the output buffer.
pub(super) trait ToSql {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>);
}

impl ToSql for &str {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(self);
    }
}

// Renders each juxtaposed fragment in order:
// `fmt!(f, "DELETE FROM " table_name)`.
macro_rules! fmt {
    ($f:expr, $( $fragment:expr )+) => {{
        $(
            $fragment.to_sql($f);
        )+
    }};
}
