mod count;
pub use count::Count;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

pub use daybook_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    Count(Count),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Returns true when executing the statement produces a result set.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Count(_) | Statement::Select(_))
    }
}
