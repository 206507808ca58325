//! The fixed schema catalog for the scheduling database.
//!
//! Six tables, each carrying the same four audit columns after its entity
//! data. Column order is part of the contract: primary key first, entity
//! data in declared order, then `createDate`, `createdBy`, `lastUpdate`,
//! `lastUpdateBy`. The per-table modules expose `ColumnId` constants that
//! line up with what [`schema()`] builds.

use crate::{
    schema::{Column, ColumnId, ColumnUsage, Schema, Table, TableId},
    stmt::Type,
};

pub mod country {
    use crate::schema::{ColumnId, TableId};

    pub const TABLE: TableId = TableId(0);
    pub const ID: ColumnId = ColumnId { table: TABLE, index: 0 };
    pub const COUNTRY: ColumnId = ColumnId { table: TABLE, index: 1 };
    pub const CREATE_DATE: ColumnId = ColumnId { table: TABLE, index: 2 };
    pub const CREATED_BY: ColumnId = ColumnId { table: TABLE, index: 3 };
    pub const LAST_UPDATE: ColumnId = ColumnId { table: TABLE, index: 4 };
    pub const LAST_UPDATE_BY: ColumnId = ColumnId { table: TABLE, index: 5 };
}

pub mod city {
    use crate::schema::{ColumnId, TableId};

    pub const TABLE: TableId = TableId(1);
    pub const ID: ColumnId = ColumnId { table: TABLE, index: 0 };
    pub const CITY: ColumnId = ColumnId { table: TABLE, index: 1 };
    pub const COUNTRY_ID: ColumnId = ColumnId { table: TABLE, index: 2 };
    pub const CREATE_DATE: ColumnId = ColumnId { table: TABLE, index: 3 };
    pub const CREATED_BY: ColumnId = ColumnId { table: TABLE, index: 4 };
    pub const LAST_UPDATE: ColumnId = ColumnId { table: TABLE, index: 5 };
    pub const LAST_UPDATE_BY: ColumnId = ColumnId { table: TABLE, index: 6 };
}

pub mod address {
    use crate::schema::{ColumnId, TableId};

    pub const TABLE: TableId = TableId(2);
    pub const ID: ColumnId = ColumnId { table: TABLE, index: 0 };
    pub const ADDRESS: ColumnId = ColumnId { table: TABLE, index: 1 };
    pub const ADDRESS2: ColumnId = ColumnId { table: TABLE, index: 2 };
    pub const CITY_ID: ColumnId = ColumnId { table: TABLE, index: 3 };
    pub const POSTAL_CODE: ColumnId = ColumnId { table: TABLE, index: 4 };
    pub const PHONE: ColumnId = ColumnId { table: TABLE, index: 5 };
    pub const CREATE_DATE: ColumnId = ColumnId { table: TABLE, index: 6 };
    pub const CREATED_BY: ColumnId = ColumnId { table: TABLE, index: 7 };
    pub const LAST_UPDATE: ColumnId = ColumnId { table: TABLE, index: 8 };
    pub const LAST_UPDATE_BY: ColumnId = ColumnId { table: TABLE, index: 9 };
}

pub mod customer {
    use crate::schema::{ColumnId, TableId};

    pub const TABLE: TableId = TableId(3);
    pub const ID: ColumnId = ColumnId { table: TABLE, index: 0 };
    pub const NAME: ColumnId = ColumnId { table: TABLE, index: 1 };
    pub const ADDRESS_ID: ColumnId = ColumnId { table: TABLE, index: 2 };
    pub const ACTIVE: ColumnId = ColumnId { table: TABLE, index: 3 };
    pub const CREATE_DATE: ColumnId = ColumnId { table: TABLE, index: 4 };
    pub const CREATED_BY: ColumnId = ColumnId { table: TABLE, index: 5 };
    pub const LAST_UPDATE: ColumnId = ColumnId { table: TABLE, index: 6 };
    pub const LAST_UPDATE_BY: ColumnId = ColumnId { table: TABLE, index: 7 };
}

pub mod user {
    use crate::schema::{ColumnId, TableId};

    pub const TABLE: TableId = TableId(4);
    pub const ID: ColumnId = ColumnId { table: TABLE, index: 0 };
    pub const NAME: ColumnId = ColumnId { table: TABLE, index: 1 };
    pub const PASSWORD: ColumnId = ColumnId { table: TABLE, index: 2 };
    pub const ACTIVE: ColumnId = ColumnId { table: TABLE, index: 3 };
    pub const CREATE_DATE: ColumnId = ColumnId { table: TABLE, index: 4 };
    pub const CREATED_BY: ColumnId = ColumnId { table: TABLE, index: 5 };
    pub const LAST_UPDATE: ColumnId = ColumnId { table: TABLE, index: 6 };
    pub const LAST_UPDATE_BY: ColumnId = ColumnId { table: TABLE, index: 7 };
}

pub mod appointment {
    use crate::schema::{ColumnId, TableId};

    pub const TABLE: TableId = TableId(5);
    pub const ID: ColumnId = ColumnId { table: TABLE, index: 0 };
    pub const CUSTOMER_ID: ColumnId = ColumnId { table: TABLE, index: 1 };
    pub const USER_ID: ColumnId = ColumnId { table: TABLE, index: 2 };
    pub const TITLE: ColumnId = ColumnId { table: TABLE, index: 3 };
    pub const DESCRIPTION: ColumnId = ColumnId { table: TABLE, index: 4 };
    pub const LOCATION: ColumnId = ColumnId { table: TABLE, index: 5 };
    pub const CONTACT: ColumnId = ColumnId { table: TABLE, index: 6 };
    pub const TYPE: ColumnId = ColumnId { table: TABLE, index: 7 };
    pub const URL: ColumnId = ColumnId { table: TABLE, index: 8 };
    pub const START: ColumnId = ColumnId { table: TABLE, index: 9 };
    pub const END: ColumnId = ColumnId { table: TABLE, index: 10 };
    pub const CREATE_DATE: ColumnId = ColumnId { table: TABLE, index: 11 };
    pub const CREATED_BY: ColumnId = ColumnId { table: TABLE, index: 12 };
    pub const LAST_UPDATE: ColumnId = ColumnId { table: TABLE, index: 13 };
    pub const LAST_UPDATE_BY: ColumnId = ColumnId { table: TABLE, index: 14 };
}

/// Builds the catalog.
pub fn schema() -> Schema {
    Schema {
        tables: vec![
            table(country::TABLE, "country", "n", |t| {
                t.primary_key("countryId");
                t.data("country", Type::Varchar(50));
            }),
            table(city::TABLE, "city", "c", |t| {
                t.primary_key("cityId");
                t.data("city", Type::Varchar(50));
                t.foreign_key("countryId", country::ID);
            }),
            table(address::TABLE, "address", "a", |t| {
                t.primary_key("addressId");
                t.data("address", Type::Varchar(50));
                t.data("address2", Type::Varchar(50));
                t.foreign_key("cityId", city::ID);
                t.data("postalCode", Type::Varchar(10));
                t.data("phone", Type::Varchar(20));
            }),
            table(customer::TABLE, "customer", "p", |t| {
                t.primary_key("customerId");
                t.unique("customerName", Type::Varchar(45));
                t.foreign_key("addressId", address::ID);
                t.data("active", Type::Bool);
            }),
            table(user::TABLE, "user", "u", |t| {
                t.primary_key("userId");
                t.unique("userName", Type::Varchar(50));
                t.data("password", Type::Varchar(50));
                t.data("active", Type::Int);
            }),
            table(appointment::TABLE, "appointment", "e", |t| {
                t.primary_key("appointmentId");
                t.foreign_key("customerId", customer::ID);
                t.foreign_key("userId", user::ID);
                t.data("title", Type::Varchar(255));
                t.data("description", Type::Text);
                t.data("location", Type::Text);
                t.data("contact", Type::Text);
                t.data("type", Type::Text);
                t.data("url", Type::Varchar(255));
                t.data("start", Type::DateTime);
                t.data("end", Type::DateTime);
            }),
        ],
    }
}

struct TableBuilder {
    table: Table,
}

fn table(id: TableId, name: &str, alias: &str, build: impl FnOnce(&mut TableBuilder)) -> Table {
    let placeholder = ColumnId::placeholder(id);
    let mut builder = TableBuilder {
        table: Table {
            id,
            name: name.to_string(),
            alias: alias.to_string(),
            columns: vec![],
            primary_key: placeholder,
            create_date: placeholder,
            created_by: placeholder,
            last_update: placeholder,
            last_update_by: placeholder,
        },
    };
    build(&mut builder);
    builder.audit();
    builder.table
}

impl TableBuilder {
    // Every table in this database generates its keys.
    fn primary_key(&mut self, name: &str) {
        let id = self.push(name, Type::Int, ColumnUsage::PrimaryKey, true, None);
        self.table.primary_key = id;
    }

    fn data(&mut self, name: &str, ty: Type) {
        self.push(name, ty, ColumnUsage::Data, false, None);
    }

    fn unique(&mut self, name: &str, ty: Type) {
        self.push(name, ty, ColumnUsage::UniqueKey, false, None);
    }

    fn foreign_key(&mut self, name: &str, references: ColumnId) {
        self.push(name, Type::Int, ColumnUsage::ForeignKey, false, Some(references));
    }

    fn audit(&mut self) {
        self.table.create_date = self.push("createDate", Type::DateTime, ColumnUsage::Audit, false, None);
        self.table.created_by = self.push("createdBy", Type::Varchar(40), ColumnUsage::Audit, false, None);
        self.table.last_update = self.push("lastUpdate", Type::Timestamp, ColumnUsage::Audit, false, None);
        self.table.last_update_by = self.push("lastUpdateBy", Type::Varchar(40), ColumnUsage::Audit, false, None);
    }

    fn push(
        &mut self,
        name: &str,
        ty: Type,
        usage: ColumnUsage,
        auto_increment: bool,
        references: Option<ColumnId>,
    ) -> ColumnId {
        let id = ColumnId {
            table: self.table.id,
            index: self.table.columns.len(),
        };
        self.table.columns.push(Column {
            id,
            name: name.to_string(),
            ty,
            nullable: false,
            auto_increment,
            usage,
            references,
        });
        id
    }
}
