//! Tests for the `#[derive(Record)]` and `#[derive(SqlEnum)]` macros.

mod common;

use common::render;
use polysql_core::dialect::{MySqlDialect, SqlServerDialect};
use polysql_core::record::{ColumnSchema, ConvertDirection, Record};
use polysql_core::{param, ColumnRule, Delete, Error, Insert, RawCommand, Select, SqlEnum, Update};
use polysql_derive::{Record, SqlEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
pub enum Status {
    #[sql(description = "Active", string_value = "A")]
    Active = 1,
    #[sql(description = "On hold")]
    Suspended = 2,
    Closed = 9,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Record)]
#[table(name = "Customers")]
pub struct Customer {
    #[column(name = "CustomerId", primary_key)]
    pub id: i64,
    #[column(name = "Name", rule = "use_varchar_type")]
    pub name: String,
    #[column(name = "Status", rule = "enum_description")]
    pub status: Status,
    #[column(name = "Created", direction = "from_db")]
    pub created: Option<String>,
    #[column(skip)]
    pub cache: Vec<u8>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Record)]
pub struct AuditLog {
    pub message: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Record)]
pub struct OnlyKey {
    #[column(primary_key)]
    pub id: i32,
    #[column(direction = "from_db")]
    pub loaded: bool,
}

fn customer() -> Customer {
    Customer {
        id: 42,
        name: String::from("O'Neil"),
        status: Status::Active,
        created: None,
        cache: vec![1, 2, 3],
    }
}

#[test]
fn test_record_schema() {
    assert_eq!(Customer::TABLE, "Customers");
    let names: Vec<&str> = Customer::columns().iter().map(|c| c.name).collect();
    assert_eq!(names, ["CustomerId", "Name", "Status", "Created"]);
    assert_eq!(
        Customer::columns()[0],
        ColumnSchema::new("CustomerId").primary_key()
    );
    assert_eq!(Customer::columns()[1].rule, ColumnRule::USE_VARCHAR_TYPE);
    assert_eq!(Customer::columns()[3].direction, ConvertDirection::FromDb);
}

#[test]
fn test_default_table_name_is_snake_case() {
    assert_eq!(AuditLog::TABLE, "audit_log");
    assert_eq!(AuditLog::columns()[0].name, "message");
}

#[test]
fn test_insert_from_record() {
    let sql = render(&Insert::from_record(&customer()), &SqlServerDialect);
    assert_eq!(
        sql,
        "Insert Into Customers ( CustomerId, Name, Status ) Values ( 42, 'O''Neil', N'Active' )"
    );
}

#[test]
fn test_update_from_record() {
    let update = Update::from_record(&customer()).unwrap();
    assert_eq!(
        render(&update, &MySqlDialect),
        "Update Customers Set \"Name\" = 'O''Neil', \"Status\" = 'Active' Where CustomerId = 42"
    );
}

#[test]
fn test_delete_from_record() {
    let delete = Delete::from_record(&customer()).unwrap();
    assert_eq!(
        render(&delete, &SqlServerDialect),
        "Delete From Customers Where CustomerId = 42"
    );
}

#[test]
fn test_select_from_record() {
    let select = Select::from_record::<Customer>().where_one("CustomerId", 42);
    assert_eq!(
        render(&select, &SqlServerDialect),
        "Select CustomerId, Name, Status, Created From Customers Where CustomerId = 42"
    );
}

#[test]
fn test_missing_primary_key() {
    let log = AuditLog {
        message: String::from("x"),
    };
    assert_eq!(
        Delete::from_record(&log).unwrap_err(),
        Error::MissingPrimaryKey {
            table: String::from("audit_log")
        }
    );
    assert!(matches!(
        Update::from_record(&log),
        Err(Error::MissingPrimaryKey { .. })
    ));
}

#[test]
fn test_no_assignable_columns() {
    let row = OnlyKey { id: 1, loaded: true };
    assert_eq!(
        Update::from_record(&row).unwrap_err(),
        Error::NoAssignableColumns {
            table: String::from("only_key")
        }
    );
}

#[test]
fn test_sql_enum_metadata() {
    assert_eq!(Status::Suspended.ordinal(), 2);
    assert_eq!(Status::Closed.name(), "Closed");
    assert_eq!(Status::Active.string_value(), Some("A"));
    assert_eq!(Status::Closed.description(), None);
}

#[test]
fn test_sql_enum_rules() {
    let cmd = RawCommand::new(":Ord :Name :Desc :Tag :Fallback")
        .parameter(param("Ord", Status::Closed))
        .parameter(polysql_core::Parameter::with_rule(
            "Name",
            Status::Suspended,
            ColumnRule::ENUM_TO_STRING,
        ))
        .parameter(polysql_core::Parameter::with_rule(
            "Desc",
            Status::Suspended,
            ColumnRule::ENUM_DESCRIPTION_IGNORE_CASE,
        ))
        .parameter(polysql_core::Parameter::with_rule(
            "Tag",
            Status::Active,
            ColumnRule::ENUM_STRING_VALUE,
        ))
        .parameter(polysql_core::Parameter::with_rule(
            "Fallback",
            Status::Closed,
            ColumnRule::ENUM_STRING_VALUE,
        ));
    assert_eq!(
        render(&cmd, &MySqlDialect),
        "9 'Suspended' 'On hold' 'A' 'Closed'"
    );
}
