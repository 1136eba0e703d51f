//! Microsoft SQL Server dialect.

use std::sync::LazyLock;

use chrono::NaiveDateTime;

use super::{datetime_millis, Dialect, ReservedWords};
use crate::schema::ColumnRule;

/// SQL Server: bracket quoting and national (`N'...'`) string literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

static RESERVED: LazyLock<ReservedWords> = LazyLock::new(|| ReservedWords::new(RESERVED_WORDS));

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn quote_prefix(&self) -> char {
        '['
    }

    fn quote_suffix(&self) -> char {
        ']'
    }

    fn reserved_words(&self) -> &ReservedWords {
        &RESERVED
    }

    fn format_datetime(&self, value: &NaiveDateTime) -> String {
        format!("'{}'", datetime_millis(value))
    }

    fn format_text(&self, value: &str, rule: ColumnRule) -> String {
        let escaped = value.replace('\'', "''");
        if rule.contains(ColumnRule::USE_VARCHAR_TYPE) {
            format!("'{escaped}'")
        } else {
            format!("N'{escaped}'")
        }
    }
}

const RESERVED_WORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUTHORIZATION", "BACKUP",
    "BEGIN", "BETWEEN", "BREAK", "BROWSE", "BULK", "BY", "CASCADE", "CASE", "CHECK",
    "CHECKPOINT", "CLOSE", "CLUSTERED", "COALESCE", "COLLATE", "COLUMN", "COMMIT",
    "COMPUTE", "CONSTRAINT", "CONTAINS", "CONTAINSTABLE", "CONTINUE", "CONVERT",
    "CREATE", "CROSS", "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
    "CURRENT_USER", "CURSOR", "DATABASE", "DBCC", "DEALLOCATE", "DECLARE", "DEFAULT",
    "DELETE", "DENY", "DESC", "DISK", "DISTINCT", "DISTRIBUTED", "DOUBLE", "DROP",
    "DUMP", "ELSE", "END", "ERRLVL", "ESCAPE", "EXCEPT", "EXEC", "EXECUTE", "EXISTS",
    "EXIT", "EXTERNAL", "FETCH", "FILE", "FILLFACTOR", "FOR", "FOREIGN", "FREETEXT",
    "FREETEXTTABLE", "FROM", "FULL", "FUNCTION", "GOTO", "GRANT", "GROUP", "HAVING",
    "HOLDLOCK", "IDENTITY", "IDENTITYCOL", "IDENTITY_INSERT", "IF", "IN", "INDEX",
    "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "KILL", "LEFT", "LIKE",
    "LINENO", "LOAD", "MERGE", "NATIONAL", "NOCHECK", "NONCLUSTERED", "NOT", "NULL",
    "NULLIF", "OF", "OFF", "OFFSETS", "ON", "OPEN", "OPENDATASOURCE", "OPENQUERY",
    "OPENROWSET", "OPENXML", "OPTION", "OR", "ORDER", "OUTER", "OVER", "PERCENT",
    "PIVOT", "PLAN", "PRECISION", "PRIMARY", "PRINT", "PROC", "PROCEDURE", "PUBLIC",
    "RAISERROR", "READ", "READTEXT", "RECONFIGURE", "REFERENCES", "REPLICATION",
    "RESTORE", "RESTRICT", "RETURN", "REVERT", "REVOKE", "RIGHT", "ROLLBACK",
    "ROWCOUNT", "ROWGUIDCOL", "RULE", "SAVE", "SCHEMA", "SECURITYAUDIT", "SELECT",
    "SEMANTICKEYPHRASETABLE", "SEMANTICSIMILARITYDETAILSTABLE",
    "SEMANTICSIMILARITYTABLE", "SESSION_USER", "SET", "SETUSER", "SHUTDOWN", "SOME",
    "STATISTICS", "SYSTEM_USER", "TABLE", "TABLESAMPLE", "TEXTSIZE", "THEN", "TO",
    "TOP", "TRAN", "TRANSACTION", "TRIGGER", "TRUNCATE", "TRY_CONVERT", "TSEQUAL",
    "UNION", "UNIQUE", "UNPIVOT", "UPDATE", "UPDATETEXT", "USE", "USER", "VALUES",
    "VARYING", "VIEW", "WAITFOR", "WHEN", "WHERE", "WHILE", "WITH",
    "WRITETEXT",
];

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::value::{EnumValue, Value};

    #[test]
    fn test_sqlserver_dialect() {
        let dialect = SqlServerDialect::new();
        assert_eq!(dialect.name(), "sqlserver");
        assert_eq!(dialect.quote_identifier("Order"), "[Order]");
        assert_eq!(dialect.statement_terminator(), ";");
        assert_eq!(dialect.reserved_words().len(), 184);
    }

    #[test]
    fn test_national_strings() {
        let d = SqlServerDialect;
        let text = Value::Text(String::from("O'Brien"));
        assert_eq!(d.format_value(&text, ColumnRule::NONE), "N'O''Brien'");
        assert_eq!(
            d.format_value(&text, ColumnRule::USE_VARCHAR_TYPE),
            "'O''Brien'"
        );
        assert_eq!(d.format_value(&Value::Char('c'), ColumnRule::NONE), "N'c'");
    }

    #[test]
    fn test_enum_strings_follow_varchar_rule() {
        let d = SqlServerDialect;
        let v = Value::Enum(EnumValue::new(1, "Active").with_description("Active"));
        assert_eq!(d.format_value(&v, ColumnRule::ENUM_DESCRIPTION), "N'Active'");
        assert_eq!(
            d.format_value(&v, ColumnRule::ENUM_DESCRIPTION | ColumnRule::USE_VARCHAR_TYPE),
            "'Active'"
        );
        assert_eq!(d.format_value(&v, ColumnRule::USE_VARCHAR_TYPE), "1");
    }

    #[test]
    fn test_bool_and_datetime() {
        let d = SqlServerDialect;
        assert_eq!(d.format_value(&Value::Bool(true), ColumnRule::NONE), "1");
        assert_eq!(d.format_value(&Value::Bool(false), ColumnRule::NONE), "0");
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(7, 5, 3, 42)
            .unwrap();
        assert_eq!(
            d.format_value(&Value::DateTime(dt), ColumnRule::NONE),
            "'2024/03/09 07:05:03.042'"
        );
    }
}
