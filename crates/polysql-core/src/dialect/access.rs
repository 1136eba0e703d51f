//! Microsoft Access dialect.

use std::sync::LazyLock;

use chrono::NaiveDateTime;

use super::{datetime_millis, Dialect, ReservedWords};

/// Access: bracket quoting and `CDate(...)` date literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessDialect;

impl AccessDialect {
    /// Creates a new Access dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

static RESERVED: LazyLock<ReservedWords> = LazyLock::new(|| ReservedWords::new(RESERVED_WORDS));

impl Dialect for AccessDialect {
    fn name(&self) -> &'static str {
        "access"
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
        format!("CDate('{}')", datetime_millis(value))
    }
}

const RESERVED_WORDS: &[&str] = &[
    "ABSOLUTE", "ACTION", "ADD", "ADMINDB", "ALL", "ALLOCATE", "ALPHANUMERIC", "ALTER",
    "AND", "ANY", "APPLICATION", "ARE", "AS", "ASC", "ASSERTION", "ASSISTANT", "AT",
    "AUTHORIZATION", "AUTOINCREMENT", "AVG", "BAND", "BEGIN", "BETWEEN", "BINARY",
    "BIT", "BIT_LENGTH", "BNOT", "BOOLEAN", "BOR", "BOTH", "BXOR", "BY", "BYTE",
    "CASCADE", "CASCADED", "CASE", "CAST", "CATALOG", "CHAR", "CHARACTER",
    "CHARACTER_LENGTH", "CHAR_LENGTH", "CHECK", "CLOSE", "COALESCE", "COLLATE",
    "COLLATION", "COLUMN", "COMMIT", "COMP", "COMPACTDATABASE", "COMPRESSION",
    "CONNECT", "CONNECTION", "CONSTRAINT", "CONSTRAINTS", "CONTAINER", "CONTINUE",
    "CONVERT", "CORRESPONDING", "COUNT", "COUNTER", "CREATE", "CREATEDATABASE",
    "CREATEDB", "CREATEFIELD", "CREATEGROUP", "CREATEINDEX", "CREATEOBJECT",
    "CREATEPROPERTY", "CREATERELATION", "CREATETABLEDEF", "CREATEUSER",
    "CREATEWORKSPACE", "CROSS", "CURRENCY", "CURRENT", "CURRENTUSER", "CURRENT_DATE",
    "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR", "DATABASE", "DATE",
    "DATETIME", "DAY", "DEALLOCATE", "DEC", "DECIMAL", "DECLARE", "DEFAULT",
    "DEFERRABLE", "DEFERRED", "DELETE", "DESC", "DESCRIBE", "DESCRIPTION", "DESCRIPTOR",
    "DIAGNOSTICS", "DISALLOW", "DISCONNECT", "DISTINCT", "DISTINCTROW", "DOCUMENT",
    "DOMAIN", "DOUBLE", "DROP", "ECHO", "ELSE", "END", "END-EXEC", "EQV", "ERROR",
    "ESCAPE", "EXCEPT", "EXCEPTION", "EXCLUSIVECONNECT", "EXEC", "EXECUTE", "EXISTS",
    "EXIT", "EXTERNAL", "EXTRACT", "FALSE", "FETCH", "FIELD", "FIELDS", "FILLCACHE",
    "FIRST", "FLOAT", "FLOAT4", "FLOAT8", "FOR", "FOREIGN", "FORM", "FORMS", "FOUND",
    "FROM", "FULL", "FUNCTION", "GENERAL", "GET", "GETOBJECT", "GETOPTION", "GLOBAL",
    "GO", "GOTO", "GOTOPAGE", "GRANT", "GROUP", "GUID", "HAVING", "HOUR",
    "IDENTITY", "IDLE", "IEEEDOUBLE", "IEEESINGLE", "IF", "IGNORE", "IMAGE",
    "IMMEDIATE", "IMP", "IN", "INDEX", "INDEXES", "INDICATOR", "INHERITABLE", "ININDEX",
    "INITIALLY", "INNER", "INPUT", "INSENSITIVE", "INSERT", "INSERTTEXT", "INT",
    "INTEGER", "INTEGER1", "INTEGER2", "INTEGER4", "INTERSECT", "INTERVAL", "INTO",
    "IS", "ISOLATION", "JOIN", "KEY", "LANGUAGE", "LAST", "LASTMODIFIED", "LEADING",
    "LEFT", "LEVEL", "LIKE", "LOCAL", "LOGICAL", "LOGICAL1", "LONG", "LONGBINARY",
    "LONGCHAR", "LONGTEXT", "LOWER", "MACRO", "MATCH", "MAX", "MEMO", "MIN", "MINUTE",
    "MODULE", "MONEY", "MONTH", "MOVE", "NAME", "NAMES", "NATIONAL", "NATURAL", "NCHAR",
    "NEWPASSWORD", "NEXT", "NO", "NOT", "NOTE", "NULL", "NULLIF", "NUMBER", "NUMERIC",
    "OBJECT", "OCTET_LENGTH", "OFF", "OFOLEOBJECT", "OLEOBJECT", "ON", "ONONLY", "OPEN",
    "OPENRECORDSET", "OPTION", "OR", "ORDER", "ORIENTATION", "ORORDER", "OUTER",
    "OUTPUT", "OVERLAPS", "OWNERACCESS", "PAD", "PARAMETER", "PARAMETERS", "PARTIAL",
    "PASSWORD", "PERCENT", "PIVOT", "POSITION", "PRECISION", "PREPARE", "PRESERVE",
    "PRIMARY", "PRIOR", "PRIVILEGES", "PROC", "PROCEDURE", "PROPERTY", "PUBLIC",
    "QUERIES", "QUERY", "QUIT", "READ", "REAL", "RECALC", "RECORDSET", "REFERENCES",
    "REFRESH", "REFRESHLINK", "REGISTERDATABASE", "RELATION", "RELATIVE", "REPAINT",
    "REPAIRDATABASE", "REPORT", "REPORTS", "REQUERY", "RESTRICT", "REVOKE", "RIGHT",
    "ROLLBACK", "ROWS", "SCHEMA", "SCREEN", "SCROLL", "SECOND", "SECTION", "SELECT",
    "SELECTSCHEMA", "SELECTSECURITY", "SESSION", "SESSION_USER", "SET", "SETFOCUS",
    "SETOPTION", "SHORT", "SINGLE", "SIZE", "SMALLINT", "SOME", "SPACE", "SQL",
    "SQLCODE", "SQLERROR", "SQLSTATE", "STDEV", "STDEVP", "STRING", "SUBSTRING", "SUM",
    "SYSTEM_USER", "TABLE", "TABLEDEF", "TABLEDEFS", "TABLEID", "TEMPORARY", "TEXT",
    "THEN", "TIME", "TIMESTAMP", "TIMEZONE_HOUR", "TIMEZONE_MINUTE", "TO", "TOP",
    "TRAILING", "TRANSACTION", "TRANSFORM", "TRANSLATE", "TRANSLATION", "TRIM", "TRUE",
    "TYPE", "UNION", "UNIQUE", "UNIQUEIDENTIFIER", "UNKNOWN", "UPDATE",
    "UPDATEIDENTITY", "UPDATEOWNER", "UPDATESECURITY", "UPPER", "USAGE", "USER",
    "USING", "VALUE", "VALUES", "VAR", "VARBINARY", "VARCHAR", "VARP", "VARYING",
    "VIEW", "WHEN", "WHENEVER", "WHERE", "WITH", "WORK", "WORKSPACE", "WRITE", "XOR",
    "YEAR", "YES", "YESNO", "ZONE",
];
