//! Render settings a host application can load from its own config.

use serde::{Deserialize, Serialize};

use crate::builder::{Command, Delete, Insert, NoTable, Select, Update};
use crate::dialect::{Dialect, DialectKind, QuoteMode};
use crate::error::Result;

/// Which dialect to render for, and how.
///
/// Every field has a default, so an empty table deserializes to SQL Server
/// with automatic quoting and no terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target database.
    pub dialect: DialectKind,
    /// Identifier quoting for builders created through [`RenderConfig`].
    pub quote_mode: QuoteMode,
    /// Whether to append the statement terminator.
    pub terminate: bool,
}

impl RenderConfig {
    /// Creates a config for `dialect` with the other fields defaulted.
    #[must_use]
    pub fn new(dialect: DialectKind) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// The configured dialect profile.
    #[must_use]
    pub fn profile(&self) -> &'static dyn Dialect {
        self.dialect.profile()
    }

    /// A SELECT builder using the configured quoting.
    #[must_use]
    pub fn select(&self) -> Select<NoTable> {
        Select::new().quote_mode(self.quote_mode)
    }

    /// An INSERT builder using the configured quoting.
    #[must_use]
    pub fn insert(&self) -> Insert<NoTable> {
        Insert::new().quote_mode(self.quote_mode)
    }

    /// An UPDATE builder using the configured quoting.
    #[must_use]
    pub fn update(&self) -> Update<NoTable> {
        Update::new().quote_mode(self.quote_mode)
    }

    /// A DELETE builder using the configured quoting.
    #[must_use]
    pub fn delete(&self) -> Delete<NoTable> {
        Delete::new().quote_mode(self.quote_mode)
    }

    /// Renders `command` with the configured dialect and terminator.
    ///
    /// # Errors
    ///
    /// See [`Command::render_with`].
    pub fn render(&self, command: &impl Command) -> Result<String> {
        command.render_with(self.profile(), self.terminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::param;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.dialect, DialectKind::SqlServer);
        assert_eq!(config.quote_mode, QuoteMode::Auto);
        assert!(!config.terminate);
        assert_eq!(config.profile().name(), "sqlserver");
    }

    #[test]
    fn test_render_with_config() {
        let config = RenderConfig {
            terminate: true,
            ..RenderConfig::new(DialectKind::Oracle)
        };
        let delete = Delete::new().from("Level").where_one("Id", 2);
        assert_eq!(
            config.render(&delete).unwrap(),
            "Delete From \"Level\" Where Id = 2;"
        );
    }

    #[test]
    fn test_builders_carry_quote_mode() {
        let config = RenderConfig {
            quote_mode: QuoteMode::Always,
            ..RenderConfig::new(DialectKind::Access)
        };
        let select = config.select().columns(["Id"]).from("Items");
        assert_eq!(config.render(&select).unwrap(), "Select [Id] From [Items]");
        let insert = config.insert().into_table("Items").values([param("Id", 1)]);
        assert_eq!(
            config.render(&insert).unwrap(),
            "Insert Into [Items] ( [Id] ) Values ( 1 )"
        );
        let update = config.update().table("Items").set_one("Id", 2);
        assert_eq!(config.render(&update).unwrap(), "Update [Items] Set [Id] = 2");
        let delete = config.delete().from("Items");
        assert_eq!(config.render(&delete).unwrap(), "Delete From [Items]");
    }
}
