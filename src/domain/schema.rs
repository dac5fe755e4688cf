//! Declarative table descriptors.
//!
//! The shape of the `comments` table is described as data
//! ([`COMMENTS_TABLE`]) and rendered to DDL by
//! [`TableDescriptor::create_table_sql`]. The schema initializer in
//! [`crate::persistence`] consumes the descriptor; nothing reflects over
//! struct fields.

use std::fmt::Write as _;

use super::candidate::{NAME_MAX_LEN, TEXT_MAX_LEN};

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit signed integer.
    Integer,
    /// UTF-8 text.
    Text,
    /// Point in time, stored in SQLite's `DATETIME` affinity.
    Timestamp,
}

impl ColumnType {
    const fn sql(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
            Self::Timestamp => "DATETIME",
        }
    }
}

/// One column of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: &'static str,
    /// Storage type.
    pub column_type: ColumnType,
    /// Whether `NULL` is allowed.
    pub nullable: bool,
    /// Maximum length in characters, for text columns.
    pub max_len: Option<usize>,
    /// Literal SQL default value, already quoted.
    pub default: Option<&'static str>,
    /// Whether this column is the primary key.
    pub primary_key: bool,
    /// Whether the database assigns values automatically.
    pub auto_increment: bool,
}

impl ColumnDescriptor {
    /// A non-null column with no extra constraints.
    #[must_use]
    pub const fn required(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: false,
            max_len: None,
            default: None,
            primary_key: false,
            auto_increment: false,
        }
    }

    /// An auto-assigned integer primary key.
    #[must_use]
    pub const fn auto_id(name: &'static str) -> Self {
        Self {
            primary_key: true,
            auto_increment: true,
            ..Self::required(name, ColumnType::Integer)
        }
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn max_len(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }

    /// Sets the literal default.
    #[must_use]
    pub const fn default_value(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    fn render(&self, out: &mut String) {
        let _ = write!(out, "{} {}", self.name, self.column_type.sql());
        if self.primary_key {
            out.push_str(" PRIMARY KEY");
            if self.auto_increment {
                out.push_str(" AUTOINCREMENT");
            }
        }
        if !self.nullable && !self.primary_key {
            out.push_str(" NOT NULL");
        }
        if let Some(default) = self.default {
            let _ = write!(out, " DEFAULT {default}");
        }
        // SQLite does not enforce VARCHAR(n), so lengths become CHECKs.
        if let Some(max) = self.max_len {
            let _ = write!(out, " CHECK (length({}) <= {max})", self.name);
        }
    }
}

/// A table: name, columns and table-level checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Table name.
    pub name: &'static str,
    /// Columns in declaration order.
    pub columns: &'static [ColumnDescriptor],
    /// Table-level `CHECK` expressions.
    pub checks: &'static [&'static str],
}

impl TableDescriptor {
    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Renders an idempotent `CREATE TABLE IF NOT EXISTS` statement.
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (", self.name);
        let mut first = true;
        for column in self.columns {
            if !first {
                sql.push_str(", ");
            }
            first = false;
            column.render(&mut sql);
        }
        for check in self.checks {
            let _ = write!(sql, ", CHECK ({check})");
        }
        sql.push(')');
        sql
    }
}

// Mirrors the placeholder applied during validation.
const NAME_DEFAULT_SQL: &str = "'noname'";

/// Columns of the `comments` table.
pub const COMMENT_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::auto_id("id"),
    ColumnDescriptor::required("name", ColumnType::Text)
        .max_len(NAME_MAX_LEN)
        .default_value(NAME_DEFAULT_SQL),
    ColumnDescriptor::required("text", ColumnType::Text).max_len(TEXT_MAX_LEN),
    ColumnDescriptor::required("created", ColumnType::Timestamp),
    ColumnDescriptor::required("updated", ColumnType::Timestamp),
];

/// Descriptor of the table backing [`super::Comment`].
pub const COMMENTS_TABLE: TableDescriptor = TableDescriptor {
    name: "comments",
    columns: COMMENT_COLUMNS,
    checks: &["created <= updated"],
};
