//! Qualified naming for addressable warehouse objects

use crate::error::SnowGenError;

/// Identity of a warehouse object addressed by a command.
///
/// Every command targets either a three-part name (`database.schema.object`)
/// or, for commands that address a schema rather than an object, a two-part
/// name (`database.schema`). All parts are trimmed on construction and the
/// entity is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntity {
    database: String,
    schema: String,
    object_name: Option<String>,
}

impl CommandEntity {
    /// Entity for a name-bearing object (file format, stage, table).
    pub fn named(
        database: impl Into<String>,
        schema: impl Into<String>,
        object_name: impl Into<String>,
    ) -> Result<Self, SnowGenError> {
        let object_name = required_part(object_name.into(), "object name")?;
        let mut entity = Self::nameless(database, schema)?;
        entity.object_name = Some(object_name);
        Ok(entity)
    }

    /// Entity addressed by database and schema only (COPY INTO, PUT).
    pub fn nameless(
        database: impl Into<String>,
        schema: impl Into<String>,
    ) -> Result<Self, SnowGenError> {
        Ok(Self {
            database: required_part(database.into(), "database")?,
            schema: required_part(schema.into(), "schema")?,
            object_name: None,
        })
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }

    /// `database.schema.object` for named entities, `database.schema` otherwise.
    pub fn fully_qualified_name(&self) -> String {
        match &self.object_name {
            Some(name) => format!("{}.{}.{}", self.database, self.schema, name),
            None => format!("{}.{}", self.database, self.schema),
        }
    }
}

fn required_part(raw: String, field: &'static str) -> Result<String, SnowGenError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SnowGenError::EmptyIdentifier { field });
    }
    Ok(trimmed.to_string())
}
