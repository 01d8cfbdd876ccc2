//! Option schema validation and SQL fragment rendering
//!
//! Every command feature (file format, COPY, PUT) declares its recognized
//! options as a static [`OptionSchema`]. Raw caller input is validated
//! strictly against the schema — unknown keys, wrong value kinds and
//! out-of-set enum values all fail before any statement text exists — and
//! the surviving values become an immutable [`OptionSet`] that renders to
//! ordered `KEY = VALUE` fragments.

pub mod catalog;

use crate::error::SnowGenError;

/// Raw caller input: option key to value, in mapping semantics (a repeated
/// key overwrites the earlier entry).
pub type RawOptions = Vec<(String, OptionValue)>;

/// A raw option value prior to validation.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(v: Vec<String>) -> Self {
        OptionValue::TextList(v)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(v: Vec<&str>) -> Self {
        OptionValue::TextList(v.into_iter().map(str::to_string).collect())
    }
}

/// Semantic type of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    Bool,
    Int,
    Float,
    Text,
    TextList,
    /// Value must be one of the listed canonical uppercase tags (case-sensitive).
    Enum(&'static [&'static str]),
}

impl SemanticType {
    fn expected(&self) -> &'static str {
        match self {
            SemanticType::Bool => "a boolean",
            SemanticType::Int => "an integer",
            SemanticType::Float => "a number",
            SemanticType::Text => "a string",
            SemanticType::TextList => "a list of strings",
            SemanticType::Enum(_) => "a string from the allowed set",
        }
    }
}

/// Descriptor for one recognized option key.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub ty: SemanticType,
    /// Fragment key when it differs from the upper-cased option key.
    pub render_key: Option<&'static str>,
    pub required: bool,
}

/// Fixed per-feature option schema. Declared once as a process-wide
/// constant; field order is the fragment render order.
#[derive(Debug)]
pub struct OptionSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl OptionSchema {
    fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Validate raw input into an immutable [`OptionSet`].
    ///
    /// Strict mode: every key must be declared, every value must match the
    /// declared semantic type, enum values must be members of the allowed
    /// set, and required fields must be present.
    pub fn validate(&'static self, raw: RawOptions) -> Result<OptionSet, SnowGenError> {
        let mut checked: Vec<(&'static str, OptionValue)> = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let field = self
                .field(&key)
                .ok_or_else(|| SnowGenError::UnknownOption {
                    schema: self.name,
                    key: key.clone(),
                })?;
            let value = coerce(field, &key, value)?;
            match checked.iter_mut().find(|(k, _)| *k == field.key) {
                Some(slot) => slot.1 = value,
                None => checked.push((field.key, value)),
            }
        }

        for field in self.fields {
            if field.required && !checked.iter().any(|(k, _)| *k == field.key) {
                return Err(SnowGenError::MissingRequiredOption {
                    schema: self.name,
                    key: field.key,
                });
            }
        }

        // Fragment order is schema declaration order, independent of input order.
        checked.sort_by_key(|(key, _)| self.fields.iter().position(|f| f.key == *key));

        Ok(OptionSet {
            schema: self,
            values: checked,
        })
    }

    /// Shorthand for an option set with no options supplied.
    pub fn empty(&'static self) -> OptionSet {
        OptionSet {
            schema: self,
            values: Vec::new(),
        }
    }
}

fn coerce(
    field: &FieldSpec,
    key: &str,
    value: OptionValue,
) -> Result<OptionValue, SnowGenError> {
    let mismatch = || SnowGenError::InvalidOptionType {
        key: key.to_string(),
        expected: field.ty.expected(),
    };
    match field.ty {
        SemanticType::Bool => match value {
            OptionValue::Bool(_) => Ok(value),
            _ => Err(mismatch()),
        },
        SemanticType::Int => match value {
            OptionValue::Int(_) => Ok(value),
            _ => Err(mismatch()),
        },
        SemanticType::Float => match value {
            OptionValue::Int(v) => Ok(OptionValue::Float(v as f64)),
            OptionValue::Float(_) => Ok(value),
            _ => Err(mismatch()),
        },
        SemanticType::Text => match value {
            OptionValue::Text(_) => Ok(value),
            OptionValue::Bool(v) => Ok(OptionValue::Text(v.to_string())),
            OptionValue::Int(v) => Ok(OptionValue::Text(v.to_string())),
            OptionValue::Float(v) => Ok(OptionValue::Text(v.to_string())),
            OptionValue::TextList(_) => Err(mismatch()),
        },
        SemanticType::TextList => match value {
            OptionValue::TextList(_) => Ok(value),
            _ => Err(mismatch()),
        },
        SemanticType::Enum(allowed) => match value {
            OptionValue::Text(v) => {
                if allowed.contains(&v.as_str()) {
                    Ok(OptionValue::Text(v))
                } else {
                    Err(SnowGenError::InvalidEnumValue {
                        key: key.to_string(),
                        value: v,
                        allowed,
                    })
                }
            }
            _ => Err(mismatch()),
        },
    }
}

/// A validated, immutable set of option values for one command.
#[derive(Debug, Clone)]
pub struct OptionSet {
    schema: &'static OptionSchema,
    /// Keys and validated values, in schema declaration order.
    values: Vec<(&'static str, OptionValue)>,
}

impl OptionSet {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema.name
    }

    /// Render one `RENDER_KEY = VALUE` fragment per present option, in
    /// schema declaration order. Pure: identical input yields byte-identical
    /// output on every call.
    pub fn fragments(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|(key, value)| {
                // field lookup cannot fail: keys were interned during validation
                let field = self.schema.field(key).unwrap_or_else(|| {
                    unreachable!("validated key '{key}' missing from schema")
                });
                let render_key = match field.render_key {
                    Some(name) => name.to_string(),
                    None => key.to_uppercase(),
                };
                format!("{} = {}", render_key, render_value(value))
            })
            .collect()
    }
}

fn render_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Bool(true) => "TRUE".to_string(),
        OptionValue::Bool(false) => "FALSE".to_string(),
        OptionValue::Int(v) => v.to_string(),
        OptionValue::Float(v) => v.to_string(),
        OptionValue::Text(v) => sql_literal(v),
        OptionValue::TextList(items) => {
            let joined: Vec<String> = items.iter().map(|s| sql_literal(s)).collect();
            format!("({})", joined.join(", "))
        }
    }
}

/// Single-quote a string value, doubling any embedded quote.
///
/// Every quoted value in every statement flows through here, so the
/// escaping policy has exactly one home.
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
