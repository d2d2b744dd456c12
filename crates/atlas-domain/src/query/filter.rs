//! Filters - Table-driven predicates over record fields
//!
//! Each recognized parameter is described by a [`FilterSpec`]: which field
//! it constrains, how the raw string is parsed, and how the parsed operand
//! is compared. Building a predicate parses eagerly, so a malformed value
//! fails before any record is looked at.

use chrono::{DateTime, Utc};

use crate::model::damage_type::DamageType;
use crate::model::job_class::JobClass;

use super::QueryError;

/// A field value borrowed from a record for comparison
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum FieldValue<'a> {
    Int(i64),
    Bool(bool),
    Text(&'a str),
    /// Nullable reference to another entity
    Ref(Option<u64>),
    Time(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    /// Text content, if this is a text field
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(*s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
    Lte,
}

/// How a raw parameter string becomes an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueParser {
    /// Signed integer; anything else is a validation error
    Integer,
    /// Entity identity (unsigned integer)
    Id,
    /// "true" (any case) is true, every other value is false
    Flag,
    JobClass,
    DamageType,
}

impl ValueParser {
    /// Whether an empty value means "no constraint".
    ///
    /// Flags are the exception: an empty flag is still a (false) value.
    pub fn skips_empty(&self) -> bool {
        !matches!(self, ValueParser::Flag)
    }

    pub fn parse(&self, param: &str, raw: &str) -> Result<Operand, QueryError> {
        let invalid = |expected: &'static str| QueryError::InvalidValue {
            param: param.to_string(),
            value: raw.to_string(),
            expected,
        };

        match self {
            ValueParser::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Operand::Int)
                .map_err(|_| invalid("an integer")),
            ValueParser::Id => raw
                .trim()
                .parse::<u64>()
                .map(Operand::Ref)
                .map_err(|_| invalid("a numeric id")),
            ValueParser::Flag => Ok(Operand::Bool(raw.eq_ignore_ascii_case("true"))),
            ValueParser::JobClass => raw
                .parse::<JobClass>()
                .map(|class| Operand::Text(class.as_str().to_string()))
                .map_err(|_| invalid("a job class")),
            ValueParser::DamageType => raw
                .parse::<DamageType>()
                .map(|kind| Operand::Text(kind.as_str().to_string()))
                .map_err(|_| invalid("a damage type")),
        }
    }
}

/// One row of a filter table
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec<F: 'static> {
    /// Request parameter name
    pub param: &'static str,
    pub field: F,
    pub op: Comparison,
    pub parser: ValueParser,
}

/// A parsed, owned comparison operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Int(i64),
    Bool(bool),
    Text(String),
    Ref(u64),
}

/// A single `field <op> operand` constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate<F> {
    pub field: F,
    pub op: Comparison,
    pub operand: Operand,
}

impl<F: Copy> Predicate<F> {
    pub fn new(field: F, op: Comparison, operand: Operand) -> Self {
        Self { field, op, operand }
    }

    /// Exact match shorthand
    pub fn exact(field: F, operand: Operand) -> Self {
        Self::new(field, Comparison::Eq, operand)
    }

    /// Test a field value against this predicate.
    ///
    /// Mismatched kinds never match; a null reference never equals an id.
    pub fn accepts(&self, value: FieldValue<'_>) -> bool {
        match (&self.operand, value) {
            (Operand::Int(n), FieldValue::Int(v)) => match self.op {
                Comparison::Eq => v == *n,
                Comparison::Gte => v >= *n,
                Comparison::Lte => v <= *n,
            },
            (Operand::Bool(b), FieldValue::Bool(v)) => self.op == Comparison::Eq && v == *b,
            (Operand::Text(s), FieldValue::Text(v)) => match self.op {
                Comparison::Eq => v == s.as_str(),
                Comparison::Gte => v >= s.as_str(),
                Comparison::Lte => v <= s.as_str(),
            },
            (Operand::Ref(id), FieldValue::Ref(v)) => self.op == Comparison::Eq && v == Some(*id),
            _ => false,
        }
    }
}
