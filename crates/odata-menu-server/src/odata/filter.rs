//! # `$filter` grammar
//!
//! The first `Calories gt <digits>` found anywhere in the expression is the
//! predicate; surrounding clauses such as `and Rating gt 1` are not
//! evaluated. Expressions without that comparison are a [`FilterError`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static CALORIES_GT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Calories\s+gt\s+(\d+)").expect("filter expression regex is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unsupported filter expression: '{0}'")]
    Unsupported(String),

    #[error("Invalid integer literal: '{0}'")]
    InvalidLiteral(String),
}

/// Filterable properties, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Calories,
}

impl FilterField {
    pub fn wire_name(&self) -> &'static str {
        match self {
            FilterField::Calories => "Calories",
        }
    }

    /// Storage column backing the property.
    pub fn column(&self) -> &'static str {
        match self {
            FilterField::Calories => "calories",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Greater than
    Gt,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Gt => "gt",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            ComparisonOperator::Gt => ">",
        }
    }
}

/// One comparison parsed out of `$filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPredicate {
    pub field: FilterField,
    pub operator: ComparisonOperator,
    pub value: i64,
}

impl FromStr for FilterPredicate {
    type Err = FilterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let caps = CALORIES_GT
            .captures(input)
            .ok_or_else(|| FilterError::Unsupported(input.to_string()))?;

        let literal = &caps[1];
        let value = literal
            .parse::<i64>()
            .map_err(|_| FilterError::InvalidLiteral(literal.to_string()))?;

        Ok(FilterPredicate {
            field: FilterField::Calories,
            operator: ComparisonOperator::Gt,
            value,
        })
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.field.wire_name(),
            self.operator.as_str(),
            self.value
        )
    }
}
