//! The module contains the errors the engine can return.
//!
//! Every engine operation returns [`ResultEngine`], so callers always get a
//! tagged outcome. The errors are:
//!
//! - [`InvalidInput`] thrown when a request field is malformed or out of range.
//! - [`KeyNotFound`] thrown when a person, category or transaction is missing.
//! - [`RuleViolation`] thrown when a transaction breaks a domain [`Rule`].
//! - [`ExistingKey`] thrown when a person name is already taken.
//! - [`StillReferenced`] thrown when a delete would orphan transactions.
//! - [`Overflow`] thrown when a computed amount leaves the decimal range.
//!
//!  [`ResultEngine`]: crate::ResultEngine
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`RuleViolation`]: EngineError::RuleViolation
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`StillReferenced`]: EngineError::StillReferenced
//!  [`Overflow`]: EngineError::Overflow
use std::fmt;

use sea_orm::DbErr;
use thiserror::Error;

/// The kinds of record held by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Category,
    Transaction,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Category => "category",
            Self::Transaction => "transaction",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain rules a transaction must satisfy before it is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// The transaction type is not accepted by the category purpose.
    CategoryTypeMismatch,
    /// A person under 18 tried to record an income.
    MinorIncomeForbidden,
}

impl Rule {
    /// Machine-readable rule name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CategoryTypeMismatch => "category-type-mismatch",
            Self::MinorIncomeForbidden => "minor-income-forbidden",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::CategoryTypeMismatch => {
                "the transaction type does not match the category purpose"
            }
            Self::MinorIncomeForbidden => "people under 18 may only record expenses",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0} not found")]
    KeyNotFound(EntityKind),
    #[error("{0}")]
    RuleViolation(Rule),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("{0} is still referenced by {1} transaction(s)")]
    StillReferenced(EntityKind, u64),
    #[error("{0} overflowed")]
    Overflow(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Short machine-readable reason, stable across releases.
    pub fn reason(&self) -> String {
        match self {
            Self::InvalidInput(_) => "invalid-input".to_string(),
            Self::KeyNotFound(kind) => format!("{kind}-not-found"),
            Self::RuleViolation(rule) => rule.as_str().to_string(),
            Self::ExistingKey(_) => "already-exists".to_string(),
            Self::StillReferenced(kind, _) => format!("{kind}-still-referenced"),
            Self::Overflow(_) => "amount-overflow".to_string(),
            Self::Database(_) => "storage-failure".to_string(),
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::RuleViolation(a), Self::RuleViolation(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::StillReferenced(a, x), Self::StillReferenced(b, y)) => a == b && x == y,
            (Self::Overflow(a), Self::Overflow(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_machine_readable() {
        assert_eq!(
            EngineError::KeyNotFound(EntityKind::Category).reason(),
            "category-not-found"
        );
        assert_eq!(
            EngineError::RuleViolation(Rule::MinorIncomeForbidden).reason(),
            "minor-income-forbidden"
        );
        assert_eq!(
            EngineError::StillReferenced(EntityKind::Person, 2).reason(),
            "person-still-referenced"
        );
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            EngineError::KeyNotFound(EntityKind::Person).to_string(),
            "person not found"
        );
        assert_eq!(
            EngineError::RuleViolation(Rule::CategoryTypeMismatch).to_string(),
            "the transaction type does not match the category purpose"
        );
    }
}
