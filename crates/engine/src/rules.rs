//! Domain rules checked before a transaction is written.
//!
//! Both rules are pure; [`check_transaction`] applies them in a fixed order
//! (category compatibility first, then the age rule) so the reported
//! violation is deterministic.

use crate::{
    CategoryPurpose, EngineError, ResultEngine, Rule, TransactionType, people::ADULT_AGE,
};

/// Returns `true` if a category with `purpose` may tag a transaction of type
/// `kind`.
pub fn is_category_compatible(purpose: CategoryPurpose, kind: TransactionType) -> bool {
    purpose.accepts(kind)
}

/// Returns `false` only for an income recorded by a person under 18.
pub fn is_age_compliant(age: i32, kind: TransactionType) -> bool {
    !(age < ADULT_AGE && kind == TransactionType::Income)
}

pub(crate) fn check_transaction(
    purpose: CategoryPurpose,
    age: i32,
    kind: TransactionType,
) -> ResultEngine<()> {
    if !is_category_compatible(purpose, kind) {
        return Err(EngineError::RuleViolation(Rule::CategoryTypeMismatch));
    }
    if !is_age_compliant(age, kind) {
        return Err(EngineError::RuleViolation(Rule::MinorIncomeForbidden));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPES: [TransactionType; 2] = [TransactionType::Expense, TransactionType::Income];

    #[test]
    fn both_accepts_every_type() {
        for kind in TYPES {
            assert!(is_category_compatible(CategoryPurpose::Both, kind));
        }
    }

    #[test]
    fn single_purpose_accepts_only_its_type() {
        assert!(is_category_compatible(
            CategoryPurpose::Expense,
            TransactionType::Expense
        ));
        assert!(is_category_compatible(
            CategoryPurpose::Income,
            TransactionType::Income
        ));
        assert!(!is_category_compatible(
            CategoryPurpose::Expense,
            TransactionType::Income
        ));
        assert!(!is_category_compatible(
            CategoryPurpose::Income,
            TransactionType::Expense
        ));
    }

    #[test]
    fn expenses_are_allowed_at_any_age() {
        for age in 1..=130 {
            assert!(is_age_compliant(age, TransactionType::Expense));
        }
    }

    #[test]
    fn income_requires_adulthood() {
        assert!(!is_age_compliant(1, TransactionType::Income));
        assert!(!is_age_compliant(17, TransactionType::Income));
        assert!(is_age_compliant(18, TransactionType::Income));
        assert!(is_age_compliant(130, TransactionType::Income));
    }

    #[test]
    fn category_mismatch_is_reported_before_age() {
        let err = check_transaction(CategoryPurpose::Expense, 16, TransactionType::Income)
            .unwrap_err();
        assert_eq!(err, EngineError::RuleViolation(Rule::CategoryTypeMismatch));

        let err =
            check_transaction(CategoryPurpose::Both, 16, TransactionType::Income).unwrap_err();
        assert_eq!(err, EngineError::RuleViolation(Rule::MinorIncomeForbidden));

        assert!(check_transaction(CategoryPurpose::Both, 16, TransactionType::Expense).is_ok());
    }
}
