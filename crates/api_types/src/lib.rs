//! JSON shapes exchanged with the front-end.
//!
//! Field names are camelCase and enum values are the capitalized variant
//! names (`"Expense"`, `"Income"`, `"Both"`). Money is a JSON number with at
//! most two fractional digits, decoded and encoded digit for digit (never
//! through `f64`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Expense,
    Income,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryPurpose {
    Expense,
    Income,
    Both,
}

/// `?page=&pageSize=` on list endpoints.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// `?id=` on update and delete endpoints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IdQuery {
    pub id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub current_page: u64,
    pub page_size: u64,
    pub total_records: u64,
    pub total_pages: u64,
}

/// Body of every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Stable machine-readable code, e.g. `category-not-found`.
    pub reason: String,
}

pub mod person {
    use super::*;

    /// Body of `POST /person` and `PUT /person?id=`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonNew {
        pub name: String,
        pub age: i32,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Person {
        pub id: Uuid,
        pub name: String,
        pub age: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct NameQuery {
        pub name: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct PersonTotals {
        pub id: Uuid,
        pub name: String,
        pub age: i32,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub income: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub expense: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub balance: Decimal,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PeopleSummary {
        pub person_summary: Vec<PersonTotals>,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub total_income: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub total_expense: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub total_balance: Decimal,
    }
}

pub mod category {
    use super::*;

    /// Body of `POST /category` and `PUT /category?id=`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryNew {
        pub description: String,
        pub purpose: CategoryPurpose,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Category {
        pub id: Uuid,
        pub description: String,
        pub purpose: CategoryPurpose,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryTotals {
        pub id: Uuid,
        pub description: String,
        pub purpose: CategoryPurpose,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub income: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub expense: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub balance: Decimal,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CategoriesSummary {
        pub category_summary: Vec<CategoryTotals>,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub total_income: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub total_expense: Decimal,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub total_balance: Decimal,
    }
}

pub mod transaction {
    use super::*;

    /// Body of `POST /transaction` and `PUT /transaction/{id}`.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionNew {
        pub description: String,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub amount: Decimal,
        #[serde(rename = "type")]
        pub kind: TransactionType,
        pub person_id: Uuid,
        pub category_id: Uuid,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Transaction {
        pub id: Uuid,
        pub description: String,
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        pub amount: Decimal,
        #[serde(rename = "type")]
        pub kind: TransactionType,
        pub person_id: Uuid,
        pub category_id: Uuid,
    }
}
