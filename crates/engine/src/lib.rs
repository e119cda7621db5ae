pub use categories::{Category, CategoryPurpose};
pub use error::{EngineError, EntityKind, Rule};
pub use money::MoneyCents;
pub use ops::{
    CategoryInput, Engine, EngineBuilder, PersonDeletePolicy, PersonInput, TransactionInput,
};
pub use pagination::{Page, PageRequest, PagingPolicy, total_pages};
pub use people::Person;
pub use rules::{is_age_compliant, is_category_compatible};
pub use summary::{
    CategorySummary, CategoryTotals, PersonSummary, PersonTotals, Summary, Totals,
    summarize_by_category, summarize_by_person,
};
pub use transactions::{Transaction, TransactionType};

pub mod categories;
mod error;
mod money;
mod ops;
mod pagination;
pub mod people;
mod rules;
mod store;
mod summary;
pub mod transactions;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
