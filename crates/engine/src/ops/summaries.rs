use sea_orm::TransactionTrait;

use crate::{
    CategorySummary, PersonSummary, ResultEngine, store::Store, summarize_by_category,
    summarize_by_person,
};

use super::{Engine, with_tx};

impl Engine {
    /// Income, expense and balance for every category, ordered by
    /// description, plus grand totals.
    pub async fn category_summary(&self) -> ResultEngine<CategorySummary> {
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            let categories = store.categories().await?;
            let transactions = store.transactions().await?;
            summarize_by_category(categories, &transactions)
        })
    }

    /// Same as [`Engine::category_summary`], grouped by person and ordered
    /// by name.
    pub async fn person_summary(&self) -> ResultEngine<PersonSummary> {
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            let people = store.people().await?;
            let transactions = store.transactions().await?;
            summarize_by_person(people, &transactions)
        })
    }
}
