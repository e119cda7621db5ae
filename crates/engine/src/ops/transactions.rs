use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, TransactionTrait};
use uuid::Uuid;

use crate::{
    EngineError, MoneyCents, Page, ResultEngine, Transaction, TransactionType,
    rules::check_transaction,
    store::Store,
    transactions::{DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN},
    util::normalize_text,
};

use super::{Engine, with_tx};

/// Fields accepted when creating or updating a transaction.
#[derive(Clone, Debug)]
pub struct TransactionInput {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionType,
    pub person_id: Uuid,
    pub category_id: Uuid,
}

struct ValidInput {
    description: String,
    amount: MoneyCents,
    kind: TransactionType,
    person_id: Uuid,
    category_id: Uuid,
}

impl TransactionInput {
    fn validate(self) -> ResultEngine<ValidInput> {
        let description = normalize_text(
            &self.description,
            "description",
            DESCRIPTION_MIN_LEN,
            DESCRIPTION_MAX_LEN,
        )?;
        let amount = MoneyCents::try_from(self.amount)?;
        if !amount.is_positive() {
            return Err(EngineError::InvalidInput(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(ValidInput {
            description,
            amount,
            kind: self.kind,
            person_id: self.person_id,
            category_id: self.category_id,
        })
    }
}

impl Engine {
    /// Record a new transaction.
    ///
    /// The category is resolved before the person, then the category purpose
    /// and the age rule are checked in that order. Nothing is written unless
    /// every check passes.
    pub async fn create_transaction(&self, input: TransactionInput) -> ResultEngine<Transaction> {
        let input = input.validate()?;
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            check_references(&store, &input).await?;

            let tx = Transaction {
                id: Uuid::new_v4(),
                description: input.description,
                amount: input.amount,
                kind: input.kind,
                person_id: input.person_id,
                category_id: input.category_id,
            };
            store.insert_transaction(&tx).await?;
            tracing::debug!(
                transaction_id = %tx.id,
                amount = %tx.amount,
                "transaction created"
            );
            Ok(tx)
        })
    }

    /// Overwrite every field of an existing transaction, re-running the
    /// same checks as [`Engine::create_transaction`].
    pub async fn update_transaction(
        &self,
        transaction_id: Uuid,
        input: TransactionInput,
    ) -> ResultEngine<Transaction> {
        let input = input.validate()?;
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            check_references(&store, &input).await?;

            let mut tx = store.require_transaction(transaction_id).await?;
            tx.description = input.description;
            tx.amount = input.amount;
            tx.kind = input.kind;
            tx.person_id = input.person_id;
            tx.category_id = input.category_id;
            store.update_transaction(&tx).await?;
            tracing::debug!(%transaction_id, "transaction updated");
            Ok(tx)
        })
    }

    pub async fn transaction(&self, transaction_id: Uuid) -> ResultEngine<Transaction> {
        Store::new(&self.database)
            .require_transaction(transaction_id)
            .await
    }

    /// Transactions ordered by description.
    pub async fn transactions(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> ResultEngine<Page<Transaction>> {
        let request = self.paging.request(page, page_size)?;
        Store::new(&self.database).transactions_page(request).await
    }
}

async fn check_references<C: ConnectionTrait>(
    store: &Store<'_, C>,
    input: &ValidInput,
) -> ResultEngine<()> {
    let category = store.require_category(input.category_id).await?;
    let person = store.require_person(input.person_id).await?;
    if let Err(err) = check_transaction(category.purpose, person.age, input.kind) {
        tracing::warn!(
            person_id = %person.id,
            category_id = %category.id,
            kind = input.kind.as_str(),
            reason = %err.reason(),
            "transaction rejected"
        );
        return Err(err);
    }
    Ok(())
}
