//! Typed access to the `people`, `categories` and `transactions` tables.
//!
//! A [`Store`] borrows a connection for one unit of work: either the shared
//! pool for reads or a `DatabaseTransaction` for writes. It owns no state of
//! its own, so every engine operation builds a fresh one.

use sea_orm::{ConnectionTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, prelude::*};
use uuid::Uuid;

use crate::{
    Category, EngineError, EntityKind, Page, PageRequest, Person, ResultEngine, Transaction,
    categories, people, transactions,
};

pub(crate) struct Store<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> Store<'a, C> {
    pub(crate) fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    // ── people ──────────────────────────────────────────────────────────────

    pub(crate) async fn person(&self, id: Uuid) -> ResultEngine<Option<Person>> {
        let model = people::Entity::find_by_id(id).one(self.conn).await?;
        Ok(model.map(Person::from))
    }

    pub(crate) async fn require_person(&self, id: Uuid) -> ResultEngine<Person> {
        self.person(id)
            .await?
            .ok_or(EngineError::KeyNotFound(EntityKind::Person))
    }

    /// First person whose normalized name equals `name_norm`, optionally
    /// skipping `exclude`.
    pub(crate) async fn person_by_name_norm(
        &self,
        name_norm: &str,
        exclude: Option<Uuid>,
    ) -> ResultEngine<Option<Person>> {
        let mut query = people::Entity::find().filter(people::Column::NameNorm.eq(name_norm));
        if let Some(id) = exclude {
            query = query.filter(people::Column::Id.ne(id));
        }
        let model = query
            .order_by_asc(people::Column::Name)
            .order_by_asc(people::Column::Id)
            .one(self.conn)
            .await?;
        Ok(model.map(Person::from))
    }

    /// Every person ordered by name.
    pub(crate) async fn people(&self) -> ResultEngine<Vec<Person>> {
        let models = people::Entity::find()
            .order_by_asc(people::Column::Name)
            .order_by_asc(people::Column::Id)
            .all(self.conn)
            .await?;
        Ok(models.into_iter().map(Person::from).collect())
    }

    pub(crate) async fn people_page(&self, request: PageRequest) -> ResultEngine<Page<Person>> {
        let total = people::Entity::find().count(self.conn).await?;
        let models = people::Entity::find()
            .order_by_asc(people::Column::Name)
            .order_by_asc(people::Column::Id)
            .offset(request.offset())
            .limit(request.page_size())
            .all(self.conn)
            .await?;
        let data = models.into_iter().map(Person::from).collect();
        Ok(Page::new(data, request, total))
    }

    pub(crate) async fn insert_person(&self, person: &Person) -> ResultEngine<()> {
        people::ActiveModel::from(person).insert(self.conn).await?;
        Ok(())
    }

    pub(crate) async fn update_person(&self, person: &Person) -> ResultEngine<()> {
        people::ActiveModel::from(person).update(self.conn).await?;
        Ok(())
    }

    /// Returns `false` if no row was deleted.
    pub(crate) async fn delete_person(&self, id: Uuid) -> ResultEngine<bool> {
        let result = people::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    // ── categories ──────────────────────────────────────────────────────────

    pub(crate) async fn category(&self, id: Uuid) -> ResultEngine<Option<Category>> {
        categories::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .map(Category::try_from)
            .transpose()
    }

    pub(crate) async fn require_category(&self, id: Uuid) -> ResultEngine<Category> {
        self.category(id)
            .await?
            .ok_or(EngineError::KeyNotFound(EntityKind::Category))
    }

    /// Every category ordered by description.
    pub(crate) async fn categories(&self) -> ResultEngine<Vec<Category>> {
        categories::Entity::find()
            .order_by_asc(categories::Column::Description)
            .order_by_asc(categories::Column::Id)
            .all(self.conn)
            .await?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }

    pub(crate) async fn categories_page(
        &self,
        request: PageRequest,
    ) -> ResultEngine<Page<Category>> {
        let total = categories::Entity::find().count(self.conn).await?;
        let data = categories::Entity::find()
            .order_by_asc(categories::Column::Description)
            .order_by_asc(categories::Column::Id)
            .offset(request.offset())
            .limit(request.page_size())
            .all(self.conn)
            .await?
            .into_iter()
            .map(Category::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;
        Ok(Page::new(data, request, total))
    }

    pub(crate) async fn insert_category(&self, category: &Category) -> ResultEngine<()> {
        categories::ActiveModel::from(category)
            .insert(self.conn)
            .await?;
        Ok(())
    }

    pub(crate) async fn update_category(&self, category: &Category) -> ResultEngine<()> {
        categories::ActiveModel::from(category)
            .update(self.conn)
            .await?;
        Ok(())
    }

    // ── transactions ────────────────────────────────────────────────────────

    pub(crate) async fn transaction(&self, id: Uuid) -> ResultEngine<Option<Transaction>> {
        transactions::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .map(Transaction::try_from)
            .transpose()
    }

    pub(crate) async fn require_transaction(&self, id: Uuid) -> ResultEngine<Transaction> {
        self.transaction(id)
            .await?
            .ok_or(EngineError::KeyNotFound(EntityKind::Transaction))
    }

    pub(crate) async fn transactions(&self) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .all(self.conn)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    pub(crate) async fn transactions_page(
        &self,
        request: PageRequest,
    ) -> ResultEngine<Page<Transaction>> {
        let total = transactions::Entity::find().count(self.conn).await?;
        let data = transactions::Entity::find()
            .order_by_asc(transactions::Column::Description)
            .order_by_asc(transactions::Column::Id)
            .offset(request.offset())
            .limit(request.page_size())
            .all(self.conn)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;
        Ok(Page::new(data, request, total))
    }

    pub(crate) async fn insert_transaction(&self, tx: &Transaction) -> ResultEngine<()> {
        transactions::ActiveModel::from(tx).insert(self.conn).await?;
        Ok(())
    }

    /// Overwrite every mutable field of `tx` in one statement.
    pub(crate) async fn update_transaction(&self, tx: &Transaction) -> ResultEngine<()> {
        transactions::ActiveModel::from(tx).update(self.conn).await?;
        Ok(())
    }

    pub(crate) async fn count_transactions_for_person(&self, person_id: Uuid) -> ResultEngine<u64> {
        let count = transactions::Entity::find()
            .filter(transactions::Column::PersonId.eq(person_id))
            .count(self.conn)
            .await?;
        Ok(count)
    }

    pub(crate) async fn delete_transactions_for_person(
        &self,
        person_id: Uuid,
    ) -> ResultEngine<u64> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::PersonId.eq(person_id))
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}
