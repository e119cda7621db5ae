use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::{
    EngineError, EntityKind, Page, Person, ResultEngine,
    people::{MAX_AGE, MIN_AGE, NAME_MAX_LEN},
    store::Store,
    util::{normalize_key, normalize_text, require_range},
};

use super::{Engine, PersonDeletePolicy, with_tx};

/// Fields accepted when creating or updating a person.
#[derive(Clone, Debug)]
pub struct PersonInput {
    pub name: String,
    pub age: i32,
}

impl PersonInput {
    fn validate(&self) -> ResultEngine<(String, i32)> {
        let name = normalize_text(&self.name, "name", 1, NAME_MAX_LEN)?;
        let age = require_range(self.age, "age", MIN_AGE, MAX_AGE)?;
        Ok((name, age))
    }
}

impl Engine {
    /// Register a new person and return it with its assigned id.
    pub async fn create_person(&self, input: PersonInput) -> ResultEngine<Person> {
        let (name, age) = input.validate()?;
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            self.ensure_name_available(&store, &name, None).await?;

            let person = Person::new(name, age);
            store.insert_person(&person).await?;
            tracing::debug!(person_id = %person.id, "person created");
            Ok(person)
        })
    }

    pub async fn person(&self, person_id: Uuid) -> ResultEngine<Person> {
        Store::new(&self.database).require_person(person_id).await
    }

    /// People ordered by name.
    pub async fn people(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> ResultEngine<Page<Person>> {
        let request = self.paging.request(page, page_size)?;
        Store::new(&self.database).people_page(request).await
    }

    /// Look a person up by name, ignoring case, accents and punctuation.
    pub async fn person_by_name(&self, name: &str) -> ResultEngine<Person> {
        let name = normalize_text(name, "name", 1, NAME_MAX_LEN)?;
        Store::new(&self.database)
            .person_by_name_norm(&normalize_key(&name), None)
            .await?
            .ok_or(EngineError::KeyNotFound(EntityKind::Person))
    }

    pub async fn update_person(
        &self,
        person_id: Uuid,
        input: PersonInput,
    ) -> ResultEngine<Person> {
        let (name, age) = input.validate()?;
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            let mut person = store.require_person(person_id).await?;
            self.ensure_name_available(&store, &name, Some(person_id))
                .await?;

            person.name = name;
            person.age = age;
            store.update_person(&person).await?;
            tracing::debug!(person_id = %person.id, "person updated");
            Ok(person)
        })
    }

    /// Delete a person, applying the configured [`PersonDeletePolicy`] to
    /// their transactions.
    pub async fn delete_person(&self, person_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let store = Store::new(&db_tx);
            store.require_person(person_id).await?;

            let referencing = store.count_transactions_for_person(person_id).await?;
            if referencing > 0 {
                match self.person_delete {
                    PersonDeletePolicy::Restrict => {
                        tracing::warn!(%person_id, referencing, "person delete refused");
                        return Err(EngineError::StillReferenced(
                            EntityKind::Person,
                            referencing,
                        ));
                    }
                    PersonDeletePolicy::Cascade => {
                        let removed =
                            store.delete_transactions_for_person(person_id).await?;
                        tracing::debug!(%person_id, removed, "cascaded transactions");
                    }
                }
            }

            if !store.delete_person(person_id).await? {
                return Err(EngineError::KeyNotFound(EntityKind::Person));
            }
            tracing::debug!(%person_id, "person deleted");
            Ok(())
        })
    }

    async fn ensure_name_available<C: sea_orm::ConnectionTrait>(
        &self,
        store: &Store<'_, C>,
        name: &str,
        exclude: Option<Uuid>,
    ) -> ResultEngine<()> {
        if !self.unique_person_names {
            return Ok(());
        }
        if store
            .person_by_name_norm(&normalize_key(name), exclude)
            .await?
            .is_some()
        {
            tracing::warn!(name, "person name already taken");
            return Err(EngineError::ExistingKey(name.to_string()));
        }
        Ok(())
    }
}
