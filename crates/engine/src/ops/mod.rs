use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{PagingPolicy, ResultEngine};

mod categories;
mod people;
mod summaries;
mod transactions;

pub use categories::CategoryInput;
pub use people::PersonInput;
pub use transactions::TransactionInput;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// What happens to a person's transactions when the person is deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonDeletePolicy {
    /// Refuse the delete while transactions reference the person.
    #[default]
    Restrict,
    /// Delete the person's transactions together with the person.
    Cascade,
}

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    person_delete: PersonDeletePolicy,
    unique_person_names: bool,
    paging: PagingPolicy,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Debug)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    person_delete: PersonDeletePolicy,
    unique_person_names: bool,
    paging: PagingPolicy,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            database: DatabaseConnection::default(),
            person_delete: PersonDeletePolicy::default(),
            unique_person_names: true,
            paging: PagingPolicy::default(),
        }
    }
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    pub fn person_delete(mut self, policy: PersonDeletePolicy) -> EngineBuilder {
        self.person_delete = policy;
        self
    }

    /// Reject a person whose normalized name is already taken. On by default.
    pub fn unique_person_names(mut self, enabled: bool) -> EngineBuilder {
        self.unique_person_names = enabled;
        self
    }

    pub fn paging(mut self, paging: PagingPolicy) -> EngineBuilder {
        self.paging = paging;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        // Validates the configured sizes up front.
        self.paging
            .request(None, Some(self.paging.default_page_size))?;
        Ok(Engine {
            database: self.database,
            person_delete: self.person_delete,
            unique_person_names: self.unique_person_names,
            paging: self.paging,
        })
    }
}
