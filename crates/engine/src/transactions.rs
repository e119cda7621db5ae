//! Transaction primitives.
//!
//! A `Transaction` moves money in (`Income`) or out (`Expense`) for one
//! person, tagged with one category.

use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{EngineError, MoneyCents};

pub const DESCRIPTION_MIN_LEN: usize = 3;
pub const DESCRIPTION_MAX_LEN: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl TryFrom<&str> for TransactionType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(EngineError::InvalidInput(format!(
                "invalid transaction type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: MoneyCents,
    pub kind: TransactionType,
    pub person_id: Uuid,
    pub category_id: Uuid,
}

impl Transaction {
    /// Amount signed by type: incomes are positive, expenses negative.
    pub fn signed_amount(&self) -> MoneyCents {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => MoneyCents::new(-self.amount.cents()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    pub amount_minor: i64,
    pub kind: String,
    pub person_id: Uuid,
    pub category_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PersonId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Person,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id),
            description: ActiveValue::Set(tx.description.clone()),
            amount_minor: ActiveValue::Set(tx.amount.cents()),
            kind: ActiveValue::Set(tx.kind.as_str().to_string()),
            person_id: ActiveValue::Set(tx.person_id),
            category_id: ActiveValue::Set(tx.category_id),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            kind: TransactionType::try_from(model.kind.as_str())?,
            description: model.description,
            amount: MoneyCents::new(model.amount_minor),
            person_id: model.person_id,
            category_id: model.category_id,
        })
    }
}
