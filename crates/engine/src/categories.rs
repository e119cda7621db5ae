//! Category registry.

use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{EngineError, TransactionType};

pub const DESCRIPTION_MAX_LEN: usize = 150;

/// Which transaction types a category accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryPurpose {
    Expense,
    Income,
    Both,
}

impl CategoryPurpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Both => "both",
        }
    }

    /// Returns `true` if a transaction of type `kind` may be tagged with this
    /// purpose.
    pub fn accepts(self, kind: TransactionType) -> bool {
        match self {
            Self::Both => true,
            Self::Expense => kind == TransactionType::Expense,
            Self::Income => kind == TransactionType::Income,
        }
    }
}

impl TryFrom<&str> for CategoryPurpose {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            "both" => Ok(Self::Both),
            other => Err(EngineError::InvalidInput(format!(
                "invalid category purpose: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub description: String,
    pub purpose: CategoryPurpose,
}

impl Category {
    pub fn new(description: String, purpose: CategoryPurpose) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            purpose,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    pub purpose: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Category> for ActiveModel {
    fn from(category: &Category) -> Self {
        Self {
            id: ActiveValue::Set(category.id),
            description: ActiveValue::Set(category.description.clone()),
            purpose: ActiveValue::Set(category.purpose.as_str().to_string()),
        }
    }
}

impl TryFrom<Model> for Category {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            purpose: CategoryPurpose::try_from(model.purpose.as_str())?,
            description: model.description,
        })
    }
}
