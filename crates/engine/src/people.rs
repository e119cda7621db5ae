//! People who own transactions.

use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::util::normalize_key;

/// Age from which a person may record incomes.
pub const ADULT_AGE: i32 = 18;
pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 130;
pub const NAME_MAX_LEN: usize = 150;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: String, age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            age,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub name_norm: String,
    pub age: i32,
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

impl From<&Person> for ActiveModel {
    fn from(person: &Person) -> Self {
        Self {
            id: ActiveValue::Set(person.id),
            name: ActiveValue::Set(person.name.clone()),
            name_norm: ActiveValue::Set(normalize_key(&person.name)),
            age: ActiveValue::Set(person.age),
        }
    }
}

impl From<Model> for Person {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
        }
    }
}
