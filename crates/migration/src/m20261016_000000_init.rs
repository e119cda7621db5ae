//! Initial schema.
//!
//! - `people`: who records transactions; `name_norm` holds the comparison key
//!   used for name lookups and the optional uniqueness check
//! - `categories`: labels with the purpose they accept
//! - `transactions`: amounts in integer cents, each owned by one person and
//!   tagged with one category

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum People {
    Table,
    Id,
    Name,
    NameNorm,
    Age,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Description,
    Purpose,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    Description,
    AmountMinor,
    Kind,
    PersonId,
    CategoryId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(People::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(People::Name).string_len(150).not_null())
                    .col(ColumnDef::new(People::NameNorm).string_len(150).not_null())
                    .col(ColumnDef::new(People::Age).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Not unique: uniqueness is a configurable engine policy.
        manager
            .create_index(
                Index::create()
                    .name("idx-people-name_norm")
                    .table(People::Table)
                    .col(People::NameNorm)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-people-name")
                    .table(People::Table)
                    .col(People::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::Description)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Categories::Purpose).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-categories-description")
                    .table(Categories::Table)
                    .col(Categories::Description)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Description)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Kind).string().not_null())
                    .col(ColumnDef::new(Transactions::PersonId).uuid().not_null())
                    .col(ColumnDef::new(Transactions::CategoryId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-person_id")
                            .from(Transactions::Table, Transactions::PersonId)
                            .to(People::Table, People::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-category_id")
                            .from(Transactions::Table, Transactions::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-description")
                    .table(Transactions::Table)
                    .col(Transactions::Description)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-person_id")
                    .table(Transactions::Table)
                    .col(Transactions::PersonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-category_id")
                    .table(Transactions::Table)
                    .col(Transactions::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        Ok(())
    }
}
