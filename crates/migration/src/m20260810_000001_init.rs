//! Initial schema migration - creates all tables from scratch.
//!
//! The complete schema for DivvyUp:
//!
//! - `users`: accounts, each carrying the running `total_expenses` balance
//! - `friends`: named friends of a user
//! - `bills`: split bills with the owner's and the friends' shares
//! - `bill_participants`: who was on each bill
//! - `items`: itemized purchases attached to a user

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    TotalExpenses,
    CreatedAt,
}

#[derive(Iden)]
enum Friends {
    Table,
    Id,
    UserId,
    Name,
    Expenses,
    CreatedAt,
}

#[derive(Iden)]
enum Bills {
    Table,
    Id,
    UserId,
    Description,
    MySpending,
    FriendsSpending,
    TotalSpending,
    IncludesMe,
    CreatedAt,
}

#[derive(Iden)]
enum BillParticipants {
    Table,
    Id,
    BillId,
    Name,
    Position,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    UserId,
    Description,
    ItemName,
    Cost,
    Friends,
    CreatedAt,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::TotalExpenses)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-username-unique")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-email-unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Friends
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Friends::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Friends::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Friends::UserId).string().not_null())
                    .col(ColumnDef::new(Friends::Name).string().not_null())
                    .col(ColumnDef::new(Friends::Expenses).double().not_null())
                    .col(ColumnDef::new(Friends::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-friends-user_id")
                            .from(Friends::Table, Friends::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-friends-user_id")
                    .table(Friends::Table)
                    .col(Friends::UserId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Bills
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Bills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bills::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Bills::UserId).string().not_null())
                    .col(ColumnDef::new(Bills::Description).string().not_null())
                    .col(ColumnDef::new(Bills::MySpending).double().not_null())
                    .col(
                        ColumnDef::new(Bills::FriendsSpending)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bills::TotalSpending).double().not_null())
                    .col(ColumnDef::new(Bills::IncludesMe).boolean().not_null())
                    .col(ColumnDef::new(Bills::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bills-user_id")
                            .from(Bills::Table, Bills::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-bills-user_id")
                    .table(Bills::Table)
                    .col(Bills::UserId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Bill participants
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(BillParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillParticipants::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BillParticipants::BillId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BillParticipants::Name).string().not_null())
                    .col(
                        ColumnDef::new(BillParticipants::Position)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bill_participants-bill_id")
                            .from(BillParticipants::Table, BillParticipants::BillId)
                            .to(Bills::Table, Bills::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-bill_participants-bill_id")
                    .table(BillParticipants::Table)
                    .col(BillParticipants::BillId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Items
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Items::UserId).string().not_null())
                    .col(ColumnDef::new(Items::Description).string().not_null())
                    .col(ColumnDef::new(Items::ItemName).string().not_null())
                    .col(ColumnDef::new(Items::Cost).double().not_null())
                    .col(ColumnDef::new(Items::Friends).string().not_null())
                    .col(ColumnDef::new(Items::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-items-user_id")
                            .from(Items::Table, Items::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-items-user_id")
                    .table(Items::Table)
                    .col(Items::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BillParticipants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Friends::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
