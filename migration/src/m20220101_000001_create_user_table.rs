use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .string()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Password)
                            .string()
                            .null()
                    )
                    .col(
                        ColumnDef::new(User::FirstName)
                            .string()
                            .not_null()
                            .default("")
                    )
                    .col(
                        ColumnDef::new(User::LastName)
                            .string()
                            .not_null()
                            .default("")
                    )
                    .col(
                        ColumnDef::new(User::InviteCode)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::IsEmailVerified)
                            .boolean()
                            .not_null()
                            .default(false)
                    )
                    .col(
                        ColumnDef::new(User::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        // first writer wins on concurrent signups with the same email
        manager
            .create_index(
                Index::create()
                    .name("idx_user_email_unique")
                    .table(User::Table)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(User::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Email,
    Password,
    FirstName,
    LastName,
    InviteCode,
    IsEmailVerified,
    CreatedAt,
    UpdatedAt,
}
