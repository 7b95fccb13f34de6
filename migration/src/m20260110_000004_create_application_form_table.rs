use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationForm::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationForm::Id))
                    .col(integer(ApplicationForm::ClubId))
                    .col(string_len(ApplicationForm::Title, 100))
                    .col(
                        timestamp(ApplicationForm::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ApplicationForm::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_form_club_id")
                            .from(ApplicationForm::Table, ApplicationForm::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationForm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationForm {
    Table,
    Id,
    ClubId,
    Title,
    CreatedAt,
    UpdatedAt,
}
