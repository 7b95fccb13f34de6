use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_club_table::Club,
    m20260110_000004_create_application_form_table::ApplicationForm,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applicant::Table)
                    .if_not_exists()
                    .col(pk_auto(Applicant::Id))
                    .col(string_len(Applicant::FirstName, 100))
                    .col(string_len(Applicant::LastName, 100))
                    .col(small_integer(Applicant::Year))
                    .col(string_len(Applicant::Stage, 32).default("Applied"))
                    .col(integer(Applicant::ClubId))
                    .col(integer_null(Applicant::ApplicationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applicant_club_id")
                            .from(Applicant::Table, Applicant::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applicant_application_id")
                            .from(Applicant::Table, Applicant::ApplicationId)
                            .to(ApplicationForm::Table, ApplicationForm::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Scoped listings filter on club
        manager
            .create_index(
                Index::create()
                    .name("idx_applicant_club_id")
                    .table(Applicant::Table)
                    .col(Applicant::ClubId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_applicant_club_id")
                    .table(Applicant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Applicant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Applicant {
    Table,
    Id,
    FirstName,
    LastName,
    Year,
    Stage,
    ClubId,
    ApplicationId,
}
