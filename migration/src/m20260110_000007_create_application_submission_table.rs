use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000004_create_application_form_table::ApplicationForm,
    m20260110_000006_create_applicant_table::Applicant,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationSubmission::Id))
                    .col(integer(ApplicationSubmission::FormId))
                    .col(integer_uniq(ApplicationSubmission::ApplicantId))
                    .col(string_len(ApplicationSubmission::Status, 100).default("Draft"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_submission_form_id")
                            .from(ApplicationSubmission::Table, ApplicationSubmission::FormId)
                            .to(ApplicationForm::Table, ApplicationForm::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_submission_applicant_id")
                            .from(
                                ApplicationSubmission::Table,
                                ApplicationSubmission::ApplicantId,
                            )
                            .to(Applicant::Table, Applicant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One submission per applicant per form
        manager
            .create_index(
                Index::create()
                    .name("idx_application_submission_unique")
                    .table(ApplicationSubmission::Table)
                    .col(ApplicationSubmission::FormId)
                    .col(ApplicationSubmission::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_application_submission_unique")
                    .table(ApplicationSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApplicationSubmission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationSubmission {
    Table,
    Id,
    FormId,
    ApplicantId,
    Status,
}
