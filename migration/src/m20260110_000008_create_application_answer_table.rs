use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000005_create_application_question_table::ApplicationQuestion,
    m20260110_000007_create_application_submission_table::ApplicationSubmission,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationAnswer::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationAnswer::Id))
                    .col(integer(ApplicationAnswer::SubmissionId))
                    .col(integer(ApplicationAnswer::QuestionId))
                    .col(text_null(ApplicationAnswer::AnswerText))
                    .col(string_null(ApplicationAnswer::AnswerFile))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_answer_submission_id")
                            .from(ApplicationAnswer::Table, ApplicationAnswer::SubmissionId)
                            .to(ApplicationSubmission::Table, ApplicationSubmission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_answer_question_id")
                            .from(ApplicationAnswer::Table, ApplicationAnswer::QuestionId)
                            .to(ApplicationQuestion::Table, ApplicationQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One answer per question per submission
        manager
            .create_index(
                Index::create()
                    .name("idx_application_answer_unique")
                    .table(ApplicationAnswer::Table)
                    .col(ApplicationAnswer::SubmissionId)
                    .col(ApplicationAnswer::QuestionId)
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
                    .name("idx_application_answer_unique")
                    .table(ApplicationAnswer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApplicationAnswer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationAnswer {
    Table,
    Id,
    SubmissionId,
    QuestionId,
    AnswerText,
    AnswerFile,
}
