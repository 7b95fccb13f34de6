use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000004_create_application_form_table::ApplicationForm;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplicationQuestion::Id))
                    .col(integer(ApplicationQuestion::FormId))
                    .col(string_len(ApplicationQuestion::QuestionType, 100))
                    .col(string_len(ApplicationQuestion::Prompt, 100))
                    .col(boolean(ApplicationQuestion::Required).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_question_form_id")
                            .from(ApplicationQuestion::Table, ApplicationQuestion::FormId)
                            .to(ApplicationForm::Table, ApplicationForm::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationQuestion {
    Table,
    Id,
    FormId,
    QuestionType,
    Prompt,
    Required,
}
