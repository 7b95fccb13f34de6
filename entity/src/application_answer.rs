use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application_answer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub submission_id: i32,
    pub question_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub answer_text: Option<String>,
    pub answer_file: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_submission::Entity",
        from = "Column::SubmissionId",
        to = "super::application_submission::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApplicationSubmission,
    #[sea_orm(
        belongs_to = "super::application_question::Entity",
        from = "Column::QuestionId",
        to = "super::application_question::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApplicationQuestion,
}

impl Related<super::application_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationSubmission.def()
    }
}

impl Related<super::application_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
