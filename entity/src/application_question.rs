use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application_question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: i32,
    pub question_type: String,
    pub prompt: String,
    pub required: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_form::Entity",
        from = "Column::FormId",
        to = "super::application_form::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApplicationForm,
    #[sea_orm(has_many = "super::application_answer::Entity")]
    ApplicationAnswer,
}

impl Related<super::application_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationForm.def()
    }
}

impl Related<super::application_answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationAnswer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
