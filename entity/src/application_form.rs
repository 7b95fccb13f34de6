use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application_form")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub club_id: i32,
    pub title: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubId",
        to = "super::club::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Club,
    #[sea_orm(has_many = "super::application_question::Entity")]
    ApplicationQuestion,
    #[sea_orm(has_many = "super::application_submission::Entity")]
    ApplicationSubmission,
    #[sea_orm(has_many = "super::applicant::Entity")]
    Applicant,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::application_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationQuestion.def()
    }
}

impl Related<super::application_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationSubmission.def()
    }
}

impl Related<super::applicant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
