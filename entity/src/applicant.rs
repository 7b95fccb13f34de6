use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "applicant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Class year code, 1 (Freshman) through 4 (Senior).
    pub year: i16,
    pub stage: String,
    pub club_id: i32,
    pub application_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::application_form::Entity",
        from = "Column::ApplicationId",
        to = "super::application_form::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ApplicationForm,
    #[sea_orm(has_one = "super::application_submission::Entity")]
    ApplicationSubmission,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::application_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationForm.def()
    }
}

impl Related<super::application_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
