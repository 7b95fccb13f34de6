use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application_form::Entity")]
    ApplicationForm,
    #[sea_orm(has_many = "super::applicant::Entity")]
    Applicant,
    #[sea_orm(has_many = "super::profile::Entity")]
    Profile,
}

impl Related<super::application_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationForm.def()
    }
}

impl Related<super::applicant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
