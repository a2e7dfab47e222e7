use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profession")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub label: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users_profession::Entity")]
    UsersProfession,
}

// Comptes exerçant cette profession (via custom_user_profession)
impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_profession::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_profession::Relation::Profession.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
