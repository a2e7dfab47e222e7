use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categorie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub label: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activite_categorie::Entity")]
    ActiviteCategorie,
}

impl Related<super::activite::Entity> for Entity {
    fn to() -> RelationDef {
        super::activite_categorie::Relation::Activite.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activite_categorie::Relation::Categorie.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
