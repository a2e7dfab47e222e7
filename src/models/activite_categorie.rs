// Table de liaison M2M activite <-> categorie

use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activite_categorie")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub activite_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub categorie_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activite::Entity",
        from = "Column::ActiviteId",
        to = "super::activite::Column::Id",
        on_delete = "Cascade"
    )]
    Activite,

    #[sea_orm(
        belongs_to = "super::categorie::Entity",
        from = "Column::CategorieId",
        to = "super::categorie::Column::Id",
        on_delete = "Cascade"
    )]
    Categorie,
}

impl Related<super::activite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activite.def()
    }
}

impl Related<super::categorie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categorie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
