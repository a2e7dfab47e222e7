// Table de liaison M2M activite <-> lieu_evenement

use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activite_lieu")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub activite_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub lieu_id: i32,
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
        belongs_to = "super::lieu_evenement::Entity",
        from = "Column::LieuId",
        to = "super::lieu_evenement::Column::Id",
        on_delete = "Cascade"
    )]
    Lieu,
}

impl Related<super::activite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activite.def()
    }
}

impl Related<super::lieu_evenement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lieu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
