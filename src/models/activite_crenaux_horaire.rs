// Table de liaison M2M activite <-> crenaux_horaire

use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activite_crenaux_horaire")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub activite_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub crenaux_horaire_id: i32,
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
        belongs_to = "super::crenaux_horaire::Entity",
        from = "Column::CrenauxHoraireId",
        to = "super::crenaux_horaire::Column::Id",
        on_delete = "Cascade"
    )]
    CrenauxHoraire,
}

impl Related<super::activite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activite.def()
    }
}

impl Related<super::crenaux_horaire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrenauxHoraire.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
