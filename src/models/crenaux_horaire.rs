use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crenaux_horaire")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub jour: Option<Date>,
    pub heure_debut: Option<Time>,
    pub heure_fin: Option<Time>,
    pub status: bool,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activite_crenaux_horaire::Entity")]
    ActiviteCrenauxHoraire,
}

impl Related<super::activite::Entity> for Entity {
    fn to() -> RelationDef {
        super::activite_crenaux_horaire::Relation::Activite.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activite_crenaux_horaire::Relation::CrenauxHoraire.def().rev())
    }
}

super::status_and_create_date_behavior!();
