use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lieu_evenement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub appelation: Option<String>,
    #[sea_orm(indexed)]
    pub adresse_id: Option<i32>,
    pub status: bool,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::adresse::Entity",
        from = "Column::AdresseId",
        to = "super::adresse::Column::Id",
        on_delete = "SetNull"
    )]
    Adresse,

    #[sea_orm(has_many = "super::activite_lieu::Entity")]
    ActiviteLieu,
}

impl Related<super::adresse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Adresse.def()
    }
}

impl Related<super::activite::Entity> for Entity {
    fn to() -> RelationDef {
        super::activite_lieu::Relation::Activite.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activite_lieu::Relation::Lieu.def().rev())
    }
}

super::status_and_create_date_behavior!();
