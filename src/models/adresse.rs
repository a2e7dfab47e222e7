use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "adresse")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    // One-to-one: une commune ne porte qu'une seule adresse
    #[sea_orm(unique)]
    pub commune_id: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub quartier: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub avenue: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub numero: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::commune::Entity",
        from = "Column::CommuneId",
        to = "super::commune::Column::Id",
        on_delete = "SetNull"
    )]
    Commune,

    #[sea_orm(has_many = "super::users::Entity")]
    Users,

    #[sea_orm(has_many = "super::lieu_evenement::Entity")]
    LieuEvenement,
}

impl Related<super::commune::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commune.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::lieu_evenement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LieuEvenement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
