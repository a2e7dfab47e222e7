// ============================================================================
// MODÈLE : ACTIVITÉ
// ============================================================================
//
// Description:
//   Événement de l'église sur une période (date_debut -> date_fin), rattaché
//   à des catégories, des lieux et des créneaux horaires (trois M2M).
//
// Tables de liaison:
//   - activite_categorie (activite_id, categorie_id)
//   - activite_lieu (activite_id, lieu_id)
//   - activite_crenaux_horaire (activite_id, crenaux_horaire_id)
//
// ============================================================================

use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub titre: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub date_debut: Option<Date>,
    pub date_fin: Option<Date>,
    pub status: bool,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activite_categorie::Entity")]
    ActiviteCategorie,

    #[sea_orm(has_many = "super::activite_lieu::Entity")]
    ActiviteLieu,

    #[sea_orm(has_many = "super::activite_crenaux_horaire::Entity")]
    ActiviteCrenauxHoraire,
}

impl Related<super::categorie::Entity> for Entity {
    fn to() -> RelationDef {
        super::activite_categorie::Relation::Categorie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activite_categorie::Relation::Activite.def().rev())
    }
}

impl Related<super::lieu_evenement::Entity> for Entity {
    fn to() -> RelationDef {
        super::activite_lieu::Relation::Lieu.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activite_lieu::Relation::Activite.def().rev())
    }
}

impl Related<super::crenaux_horaire::Entity> for Entity {
    fn to() -> RelationDef {
        super::activite_crenaux_horaire::Relation::CrenauxHoraire.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activite_crenaux_horaire::Relation::Activite.def().rev())
    }
}

super::status_and_create_date_behavior!();

impl Model {
    /// Vrai si `day` tombe dans [date_debut, date_fin] (bornes absentes = ouvertes)
    pub fn covers(&self, day: Date) -> bool {
        let after_start = self.date_debut.is_none_or(|debut| day >= debut);
        let before_end = self.date_fin.is_none_or(|fin| day <= fin);
        after_start && before_end
    }
}
