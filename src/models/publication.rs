// ============================================================================
// MODÈLE : PUBLICATION (prédications et posts)
// ============================================================================
//
// Points d'attention:
//   - auteur_id est UNIQUE: un compte ne peut signer qu'une publication
//   - image / video stockent le chemin relatif du fichier, rangé sous
//     predication_images/ et predication_videos/
//
// ============================================================================

use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

use super::enums::PublicationType;

pub const IMAGE_UPLOAD_DIR: &str = "predication_images/";
pub const VIDEO_UPLOAD_DIR: &str = "predication_videos/";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publication")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "type")]
    #[sea_orm(column_name = "type")]
    pub publication_type: Option<PublicationType>,
    #[sea_orm(unique)]
    pub auteur_id: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub theme: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_courte: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_longue: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub image: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub video: Option<String>,
    pub status: bool,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuteurId",
        to = "super::users::Column::Id",
        on_delete = "SetNull"
    )]
    Auteur,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auteur.def()
    }
}

super::status_and_create_date_behavior!();

/// Chemin de stockage d'une image de prédication
pub fn image_path(file_name: &str) -> String {
    format!("{}{}", IMAGE_UPLOAD_DIR, file_name.trim_start_matches('/'))
}

/// Chemin de stockage d'une vidéo de prédication
pub fn video_path(file_name: &str) -> String {
    format!("{}{}", VIDEO_UPLOAD_DIR, file_name.trim_start_matches('/'))
}
