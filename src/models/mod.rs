// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données de l'église.
//   Chaque modèle correspond à une table créée par db::create_schema.
//
// Liste des modules:
//   - commune, adresse : Zones municipales et adresses
//   - profession, categorie : Référentiels (libellés)
//   - users : Comptes (CustomUser) + users_profession (M2M)
//   - programme_habituel : Programme hebdomadaire récurrent
//   - communique : Annonces
//   - publication : Prédications et posts
//   - commentaire : Commentaires
//   - lieu_evenement : Lieux des événements
//   - crenaux_horaire : Créneaux horaires
//   - activite : Activités + tables M2M (categorie, lieu, crenaux)
//   - enums : Role et PublicationType
//
// Points d'attention:
//   - create_date est posé à l'insertion et jamais modifié ensuite
//   - Publication/Commentaire -> auteur et Adresse -> commune sont UNIQUE
//     (relations one-to-one)
//   - Les clés étrangères optionnelles passent à NULL à la suppression
//
// ============================================================================

// Hooks d'insertion communs aux entités avec `status` + `create_date`
macro_rules! status_and_create_date_behavior {
    () => {
        #[::async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let mut this = self;
                if insert {
                    this.create_date = sea_orm::ActiveValue::Set(chrono::Utc::now());
                    if this.status.is_not_set() {
                        this.status = sea_orm::ActiveValue::Set(false);
                    }
                } else if this.create_date.is_set() {
                    this.create_date = sea_orm::ActiveValue::NotSet;
                }
                Ok(this)
            }
        }
    };
}

pub(crate) use status_and_create_date_behavior;

pub mod enums;
pub mod commune;
pub mod adresse;
pub mod profession;
pub mod categorie;
pub mod users;
pub mod users_profession;
pub mod programme_habituel;
pub mod communique;
pub mod publication;
pub mod commentaire;
pub mod lieu_evenement;
pub mod crenaux_horaire;
pub mod activite;
pub mod activite_categorie;
pub mod activite_lieu;
pub mod activite_crenaux_horaire;
