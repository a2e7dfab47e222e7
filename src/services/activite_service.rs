use chrono::NaiveDate;
use sea_orm::*;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use super::dedup_ids;
use crate::error::AppError;
use crate::models::{
    activite, activite_categorie, activite_crenaux_horaire, activite_lieu, categorie,
    crenaux_horaire, lieu_evenement,
};

/// Données de création d'une activité et de ses liaisons
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct NewActivite {
    #[validate(length(max = 100))]
    pub titre: Option<String>,
    pub description: Option<String>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
    pub status: bool,
    pub categories: Vec<i32>,
    pub lieux: Vec<i32>,
    pub crenaux_horaires: Vec<i32>,
}

pub struct ActiviteService;

impl ActiviteService {
    /// Insère l'activité puis ses catégories, lieux et créneaux (une transaction)
    pub async fn create(
        db: &DatabaseConnection,
        request: NewActivite,
    ) -> Result<activite::Model, AppError> {
        request.validate()?;

        if let (Some(debut), Some(fin)) = (request.date_debut, request.date_fin) {
            if fin < debut {
                return Err(AppError::Validation(format!(
                    "date_fin ({}) is before date_debut ({})",
                    fin, debut
                )));
            }
        }

        let txn = db.begin().await?;

        let new_activite = activite::ActiveModel {
            titre: Set(request.titre),
            description: Set(request.description),
            date_debut: Set(request.date_debut),
            date_fin: Set(request.date_fin),
            status: Set(request.status),
            ..Default::default()
        };
        let activite = new_activite.insert(&txn).await?;

        Self::link_categories(&txn, activite.id, &request.categories).await?;
        Self::link_lieux(&txn, activite.id, &request.lieux).await?;
        Self::link_crenaux(&txn, activite.id, &request.crenaux_horaires).await?;

        txn.commit().await?;

        info!(
            activite_id = activite.id,
            categories = request.categories.len(),
            lieux = request.lieux.len(),
            crenaux = request.crenaux_horaires.len(),
            "Activite created"
        );
        Ok(activite)
    }

    async fn link_categories(
        txn: &DatabaseTransaction,
        activite_id: i32,
        ids: &[i32],
    ) -> Result<(), AppError> {
        for categorie_id in dedup_ids(ids) {
            if categorie::Entity::find_by_id(categorie_id).one(txn).await?.is_none() {
                return Err(AppError::NotFound { entity: "categorie", id: categorie_id });
            }
            let link = activite_categorie::ActiveModel {
                activite_id: Set(activite_id),
                categorie_id: Set(categorie_id),
            };
            link.insert(txn).await?;
        }
        Ok(())
    }

    async fn link_lieux(
        txn: &DatabaseTransaction,
        activite_id: i32,
        ids: &[i32],
    ) -> Result<(), AppError> {
        for lieu_id in dedup_ids(ids) {
            if lieu_evenement::Entity::find_by_id(lieu_id).one(txn).await?.is_none() {
                return Err(AppError::NotFound { entity: "lieu_evenement", id: lieu_id });
            }
            let link = activite_lieu::ActiveModel {
                activite_id: Set(activite_id),
                lieu_id: Set(lieu_id),
            };
            link.insert(txn).await?;
        }
        Ok(())
    }

    async fn link_crenaux(
        txn: &DatabaseTransaction,
        activite_id: i32,
        ids: &[i32],
    ) -> Result<(), AppError> {
        for crenaux_horaire_id in dedup_ids(ids) {
            if crenaux_horaire::Entity::find_by_id(crenaux_horaire_id).one(txn).await?.is_none() {
                return Err(AppError::NotFound { entity: "crenaux_horaire", id: crenaux_horaire_id });
            }
            let link = activite_crenaux_horaire::ActiveModel {
                activite_id: Set(activite_id),
                crenaux_horaire_id: Set(crenaux_horaire_id),
            };
            link.insert(txn).await?;
        }
        Ok(())
    }

    pub async fn categories(
        db: &DatabaseConnection,
        activite: &activite::Model,
    ) -> Result<Vec<categorie::Model>, DbErr> {
        activite
            .find_related(categorie::Entity)
            .order_by_asc(categorie::Column::Id)
            .all(db)
            .await
    }

    pub async fn lieux(
        db: &DatabaseConnection,
        activite: &activite::Model,
    ) -> Result<Vec<lieu_evenement::Model>, DbErr> {
        activite
            .find_related(lieu_evenement::Entity)
            .order_by_asc(lieu_evenement::Column::Id)
            .all(db)
            .await
    }

    /// Créneaux triés par jour puis heure de début
    pub async fn crenaux_horaires(
        db: &DatabaseConnection,
        activite: &activite::Model,
    ) -> Result<Vec<crenaux_horaire::Model>, DbErr> {
        activite
            .find_related(crenaux_horaire::Entity)
            .order_by_asc(crenaux_horaire::Column::Jour)
            .order_by_asc(crenaux_horaire::Column::HeureDebut)
            .all(db)
            .await
    }

    /// Activités actives (status = true) qui couvrent `day`
    pub async fn active_on(
        db: &DatabaseConnection,
        day: NaiveDate,
    ) -> Result<Vec<activite::Model>, DbErr> {
        let activites = activite::Entity::find()
            .filter(activite::Column::Status.eq(true))
            .order_by_asc(activite::Column::DateDebut)
            .all(db)
            .await?;

        Ok(activites.into_iter().filter(|a| a.covers(day)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use crate::db::test_connection;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_links_everything() {
        let db = test_connection().await;

        let jeunesse = categorie::ActiveModel {
            label: Set(Some("Jeunesse".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let temple = lieu_evenement::ActiveModel {
            appelation: Set(Some("Temple".to_string())),
            status: Set(true),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let samedi = crenaux_horaire::ActiveModel {
            jour: Set(Some(date(2026, 11, 7))),
            heure_debut: Set(Some(time(14, 0))),
            heure_fin: Set(Some(time(17, 0))),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let vendredi = crenaux_horaire::ActiveModel {
            jour: Set(Some(date(2026, 11, 6))),
            heure_debut: Set(Some(time(18, 0))),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let request = NewActivite {
            titre: Some("Camp de jeunesse".to_string()),
            date_debut: Some(date(2026, 11, 6)),
            date_fin: Some(date(2026, 11, 8)),
            status: true,
            categories: vec![jeunesse.id, jeunesse.id],
            lieux: vec![temple.id],
            crenaux_horaires: vec![samedi.id, vendredi.id],
            ..Default::default()
        };
        let activite = ActiviteService::create(&db, request).await.unwrap();

        assert_eq!(ActiviteService::categories(&db, &activite).await.unwrap(), vec![jeunesse]);
        assert_eq!(ActiviteService::lieux(&db, &activite).await.unwrap().len(), 1);

        let crenaux = ActiviteService::crenaux_horaires(&db, &activite).await.unwrap();
        let ids: Vec<i32> = crenaux.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![vendredi.id, samedi.id]);

        let from_venue = temple.find_related(activite::Entity).all(&db).await.unwrap();
        assert_eq!(from_venue.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_dates() {
        let db = test_connection().await;

        let request = NewActivite {
            date_debut: Some(date(2026, 12, 25)),
            date_fin: Some(date(2026, 12, 24)),
            ..Default::default()
        };
        let err = ActiviteService::create(&db, request).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_unknown_lieu_rolls_back() {
        let db = test_connection().await;

        let request = NewActivite {
            titre: Some("Veillée".to_string()),
            lieux: vec![99],
            ..Default::default()
        };
        let err = ActiviteService::create(&db, request).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { entity: "lieu_evenement", id: 99 }));
        assert_eq!(activite::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_active_on() {
        let db = test_connection().await;

        let noel = NewActivite {
            titre: Some("Noël".to_string()),
            date_debut: Some(date(2026, 12, 24)),
            date_fin: Some(date(2026, 12, 25)),
            status: true,
            ..Default::default()
        };
        let brouillon = NewActivite {
            titre: Some("Brouillon".to_string()),
            status: false,
            ..Default::default()
        };
        ActiviteService::create(&db, noel).await.unwrap();
        ActiviteService::create(&db, brouillon).await.unwrap();

        let found = ActiviteService::active_on(&db, date(2026, 12, 25)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].titre.as_deref(), Some("Noël"));

        assert!(ActiviteService::active_on(&db, date(2026, 12, 26)).await.unwrap().is_empty());
    }
}
