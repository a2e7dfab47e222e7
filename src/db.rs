// connexion BD + création du schéma à partir des entités

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::models::{
    activite, activite_categorie, activite_crenaux_horaire, activite_lieu, adresse, categorie,
    commentaire, commune, communique, crenaux_horaire, lieu_evenement, profession,
    programme_habituel, publication, users, users_profession,
};

pub async fn establish_connection(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Crée les tables (et index) manquants, parents avant enfants
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, commune::Entity).await?;
    create_table(db, adresse::Entity).await?;
    create_table(db, profession::Entity).await?;
    create_table(db, categorie::Entity).await?;
    create_table(db, users::Entity).await?;
    create_table(db, users_profession::Entity).await?;
    create_table(db, programme_habituel::Entity).await?;
    create_table(db, communique::Entity).await?;
    create_table(db, publication::Entity).await?;
    create_table(db, commentaire::Entity).await?;
    create_table(db, lieu_evenement::Entity).await?;
    create_table(db, crenaux_horaire::Entity).await?;
    create_table(db, activite::Entity).await?;
    create_table(db, activite_categorie::Entity).await?;
    create_table(db, activite_lieu::Entity).await?;
    create_table(db, activite_crenaux_horaire::Entity).await?;

    info!("Schema is up to date");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    debug!(table = entity.table_name(), "table ready");
    Ok(())
}

#[cfg(test)]
pub async fn test_connection() -> DatabaseConnection {
    // Une seule connexion: chaque connexion SQLite en mémoire a sa propre base
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.expect("in-memory sqlite");
    create_schema(&db).await.expect("schema creation");
    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, ModelTrait, PaginatorTrait, Set};

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let db = test_connection().await;
        create_schema(&db).await.unwrap();
    }

    #[tokio::test]
    async fn test_deleting_adresse_nullifies_references() {
        let db = test_connection().await;

        let adresse = adresse::ActiveModel {
            avenue: Set(Some("Avenue de la Paix".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let lieu = lieu_evenement::ActiveModel {
            appelation: Set(Some("Temple central".to_string())),
            adresse_id: Set(Some(adresse.id)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        adresse.delete(&db).await.unwrap();

        let lieu = lieu_evenement::Entity::find_by_id(lieu.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(lieu.adresse_id, None);
    }

    #[tokio::test]
    async fn test_commune_holds_a_single_adresse() {
        let db = test_connection().await;

        let commune = commune::ActiveModel {
            label: Set(Some("Gombe".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let first = adresse::ActiveModel {
            commune_id: Set(Some(commune.id)),
            ..Default::default()
        };
        first.insert(&db).await.unwrap();

        let second = adresse::ActiveModel {
            commune_id: Set(Some(commune.id)),
            ..Default::default()
        };
        assert!(second.insert(&db).await.is_err());

        let found = commune.find_related(adresse::Entity).one(&db).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_create_date_is_stamped_once() {
        let db = test_connection().await;

        let communique = communique::ActiveModel {
            titre: Set(Some("Retraite annuelle".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        assert!(!communique.status);
        let stamped = communique.create_date;

        let mut active: communique::ActiveModel = communique.into();
        active.titre = Set(Some("Retraite annuelle 2026".to_string()));
        active.status = Set(true);
        active.create_date = Set(stamped + chrono::Duration::days(30));
        let updated = active.update(&db).await.unwrap();

        assert!(updated.status);
        assert_eq!(updated.create_date, stamped);
    }

    #[tokio::test]
    async fn test_username_is_unique_in_schema() {
        let db = test_connection().await;

        users::ActiveModel {
            username: Set("pasteur".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let duplicate = users::ActiveModel {
            username: Set("pasteur".to_string()),
            ..Default::default()
        };
        let err = duplicate.insert(&db).await.unwrap_err();
        assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));

        assert_eq!(users::Entity::find().count(&db).await.unwrap(), 1);
    }
}
