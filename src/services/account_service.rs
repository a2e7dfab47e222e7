use chrono::{DateTime, Utc};
use sea_orm::*;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use super::dedup_ids;
use crate::error::AppError;
use crate::models::enums::Role;
use crate::models::{adresse, profession, users, users_profession};
use crate::utils::password::PasswordHasher;

const USERNAME_MAX_LENGTH: usize = 50;

/// Champs optionnels acceptés à la création d'un compte
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ExtraFields {
    pub role: Option<Role>,
    #[validate(length(max = 50))]
    pub name: Option<String>,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(length(max = 100))]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    pub adresse_id: Option<i32>,
    pub professions: Vec<i32>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub date_joined: Option<DateTime<Utc>>,
}

pub struct AccountService {
    hasher: PasswordHasher,
}

impl AccountService {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Crée et enregistre un compte avec le username et le mot de passe donnés
    /// Sans mot de passe, le compte reçoit un mot de passe inutilisable
    /// Le username est stocké tel quel: seule la chaîne vide est refusée
    pub async fn create_user(
        &self,
        db: &DatabaseConnection,
        username: &str,
        password: Option<&str>,
        extra: ExtraFields,
    ) -> Result<users::Model, AppError> {
        // 1. Valider les entrées avant toute requête
        if username.is_empty() {
            return Err(AppError::Validation("The username must be set".to_string()));
        }
        if username.chars().count() > USERNAME_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "The username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }
        extra.validate()?;

        let txn = db.begin().await?;

        // 2. Vérifier si le username existe déjà
        let existing = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        if let Some(adresse_id) = extra.adresse_id {
            if adresse::Entity::find_by_id(adresse_id).one(&txn).await?.is_none() {
                return Err(AppError::NotFound { entity: "adresse", id: adresse_id });
            }
        }

        // 3. Construire le compte et hasher le mot de passe
        let mut new_user = users::ActiveModel {
            username: Set(username.to_string()),
            name: Set(extra.name),
            first_name: Set(extra.first_name),
            last_name: Set(extra.last_name),
            email: Set(extra.email),
            phone: Set(extra.phone),
            adresse_id: Set(extra.adresse_id),
            ..Default::default()
        };
        if let Some(role) = extra.role {
            new_user.role = Set(role);
        }
        if let Some(is_staff) = extra.is_staff {
            new_user.is_staff = Set(is_staff);
        }
        if let Some(is_active) = extra.is_active {
            new_user.is_active = Set(is_active);
        }
        if let Some(is_superuser) = extra.is_superuser {
            new_user.is_superuser = Set(is_superuser);
        }
        if let Some(date_joined) = extra.date_joined {
            new_user.date_joined = Set(date_joined);
        }
        new_user.set_password(&self.hasher, password)?;

        // 4. Insérer (la contrainte UNIQUE couvre les créations concurrentes)
        let user = insert_account(&txn, new_user, username).await?;

        // 5. Rattacher les professions (M2M)
        for profession_id in dedup_ids(&extra.professions) {
            if profession::Entity::find_by_id(profession_id).one(&txn).await?.is_none() {
                return Err(AppError::NotFound { entity: "profession", id: profession_id });
            }

            users_profession::ActiveModel {
                user_id: Set(user.id),
                profession_id: Set(profession_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        info!(user_id = user.id, username = %user.username, role = %user.role, "Account created");
        Ok(user)
    }

    /// Crée un superuser: is_staff, is_superuser et is_active valent true par défaut
    pub async fn create_superuser(
        &self,
        db: &DatabaseConnection,
        username: &str,
        password: Option<&str>,
        mut extra: ExtraFields,
    ) -> Result<users::Model, AppError> {
        let is_staff = *extra.is_staff.get_or_insert(true);
        let is_superuser = *extra.is_superuser.get_or_insert(true);
        extra.is_active.get_or_insert(true);

        if !is_staff {
            warn!(username, "Refused superuser without is_staff");
            return Err(AppError::Validation("Superuser must have is_staff=True.".to_string()));
        }
        if !is_superuser {
            warn!(username, "Refused superuser without is_superuser");
            return Err(AppError::Validation("Superuser must have is_superuser=True.".to_string()));
        }

        self.create_user(db, username, password, extra).await
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(db)
            .await
    }

    /// Professions d'un compte, triées par libellé
    pub async fn professions(
        db: &DatabaseConnection,
        user: &users::Model,
    ) -> Result<Vec<profession::Model>, DbErr> {
        user.find_related(profession::Entity)
            .order_by_asc(profession::Column::Label)
            .all(db)
            .await
    }

    /// Remplace le mot de passe d'un compte existant
    pub async fn update_password(
        &self,
        db: &DatabaseConnection,
        user: users::Model,
        raw: Option<&str>,
    ) -> Result<users::Model, AppError> {
        let mut active: users::ActiveModel = user.into();
        active.set_password(&self.hasher, raw)?;
        Ok(active.update(db).await?)
    }
}

// Violation de l'unicité du username => UsernameTaken
async fn insert_account<C>(conn: &C, new_user: users::ActiveModel, username: &str) -> Result<users::Model, AppError>
where
    C: ConnectionTrait,
{
    new_user.insert(conn).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::UsernameTaken(username.to_string()),
        _ => AppError::Database(e),
    })
}
