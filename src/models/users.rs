// ============================================================================
// MODÈLE : CUSTOM USER (comptes)
// ============================================================================
//
// Colonnes de la table custom_user:
//   - id (INTEGER, PRIMARY KEY)
//   - role (VARCHAR(50), 'admin' | 'client', défaut 'client')
//   - username (VARCHAR(50), UNIQUE, NOT NULL) - identifiant de connexion
//   - name, first_name, last_name (VARCHAR(50), NULL)
//   - email, phone (VARCHAR(100), NULL)
//   - password (VARCHAR(128)) - pbkdf2_sha256$iterations$salt$hash ou '!...'
//   - adresse_id (INTEGER, NULL, FK vers adresse, SET NULL)
//   - is_staff (défaut FALSE), is_active (défaut TRUE), is_superuser (défaut FALSE)
//   - last_login (TIMESTAMP, NULL)
//   - date_joined (TIMESTAMP, défaut maintenant)
//
// Points d'attention:
//   - Ne jamais écrire password directement: passer par set_password
//   - Les professions passent par custom_user_profession (M2M)
//
// ============================================================================

use std::fmt;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::enums::Role;
use crate::error::AppError;
use crate::utils::password::{self, PasswordHasher};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role: Role,
    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub username: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub first_name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub last_name: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub email: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub phone: Option<String>,
    #[serde(skip_serializing)] // Ne jamais exposer le hash en JSON
    #[sea_orm(column_type = "String(StringLen::N(128))", nullable)]
    pub password: Option<String>,
    #[sea_orm(indexed)]
    pub adresse_id: Option<i32>,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTimeUtc>,
    pub date_joined: DateTimeUtc,
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

    #[sea_orm(has_many = "super::users_profession::Entity")]
    UsersProfession,

    #[sea_orm(has_one = "super::publication::Entity")]
    Publication,

    #[sea_orm(has_one = "super::commentaire::Entity")]
    Commentaire,
}

impl Related<super::adresse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Adresse.def()
    }
}

impl Related<super::users_profession::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersProfession.def()
    }
}

impl Related<super::profession::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_profession::Relation::Profession.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_profession::Relation::User.def().rev())
    }
}

impl Related<super::publication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publication.def()
    }
}

impl Related<super::commentaire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commentaire.def()
    }
}

// Valeurs par défaut posées à l'insertion quand le champ n'a pas été fourni
#[::async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut this = self;
        if insert {
            if this.role.is_not_set() {
                this.role = Set(Role::default());
            }
            if this.is_staff.is_not_set() {
                this.is_staff = Set(false);
            }
            if this.is_active.is_not_set() {
                this.is_active = Set(true);
            }
            if this.is_superuser.is_not_set() {
                this.is_superuser = Set(false);
            }
            if this.date_joined.is_not_set() {
                this.date_joined = Set(Utc::now());
            }
        }
        Ok(this)
    }
}

impl ActiveModel {
    /// Hash et enregistre le mot de passe (None => mot de passe inutilisable)
    pub fn set_password(&mut self, hasher: &PasswordHasher, raw: Option<&str>) -> Result<(), AppError> {
        let encoded = match raw {
            Some(raw) => hasher.hash(raw)?,
            None => password::make_unusable(),
        };
        self.password = Set(Some(encoded));
        Ok(())
    }

    pub fn set_unusable_password(&mut self) {
        self.password = Set(Some(password::make_unusable()));
    }
}

impl Model {
    /// Un hash absent, inutilisable ou illisible ne correspond à aucun mot de passe
    pub fn check_password(&self, hasher: &PasswordHasher, raw: &str) -> bool {
        let Some(encoded) = self.password.as_deref() else {
            return false;
        };

        match hasher.verify(raw, encoded) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Unreadable password hash for '{}': {}", self.username, e);
                false
            }
        }
    }

    pub fn has_usable_password(&self) -> bool {
        self.password.as_deref().is_some_and(password::is_usable)
    }

    /// Nom complet "prénom nom", à défaut `name`, à défaut le username
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if !parts.is_empty() {
            return parts.join(" ");
        }

        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
            .to_string()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}
