use sea_orm::DbErr;
use thiserror::Error;

/// Erreurs renvoyées par les services et la couche de persistance
#[derive(Debug, Error)]
pub enum AppError {
    /// Données invalides (username vide, flags superuser, longueurs)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Contrainte d'unicité sur custom_user.username
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// Échec du hash ou format de hash illisible
    #[error("Password error: {0}")]
    Password(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
