// Configuration lue depuis l'environnement (.env chargé par main)

use std::env;

use crate::error::AppError;
use crate::utils::password::DEFAULT_ITERATIONS;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub password_iterations: u32,
}

impl AppConfig {
    /// Construit la config à partir des variables d'environnement
    ///   - DATABASE_URL (obligatoire)
    ///   - DB_MAX_CONNECTIONS (défaut: 10)
    ///   - PASSWORD_HASH_ITERATIONS (défaut: DEFAULT_ITERATIONS)
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL must be set in .env file".to_string()))?;

        let max_connections = parse_var("DB_MAX_CONNECTIONS", 10)?;
        let password_iterations = parse_var("PASSWORD_HASH_ITERATIONS", DEFAULT_ITERATIONS)?;

        if password_iterations == 0 {
            return Err(AppError::Config(
                "PASSWORD_HASH_ITERATIONS must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            max_connections,
            password_iterations,
        })
    }
}

fn parse_var(name: &str, default: u32) -> Result<u32, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::Config(format!("{} must be a positive integer, got '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}
