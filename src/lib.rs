//! Modèle de données de l'application de gestion d'église: membres, adresses,
//! programmes, communiqués, publications, commentaires et activités, plus la
//! création des comptes (utilisateurs et superusers).

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use error::AppError;
