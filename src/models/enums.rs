use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rôle d'un compte (colonne custom_user.role)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[default]
    #[sea_orm(string_value = "client")]
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
        }
    }

    /// Libellé affiché
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Client => "Client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "client" => Ok(Role::Client),
            other => Err(format!("Invalid role '{}'. Must be one of: admin, client", other)),
        }
    }
}

/// Type de publication (colonne publication.type)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(100))")]
#[serde(rename_all = "lowercase")]
pub enum PublicationType {
    #[sea_orm(string_value = "predication")]
    Predication,
    #[sea_orm(string_value = "post")]
    Post,
}

impl PublicationType {
    pub fn label(&self) -> &'static str {
        match self {
            PublicationType::Predication => "Prédication",
            PublicationType::Post => "Post",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_client() {
        assert_eq!(Role::default(), Role::Client);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("client".parse::<Role>().unwrap(), Role::Client);
        assert!("superadmin".parse::<Role>().is_err());
    }

    #[test]
    fn test_enum_database_values() {
        assert_eq!(Role::Admin.to_value(), "admin".to_string());
        assert_eq!(PublicationType::Predication.to_value(), "predication".to_string());
        assert_eq!(PublicationType::Post.label(), "Post");
    }

    #[test]
    fn test_role_json_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: PublicationType = serde_json::from_str("\"post\"").unwrap();
        assert_eq!(parsed, PublicationType::Post);
    }
}
