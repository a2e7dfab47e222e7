use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

/// Programme hebdomadaire récurrent (ex: culte du dimanche 9h-12h)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "programme_habituel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub jour: Option<String>,
    pub heure_debut: Option<Time>,
    pub heure_fin: Option<Time>,
    pub status: bool,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

super::status_and_create_date_behavior!();

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use sea_orm::{ActiveModelTrait, QueryOrder, Set};

    use crate::db::test_connection;

    #[tokio::test]
    async fn test_programme_defaults_and_ordering() {
        let db = test_connection().await;

        for (jour, heure) in [("Mercredi", 18), ("Dimanche", 9)] {
            ActiveModel {
                jour: Set(Some(jour.to_string())),
                heure_debut: Set(NaiveTime::from_hms_opt(heure, 0, 0)),
                ..Default::default()
            }
            .insert(&db)
            .await
            .unwrap();
        }

        let programmes = Entity::find()
            .order_by_asc(Column::HeureDebut)
            .all(&db)
            .await
            .unwrap();

        assert_eq!(programmes.len(), 2);
        assert_eq!(programmes[0].jour.as_deref(), Some("Dimanche"));
        assert!(programmes.iter().all(|p| !p.status && p.heure_fin.is_none()));
    }
}
