use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commentaire")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub nom_complet: Option<String>,
    // One-to-one avec le compte auteur
    #[sea_orm(unique)]
    pub auteur_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: bool,
    pub create_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuteurId",
        to = "super::users::Column::Id",
        on_delete = "SetNull"
    )]
    Auteur,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auteur.def()
    }
}

super::status_and_create_date_behavior!();

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, ModelTrait, PaginatorTrait, Set};

    use crate::db::test_connection;
    use crate::services::account_service::{AccountService, ExtraFields};
    use crate::utils::password::PasswordHasher;

    #[tokio::test]
    async fn test_deleting_author_keeps_comment() {
        let db = test_connection().await;
        let auteur = AccountService::new(PasswordHasher::new(1_000))
            .create_user(&db, "fidele", Some("pw"), ExtraFields::default())
            .await
            .unwrap();

        let commentaire = ActiveModel {
            nom_complet: Set(Some("Jean Fidèle".to_string())),
            auteur_id: Set(Some(auteur.id)),
            description: Set(Some("Amen".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        assert!(!commentaire.status);

        auteur.delete(&db).await.unwrap();

        let commentaire = Entity::find_by_id(commentaire.id).one(&db).await.unwrap().unwrap();
        assert_eq!(commentaire.auteur_id, None);
        assert_eq!(commentaire.description.as_deref(), Some("Amen"));
    }

    #[tokio::test]
    async fn test_author_signs_a_single_commentaire() {
        let db = test_connection().await;
        let service = AccountService::new(PasswordHasher::new(1_000));
        let auteur = service
            .create_user(&db, "diacre", Some("pw"), ExtraFields::default())
            .await
            .unwrap();
        let autre = service
            .create_user(&db, "choriste", Some("pw"), ExtraFields::default())
            .await
            .unwrap();

        let premier = ActiveModel {
            auteur_id: Set(Some(auteur.id)),
            description: Set(Some("Gloire à Dieu".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let second = ActiveModel {
            auteur_id: Set(Some(auteur.id)),
            description: Set(Some("Encore".to_string())),
            ..Default::default()
        };
        assert!(second.insert(&db).await.is_err());

        // Un autre auteur, ou aucun auteur, reste accepté
        ActiveModel {
            auteur_id: Set(Some(autre.id)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        for _ in 0..2 {
            <ActiveModel as std::default::Default>::default().insert(&db).await.unwrap();
        }

        let found = auteur.find_related(Entity).one(&db).await.unwrap().unwrap();
        assert_eq!(found.id, premier.id);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 4);
    }
}
