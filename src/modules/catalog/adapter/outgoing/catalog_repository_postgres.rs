use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::catalog_entities::{
    ActiveModel as CatalogActiveModel, Column as CatalogColumn, Entity as CatalogEntityTable,
    Model as CatalogModel,
};
use crate::catalog::application::domain::{CatalogEntity, CatalogKind};
use crate::catalog::application::ports::outgoing::{CatalogRepository, CatalogRepositoryError};

#[derive(Clone, Debug)]
pub struct CatalogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

fn db_error(e: impl std::fmt::Display) -> CatalogRepositoryError {
    CatalogRepositoryError::DatabaseError(e.to_string())
}

impl CatalogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: CatalogModel) -> Result<CatalogEntity, CatalogRepositoryError> {
        let kind: CatalogKind = model.entity_type.parse().map_err(db_error)?;

        Ok(CatalogEntity {
            id: model.id,
            kind,
            active: model.active,
            en: model.en,
            pt: model.pt,
        })
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn find_all(
        &self,
        kind: CatalogKind,
        active: bool,
    ) -> Result<Vec<CatalogEntity>, CatalogRepositoryError> {
        CatalogEntityTable::find()
            .filter(CatalogColumn::EntityType.eq(kind.segment()))
            .filter(CatalogColumn::Active.eq(active))
            .order_by_asc(CatalogColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Self::to_domain)
            .collect()
    }

    async fn find_by_id(
        &self,
        kind: CatalogKind,
        id: Uuid,
    ) -> Result<Option<CatalogEntity>, CatalogRepositoryError> {
        CatalogEntityTable::find_by_id(id)
            .filter(CatalogColumn::EntityType.eq(kind.segment()))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(Self::to_domain)
            .transpose()
    }

    async fn insert(&self, entity: CatalogEntity) -> Result<CatalogEntity, CatalogRepositoryError> {
        let now = Utc::now();
        let inserted = CatalogActiveModel {
            id: Set(entity.id),
            entity_type: Set(entity.kind.segment().to_string()),
            active: Set(entity.active),
            en: Set(entity.en),
            pt: Set(entity.pt),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Self::to_domain(inserted)
    }

    async fn save(&self, entity: CatalogEntity) -> Result<CatalogEntity, CatalogRepositoryError> {
        let updated = CatalogActiveModel {
            id: Set(entity.id),
            active: Set(entity.active),
            en: Set(entity.en),
            pt: Set(entity.pt),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => CatalogRepositoryError::NotFound,
            other => db_error(other),
        })?;

        Self::to_domain(updated)
    }

    async fn delete(&self, kind: CatalogKind, id: Uuid) -> Result<(), CatalogRepositoryError> {
        let result = CatalogEntityTable::delete_many()
            .filter(CatalogColumn::Id.eq(id))
            .filter(CatalogColumn::EntityType.eq(kind.segment()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(CatalogRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn model(entity_type: &str, active: bool) -> CatalogModel {
        let now = Utc::now();
        CatalogModel {
            id: Uuid::new_v4(),
            entity_type: entity_type.to_string(),
            active,
            en: json!({ "name": "Tiamat", "description": "Queen of dragons" }),
            pt: json!({ "name": "Tiamat", "description": "Rainha dos dragões" }),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let rows = vec![model("gods", true), model("gods", true)];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();
        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        let entities = repo.find_all(CatalogKind::Gods, true).await.unwrap();

        assert_eq!(entities.len(), 2);
        assert!(entities.iter().all(|e| e.kind == CatalogKind::Gods && e.active));
        assert_eq!(entities[0].en["name"], "Tiamat");
    }

    #[tokio::test]
    async fn test_unknown_entity_type_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("dragons", true)]])
            .into_connection();
        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        let result = repo.find_by_id(CatalogKind::Gods, Uuid::new_v4()).await;

        assert!(matches!(result, Err(CatalogRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_save_returns_updated_row() {
        let row = model("gods", false);
        let entity = CatalogRepositoryPostgres::to_domain(row.clone()).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();
        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        let saved = repo.save(entity.clone()).await.unwrap();

        assert_eq!(saved, entity);
    }

    #[tokio::test]
    async fn test_delete_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete(CatalogKind::Races, Uuid::new_v4()).await;

        assert!(matches!(result, Err(CatalogRepositoryError::NotFound)));
    }
}
