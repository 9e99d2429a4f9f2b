use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::systems::{
    ActiveModel as SystemActiveModel, Column as SystemColumn, Entity as SystemTable,
    Model as SystemModel,
};
use crate::system::application::domain::SystemDocument;
use crate::system::application::ports::outgoing::{SystemRepository, SystemRepositoryError};

#[derive(Clone, Debug)]
pub struct SystemRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

fn db_error(e: impl std::fmt::Display) -> SystemRepositoryError {
    SystemRepositoryError::DatabaseError(e.to_string())
}

impl SystemRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: SystemModel) -> Result<SystemDocument, SystemRepositoryError> {
        Ok(SystemDocument {
            id: model.id,
            name: model.name,
            content: serde_json::from_value(model.content).map_err(db_error)?,
            references: serde_json::from_value(model.references).map_err(db_error)?,
            active: model.active,
        })
    }

    fn documents(
        system: &SystemDocument,
    ) -> Result<(serde_json::Value, serde_json::Value), SystemRepositoryError> {
        Ok((
            serde_json::to_value(&system.content).map_err(db_error)?,
            serde_json::to_value(&system.references).map_err(db_error)?,
        ))
    }
}

#[async_trait]
impl SystemRepository for SystemRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<SystemDocument>, SystemRepositoryError> {
        SystemTable::find()
            .order_by_asc(SystemColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Self::to_domain)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemDocument>, SystemRepositoryError> {
        SystemTable::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(Self::to_domain)
            .transpose()
    }

    async fn insert(&self, system: SystemDocument) -> Result<SystemDocument, SystemRepositoryError> {
        let (content, references) = Self::documents(&system)?;
        let now = Utc::now();

        let inserted = SystemActiveModel {
            id: Set(system.id),
            name: Set(system.name),
            content: Set(content),
            references: Set(references),
            active: Set(system.active),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Self::to_domain(inserted)
    }

    async fn save(&self, system: SystemDocument) -> Result<SystemDocument, SystemRepositoryError> {
        let (content, references) = Self::documents(&system)?;

        let updated = SystemActiveModel {
            id: Set(system.id),
            name: Set(system.name),
            content: Set(content),
            references: Set(references),
            active: Set(system.active),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .update(&*self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => SystemRepositoryError::NotFound,
            other => db_error(other),
        })?;

        Self::to_domain(updated)
    }
}
