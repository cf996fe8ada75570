use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::entities::generation_log;

#[derive(Debug, Error)]
pub enum GenerationLogError {
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("Generation log not found")]
    NotFound,
}

/// One generation request and, once the model answered, its result.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct GenerationLog {
    pub id: Uuid,
    #[serde(skip)]
    #[ts(skip)]
    pub row_id: i64,
    pub technology: String,
    pub prompt: String,
    pub generated_code: Option<String>,
    pub improved: Option<bool>,
    pub valid: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateGenerationLog {
    pub technology: String,
    pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub generated_code: String,
    pub improved: Option<bool>,
    pub valid: bool,
}

impl GenerationLog {
    fn from_model(model: generation_log::Model) -> Self {
        Self {
            id: model.uuid,
            row_id: model.id,
            technology: model.technology,
            prompt: model.prompt,
            generated_code: model.generated_code,
            improved: model.improved,
            valid: model.valid,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        data: &CreateGenerationLog,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        let active = generation_log::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            technology: Set(data.technology.clone()),
            prompt: Set(data.prompt.clone()),
            generated_code: Set(None),
            improved: Set(None),
            valid: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let model = active.insert(db).await?;
        Ok(Self::from_model(model))
    }

    pub async fn record_result<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
        result: &GenerationResult,
    ) -> Result<Self, GenerationLogError> {
        let record = generation_log::Entity::find()
            .filter(generation_log::Column::Uuid.eq(id))
            .one(db)
            .await?
            .ok_or(GenerationLogError::NotFound)?;

        let mut active: generation_log::ActiveModel = record.into();
        active.generated_code = Set(Some(result.generated_code.clone()));
        active.improved = Set(result.improved);
        active.valid = Set(Some(result.valid));
        active.updated_at = Set(Utc::now());

        let updated = active.update(db).await?;
        Ok(Self::from_model(updated))
    }

    pub async fn find_by_uuid<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<Self>, DbErr> {
        let record = generation_log::Entity::find()
            .filter(generation_log::Column::Uuid.eq(id))
            .one(db)
            .await?;
        Ok(record.map(Self::from_model))
    }

    /// Share links carry either the public uuid or, for older links, the
    /// numeric row id.
    pub async fn find_by_share_id<C: ConnectionTrait>(
        db: &C,
        share_id: &str,
    ) -> Result<Option<Self>, DbErr> {
        let share_id = share_id.trim();
        if let Ok(uuid) = Uuid::parse_str(share_id) {
            return Self::find_by_uuid(db, uuid).await;
        }
        let Ok(row_id) = share_id.parse::<i64>() else {
            return Ok(None);
        };
        let record = generation_log::Entity::find_by_id(row_id).one(db).await?;
        Ok(record.map(Self::from_model))
    }

    pub async fn find_recent<C: ConnectionTrait>(db: &C, limit: u64) -> Result<Vec<Self>, DbErr> {
        let records = generation_log::Entity::find()
            .order_by_desc(generation_log::Column::CreatedAt)
            .order_by_desc(generation_log::Column::Id)
            .limit(limit)
            .all(db)
            .await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }
}
