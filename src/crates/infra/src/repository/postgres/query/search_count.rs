use super::db_data::search_count as db;
use async_trait::async_trait;
use domain::value::{WeekKey, WineId};
use model::search_count::{WineSearchCount, WineSearchCountRepository};
use model::ModelError;
use sea_orm::*;

pub struct WineSearchCountRepositoryImpl {
    db: DatabaseConnection,
}

impl WineSearchCountRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// Helper function to map database errors
#[inline]
fn map_db_error(e: DbErr) -> ModelError {
    ModelError::ProjectionError(e.to_string())
}

#[async_trait]
impl WineSearchCountRepository for WineSearchCountRepositoryImpl {
    async fn increment(&self, wine_id: &WineId, week: &WeekKey) -> Result<(), ModelError> {
        use sea_orm::sea_query::{Expr, OnConflict};

        let entry = WineSearchCount {
            wine_id: wine_id.clone(),
            week: *week,
            search_count: 1,
        };
        let active_model: db::ActiveModel = (&entry).into();

        // Single SQL operation: INSERT ... ON CONFLICT DO UPDATE
        // If not exists: INSERT with search_count = 1
        // If exists: UPDATE search_count = search_count + 1
        db::Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([
                    db::Column::WineId,
                    db::Column::Year,
                    db::Column::WeekOfYear,
                ])
                .value(
                    db::Column::SearchCount,
                    Expr::col((db::Entity, db::Column::SearchCount)).add(1),
                )
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
