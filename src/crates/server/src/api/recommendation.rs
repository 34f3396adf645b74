use super::error::ApiError;
use crate::AppState;
use actix_web::web;
use application::query::get_recommendations::GetRecommendations;
use infra::repository::postgres::query::wine::WineDaoImpl;
use model::wine::WineRecommendation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RecommendationRequest {
    pub mbti: String,
}

#[derive(Serialize)]
pub struct RecommendationEntry {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Grape")]
    pub grape: String,
    #[serde(rename = "Vintage")]
    pub vintage: String,
    #[serde(rename = "Characteristics")]
    pub characteristics: String,
}

impl From<WineRecommendation> for RecommendationEntry {
    fn from(wine: WineRecommendation) -> Self {
        Self {
            title: wine.title,
            grape: wine.grape,
            vintage: wine.vintage,
            characteristics: wine.characteristics,
        }
    }
}

/// POST /api/recommendations - 按 MBTI 偏好的葡萄品种随机推荐两支酒
pub async fn recommendations(
    state: web::Data<AppState>,
    body: web::Json<RecommendationRequest>,
) -> Result<web::Json<Vec<RecommendationEntry>>, ApiError> {
    let wine_dao = Arc::new(WineDaoImpl::new(state.db.clone()));
    let query = GetRecommendations::new(wine_dao);

    let wines = query.handle(&body.mbti).await?;

    Ok(web::Json(
        wines.into_iter().map(RecommendationEntry::from).collect(),
    ))
}
