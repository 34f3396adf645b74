use super::error::ApiError;
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::selection::SelectionService;
use application::query::get_weekly_rankings::GetWeeklyRankings;
use domain::value::WineId;
use infra::repository::postgres::query::ranking::RankingDaoImpl;
use infra::repository::postgres::query::search_count::WineSearchCountRepositoryImpl;
use model::search_count::RankedWine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 周榜条目的线上形态，字段名沿用前端既有约定
#[derive(Serialize)]
pub struct WeeklyRankingEntry {
    #[serde(rename = "WineID")]
    pub wine_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Grape")]
    pub grape: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Vintage")]
    pub vintage: String,
    #[serde(rename = "searchCount")]
    pub search_count: i64,
}

impl From<RankedWine> for WeeklyRankingEntry {
    fn from(ranked: RankedWine) -> Self {
        Self {
            wine_id: ranked.wine_id.as_i64(),
            title: ranked.title,
            grape: ranked.grape,
            country: ranked.country,
            region: ranked.region,
            vintage: ranked.vintage,
            search_count: ranked.search_count,
        }
    }
}

/// GET /weekly-rankings - 本周被选次数最多的酒款（最多 5 条）
pub async fn weekly_rankings(
    state: web::Data<AppState>,
) -> Result<web::Json<Vec<WeeklyRankingEntry>>, ApiError> {
    let ranking_dao = Arc::new(RankingDaoImpl::new(state.db.clone()));
    let query = GetWeeklyRankings::new(ranking_dao);

    let rankings = query.handle(None).await?;

    Ok(web::Json(
        rankings.into_iter().map(WeeklyRankingEntry::from).collect(),
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSelectionRequest {
    pub wine_id: i64,
}

/// POST /record-selection - 给当前周的酒款计数加一
pub async fn record_selection(
    state: web::Data<AppState>,
    body: web::Json<RecordSelectionRequest>,
) -> Result<HttpResponse, ApiError> {
    let repository = Arc::new(WineSearchCountRepositoryImpl::new(state.db.clone()));
    let service = SelectionService::new(repository);

    service.record(WineId::from(body.wine_id)).await?;

    Ok(HttpResponse::Ok().body("Selection recorded successfully"))
}
