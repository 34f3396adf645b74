use super::error::ApiError;
use crate::AppState;
use actix_web::web;
use application::query::search_wines::SearchWines;
use infra::repository::postgres::query::wine::WineDaoImpl;
use model::wine::Wine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_limit")]
    pub limit: i32,
}

fn default_page() -> i32 {
    1
}

fn default_limit() -> i32 {
    10
}

/// 目录条目的线上形态，字段名沿用前端既有约定
#[derive(Serialize)]
pub struct WineResponse {
    #[serde(rename = "WineID")]
    pub wine_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Grape")]
    pub grape: String,
    #[serde(rename = "SecondaryGrapeVarieties")]
    pub secondary_grape_varieties: String,
    #[serde(rename = "Closure")]
    pub closure: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Appellation")]
    pub appellation: String,
    #[serde(rename = "Type")]
    pub wine_type: String,
    #[serde(rename = "Style")]
    pub style: String,
    #[serde(rename = "Vintage")]
    pub vintage: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl From<Wine> for WineResponse {
    fn from(wine: Wine) -> Self {
        Self {
            wine_id: wine.id.as_i64(),
            title: wine.title,
            grape: wine.grape,
            secondary_grape_varieties: wine.secondary_grape_varieties,
            closure: wine.closure,
            country: wine.country,
            region: wine.region,
            appellation: wine.appellation,
            wine_type: wine.wine_type,
            style: wine.style,
            vintage: wine.vintage,
            image_url: wine.image_url,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub data: Vec<WineResponse>,
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i32,
}

/// GET /search-wines - 关键词搜索（分页）
pub async fn search_wines(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<web::Json<SearchResponse>, ApiError> {
    let wine_dao = Arc::new(WineDaoImpl::new(state.db.clone()));
    let search = SearchWines::new(wine_dao);

    let term = query.search.as_deref().unwrap_or_default();
    let page = search.handle(term, query.page, query.limit).await?;

    Ok(web::Json(SearchResponse {
        data: page.data.into_iter().map(WineResponse::from).collect(),
        total_items: page.total_items,
        total_pages: page.total_pages,
        current_page: page.current_page,
    }))
}
