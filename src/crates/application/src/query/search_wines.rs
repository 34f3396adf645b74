use crate::query::dao::WineDao;
use crate::query::QueryError;
use model::wine::Wine;
use std::sync::Arc;

/// 一页搜索结果以及分页元信息
#[derive(Debug, Clone)]
pub struct WineSearchPage {
    pub data: Vec<Wine>,
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i32,
}

#[derive(Clone)]
pub struct SearchWines {
    wine_dao: Arc<dyn WineDao + Send + Sync>,
}

impl SearchWines {
    pub fn new(wine_dao: Arc<dyn WineDao + Send + Sync>) -> Self {
        Self { wine_dao }
    }

    /// 关键词搜索，page 从 1 开始计
    pub async fn handle(
        &self,
        term: &str,
        page: i32,
        limit: i32,
    ) -> Result<WineSearchPage, QueryError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(QueryError::InvalidParameter(
                "Search term is required".to_string(),
            ));
        }

        let page = page.max(1);
        let limit = limit.max(1);
        let offset = (page - 1) * limit;

        let (data, total_items) = self.wine_dao.search(term, offset, limit).await?;
        let total_pages = (total_items + limit as i64 - 1) / limit as i64;

        Ok(WineSearchPage {
            data,
            total_items,
            total_pages,
            current_page: page,
        })
    }
}
