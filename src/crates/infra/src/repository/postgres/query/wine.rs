use super::db_data::{characteristics as char_db, wine as db};
use application::query::dao::WineDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::wine::{Wine, WineRecommendation};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::*;

pub struct WineDaoImpl {
    db: DatabaseConnection,
}

impl WineDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// 八个可搜索列做不区分大小写的模糊匹配
fn term_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term);
    let columns = [
        db::Column::Title,
        db::Column::Grape,
        db::Column::Country,
        db::Column::Region,
        db::Column::Appellation,
        db::Column::WineType,
        db::Column::Style,
        db::Column::Vintage,
    ];

    let mut condition = Condition::any();
    for column in columns {
        condition = condition.add(Expr::col((db::Entity, column)).ilike(pattern.clone()));
    }
    condition
}

#[async_trait]
impl WineDao for WineDaoImpl {
    async fn search(
        &self,
        term: &str,
        offset: i32,
        limit: i32,
    ) -> Result<(Vec<Wine>, i64), QueryError> {
        let condition = term_condition(term);

        // 总数与数据页用同一个谓词
        let total = db::Entity::find()
            .filter(condition.clone())
            .count(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))? as i64;

        let rows = db::Entity::find()
            .filter(condition)
            .order_by_asc(db::Column::Id)
            .offset(offset.max(0) as u64)
            .limit(limit.max(0) as u64)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        Ok((rows.into_iter().map(Wine::from).collect(), total))
    }

    async fn get_random_by_grapes(
        &self,
        grapes: &[&str],
        limit: i32,
    ) -> Result<Vec<WineRecommendation>, QueryError> {
        let rows = db::Entity::find()
            .find_also_related(char_db::Entity)
            .filter(db::Column::Grape.is_in(grapes.iter().copied()))
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .limit(limit.max(0) as u64)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        // 没有口感特征行的酒款不参与推荐
        let recommendations = rows
            .into_iter()
            .filter_map(|(wine, characteristics)| {
                characteristics.map(|c| WineRecommendation {
                    title: wine.title,
                    grape: wine.grape,
                    vintage: wine.vintage,
                    characteristics: c.characteristics,
                })
            })
            .collect();

        Ok(recommendations)
    }
}
