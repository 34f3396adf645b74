use super::db_data::{search_count as count_db, wine as wine_db};
use application::query::dao::RankingDao;
use application::query::QueryError;
use async_trait::async_trait;
use domain::value::{WeekKey, WineId};
use model::search_count::RankedWine;
use sea_orm::*;

pub struct RankingDaoImpl {
    db: DatabaseConnection,
}

impl RankingDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RankingDao for RankingDaoImpl {
    /// 周键来自调用方（与写路径同一算法），这里不使用数据库的周函数
    async fn top_for_week(
        &self,
        week: &WeekKey,
        limit: i32,
    ) -> Result<Vec<RankedWine>, QueryError> {
        let rows = count_db::Entity::find()
            .find_also_related(wine_db::Entity)
            .filter(count_db::Column::Year.eq(week.year))
            .filter(count_db::Column::WeekOfYear.eq(week.week_of_year as i32))
            .order_by_desc(count_db::Column::SearchCount)
            .order_by_asc(count_db::Column::WineId)
            .limit(limit.max(0) as u64)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;

        // 目录里已不存在的酒款不进榜
        let rankings = rows
            .into_iter()
            .filter_map(|(count, wine)| {
                wine.map(|w| RankedWine {
                    wine_id: WineId::from(w.id),
                    title: w.title,
                    grape: w.grape,
                    country: w.country,
                    region: w.region,
                    vintage: w.vintage,
                    search_count: count.search_count,
                })
            })
            .collect();

        Ok(rankings)
    }
}
