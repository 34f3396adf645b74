use crate::query::dao::RankingDao;
use crate::query::QueryError;
use domain::value::WeekKey;
use model::search_count::RankedWine;
use std::sync::Arc;

/// 本周热门榜的默认条数
const DEFAULT_RANKING_LIMIT: i32 = 5;

#[derive(Clone)]
pub struct GetWeeklyRankings {
    ranking_dao: Arc<dyn RankingDao + Send + Sync>,
}

impl GetWeeklyRankings {
    pub fn new(ranking_dao: Arc<dyn RankingDao + Send + Sync>) -> Self {
        Self { ranking_dao }
    }

    /// 查询当前周的热门酒款排行，最多 limit 条（缺省 5）
    pub async fn handle(&self, limit: Option<i32>) -> Result<Vec<RankedWine>, QueryError> {
        self.handle_for_week(WeekKey::current(), limit).await
    }

    /// 周键必须用与写路径相同的算法得出，这里由调用方传入
    pub async fn handle_for_week(
        &self,
        week: WeekKey,
        limit: Option<i32>,
    ) -> Result<Vec<RankedWine>, QueryError> {
        let limit = limit.unwrap_or(DEFAULT_RANKING_LIMIT).max(0);
        self.ranking_dao.top_for_week(&week, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain::value::WineId;
    use std::sync::Mutex;

    // 按排行查询的契约排序：计数降序，计数相同按酒款 ID 升序
    #[derive(Default)]
    struct FakeRankingDao {
        rows: Mutex<Vec<RankedWine>>,
    }

    impl FakeRankingDao {
        fn with_counts(counts: &[(i64, i64)]) -> Self {
            let rows = counts
                .iter()
                .map(|(wine_id, search_count)| RankedWine {
                    wine_id: WineId::from(*wine_id),
                    title: format!("Wine {}", wine_id),
                    grape: "Merlot".to_string(),
                    country: "France".to_string(),
                    region: "Bordeaux".to_string(),
                    vintage: "2019".to_string(),
                    search_count: *search_count,
                })
                .collect();
            Self { rows: Mutex::new(rows) }
        }
    }

    #[async_trait]
    impl RankingDao for FakeRankingDao {
        async fn top_for_week(
            &self,
            _week: &WeekKey,
            limit: i32,
        ) -> Result<Vec<RankedWine>, QueryError> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| {
                b.search_count
                    .cmp(&a.search_count)
                    .then(a.wine_id.as_i64().cmp(&b.wine_id.as_i64()))
            });
            rows.truncate(limit.max(0) as usize);
            Ok(rows)
        }
    }

    fn week() -> WeekKey {
        WeekKey { year: 2026, week_of_year: 32 }
    }

    #[tokio::test]
    async fn test_rankings_sorted_by_count_descending() {
        let dao = Arc::new(FakeRankingDao::with_counts(&[(2, 1), (1, 3)]));
        let query = GetWeeklyRankings::new(dao);

        let rankings = query.handle_for_week(week(), None).await.unwrap();

        let flat: Vec<(i64, i64)> = rankings
            .iter()
            .map(|r| (r.wine_id.as_i64(), r.search_count))
            .collect();
        assert_eq!(flat, vec![(1, 3), (2, 1)]);
    }

    #[tokio::test]
    async fn test_limit_caps_result_length() {
        let dao = Arc::new(FakeRankingDao::with_counts(&[
            (1, 9),
            (2, 8),
            (3, 7),
            (4, 6),
        ]));
        let query = GetWeeklyRankings::new(dao);

        let rankings = query.handle_for_week(week(), Some(2)).await.unwrap();

        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].wine_id.as_i64(), 1);
    }

    #[tokio::test]
    async fn test_ties_break_by_wine_id_ascending() {
        let dao = Arc::new(FakeRankingDao::with_counts(&[(5, 2), (3, 2), (8, 2)]));
        let query = GetWeeklyRankings::new(dao);

        let rankings = query.handle_for_week(week(), None).await.unwrap();

        let ids: Vec<i64> = rankings.iter().map(|r| r.wine_id.as_i64()).collect();
        assert_eq!(ids, vec![3, 5, 8]);
    }

    #[tokio::test]
    async fn test_empty_week_yields_empty_list() {
        let dao = Arc::new(FakeRankingDao::default());
        let query = GetWeeklyRankings::new(dao);

        let rankings = query.handle_for_week(week(), None).await.unwrap();

        assert!(rankings.is_empty());
    }
}
