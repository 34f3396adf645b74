use crate::query::dao::WineDao;
use crate::query::QueryError;
use domain::mbti::MbtiType;
use model::wine::WineRecommendation;
use std::sync::Arc;

/// 每次推荐返回的酒款数
const RECOMMENDATION_LIMIT: i32 = 2;

#[derive(Clone)]
pub struct GetRecommendations {
    wine_dao: Arc<dyn WineDao + Send + Sync>,
}

impl GetRecommendations {
    pub fn new(wine_dao: Arc<dyn WineDao + Send + Sync>) -> Self {
        Self { wine_dao }
    }

    /// 解析 MBTI 类型，按其偏好的葡萄品种随机推荐至多两支酒。
    /// 目录里没有对应品种时返回空列表而不是错误。
    pub async fn handle(&self, mbti: &str) -> Result<Vec<WineRecommendation>, QueryError> {
        let mbti: MbtiType = mbti
            .parse()
            .map_err(|e: domain::mbti::MbtiError| QueryError::InvalidParameter(e.to_string()))?;

        self.wine_dao
            .get_random_by_grapes(mbti.grape_preferences(), RECOMMENDATION_LIMIT)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use model::wine::Wine;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeWineDao {
        last_grapes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WineDao for FakeWineDao {
        async fn search(
            &self,
            _term: &str,
            _offset: i32,
            _limit: i32,
        ) -> Result<(Vec<Wine>, i64), QueryError> {
            Ok((Vec::new(), 0))
        }

        async fn get_random_by_grapes(
            &self,
            grapes: &[&str],
            limit: i32,
        ) -> Result<Vec<WineRecommendation>, QueryError> {
            *self.last_grapes.lock().unwrap() =
                grapes.iter().map(|g| g.to_string()).collect();
            let recommendations = grapes
                .iter()
                .take(limit as usize)
                .map(|grape| WineRecommendation {
                    title: format!("A bottle of {}", grape),
                    grape: grape.to_string(),
                    vintage: "2020".to_string(),
                    characteristics: "Dry, medium body".to_string(),
                })
                .collect();
            Ok(recommendations)
        }
    }

    #[tokio::test]
    async fn test_unknown_mbti_is_rejected() {
        let query = GetRecommendations::new(Arc::new(FakeWineDao::default()));

        let err = query.handle("XXXX").await.unwrap_err();

        assert!(matches!(err, QueryError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_preferences_reach_the_dao() {
        let dao = Arc::new(FakeWineDao::default());
        let query = GetRecommendations::new(dao.clone());

        let recommendations = query.handle("intj").await.unwrap();

        assert_eq!(
            *dao.last_grapes.lock().unwrap(),
            vec!["Cabernet Sauvignon".to_string(), "Nebbiolo".to_string()]
        );
        assert_eq!(recommendations.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_grapes_yield_empty_list() {
        #[derive(Default)]
        struct EmptyDao;

        #[async_trait]
        impl WineDao for EmptyDao {
            async fn search(
                &self,
                _term: &str,
                _offset: i32,
                _limit: i32,
            ) -> Result<(Vec<Wine>, i64), QueryError> {
                Ok((Vec::new(), 0))
            }

            async fn get_random_by_grapes(
                &self,
                _grapes: &[&str],
                _limit: i32,
            ) -> Result<Vec<WineRecommendation>, QueryError> {
                Ok(Vec::new())
            }
        }

        let query = GetRecommendations::new(Arc::new(EmptyDao));

        let recommendations = query.handle("ENFP").await.unwrap();

        assert!(recommendations.is_empty());
    }
}
