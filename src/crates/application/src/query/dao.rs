use crate::query::QueryError;
use async_trait::async_trait;
use domain::value::WeekKey;
use model::search_count::RankedWine;
use model::wine::{Wine, WineRecommendation};

#[async_trait]
pub trait WineDao {
    /// 按关键词搜索酒款（标题、品种、产地等八列模糊匹配，支持分页），
    /// 返回 (当前页, 命中总数)
    async fn search(
        &self,
        term: &str,
        offset: i32,
        limit: i32,
    ) -> Result<(Vec<Wine>, i64), QueryError>;

    /// 在指定葡萄品种里随机取酒，连接口感特征表
    async fn get_random_by_grapes(
        &self,
        grapes: &[&str],
        limit: i32,
    ) -> Result<Vec<WineRecommendation>, QueryError>;
}

#[async_trait]
pub trait RankingDao {
    /// 指定周键下的选择计数排行（连接酒款元数据，按计数降序，
    /// 计数相同按酒款 ID 升序）
    async fn top_for_week(
        &self,
        week: &WeekKey,
        limit: i32,
    ) -> Result<Vec<RankedWine>, QueryError>;
}
