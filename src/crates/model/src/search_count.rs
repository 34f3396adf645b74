use crate::ModelError;
use async_trait::async_trait;
use domain::value::{WeekKey, WineId};

/// 某支酒在某个周键下的选择计数。
/// (wine_id, year, week_of_year) 是自然键，一周内至多一行。
#[derive(Debug, Clone)]
pub struct WineSearchCount {
    pub wine_id: WineId,
    pub week: WeekKey,
    pub search_count: i64,
}

/// 周排行条目：计数行与酒款元数据的连接结果
#[derive(Debug, Clone)]
pub struct RankedWine {
    pub wine_id: WineId,
    pub title: String,
    pub grape: String,
    pub country: String,
    pub region: String,
    pub vintage: String,
    pub search_count: i64,
}

#[async_trait]
pub trait WineSearchCountRepository: Send + Sync {
    /// 插入或加一必须是存储层的单条原子 upsert，不允许读-改-写
    async fn increment(&self, wine_id: &WineId, week: &WeekKey) -> Result<(), ModelError>;
}
