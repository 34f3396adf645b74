use domain::value::WineId;

/// 酒款目录条目（读模型，字段与目录库的 wine_details 表一一对应）
#[derive(Debug, Clone)]
pub struct Wine {
    pub id: WineId,
    pub title: String,
    pub grape: String,
    pub secondary_grape_varieties: String,
    pub closure: String,
    pub country: String,
    pub region: String,
    pub appellation: String,
    pub wine_type: String,
    pub style: String,
    pub vintage: String,
    pub image_url: String,
}

/// 按 MBTI 推荐返回的酒款，连接了口感特征表
#[derive(Debug, Clone)]
pub struct WineRecommendation {
    pub title: String,
    pub grape: String,
    pub vintage: String,
    pub characteristics: String,
}
