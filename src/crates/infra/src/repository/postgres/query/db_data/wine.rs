use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use domain::value::WineId;
use model::wine::Wine;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "wine_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,

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

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Characteristics,
    SearchCount,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Characteristics => Entity::has_one(super::characteristics::Entity)
                .from(Column::Id)
                .to(super::characteristics::Column::WineId)
                .into(),
            Self::SearchCount => Entity::has_many(super::search_count::Entity)
                .from(Column::Id)
                .to(super::search_count::Column::WineId)
                .into(),
        }
    }
}

impl Related<super::characteristics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Characteristics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Wine {
    fn from(model: Model) -> Self {
        Wine {
            id: WineId::from(model.id),
            title: model.title,
            grape: model.grape,
            secondary_grape_varieties: model.secondary_grape_varieties,
            closure: model.closure,
            country: model.country,
            region: model.region,
            appellation: model.appellation,
            wine_type: model.wine_type,
            style: model.style,
            vintage: model.vintage,
            image_url: model.image_url,
        }
    }
}
