use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use domain::value::{WeekKey, WineId};
use model::search_count::WineSearchCount;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "wine_search_counts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,

    #[sea_orm(column_type = "BigInteger")]
    pub wine_id: i64,
    pub year: i32,
    pub week_of_year: i32,
    #[sea_orm(column_type = "BigInteger")]
    pub search_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Wine,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Wine => Entity::belongs_to(super::wine::Entity)
                .from(Column::WineId)
                .to(super::wine::Column::Id)
                .into(),
        }
    }
}

impl Related<super::wine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WineSearchCount {
    fn from(model: Model) -> Self {
        WineSearchCount {
            wine_id: WineId::from(model.wine_id),
            week: WeekKey {
                year: model.year,
                week_of_year: model.week_of_year as u32,
            },
            search_count: model.search_count,
        }
    }
}

impl From<&WineSearchCount> for ActiveModel {
    fn from(entry: &WineSearchCount) -> Self {
        Self {
            id: NotSet,
            wine_id: Set(entry.wine_id.as_i64()),
            year: Set(entry.week.year),
            week_of_year: Set(entry.week.week_of_year as i32),
            search_count: Set(entry.search_count),
        }
    }
}
