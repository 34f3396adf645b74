use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "wine_characteristics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub wine_id: i64,

    pub characteristics: String,
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
