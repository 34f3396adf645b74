// for seed data
use infra::repository::postgres::query::db_data::{characteristics, wine};
use log::info;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_WINES: &[(i64, &str, &str, &str, &str, &str, &str, &str, &str, &str)] = &[
    // (id, title, grape, country, region, appellation, wine_type, style, vintage, characteristics)
    (
        1,
        "Chateau Margaux",
        "Cabernet Sauvignon",
        "France",
        "Bordeaux",
        "Margaux",
        "Red",
        "Still",
        "2015",
        "Full body, firm tannin, blackcurrant and cedar",
    ),
    (
        2,
        "Barolo Riserva",
        "Nebbiolo",
        "Italy",
        "Piedmont",
        "Barolo",
        "Red",
        "Still",
        "2016",
        "High acidity, rose petal and tar, long finish",
    ),
    (
        3,
        "Mosel Kabinett",
        "Riesling",
        "Germany",
        "Mosel",
        "Bernkastel",
        "White",
        "Still",
        "2020",
        "Off-dry, high acidity, green apple and slate",
    ),
    (
        4,
        "Chablis Premier Cru",
        "Chardonnay",
        "France",
        "Burgundy",
        "Chablis",
        "White",
        "Still",
        "2019",
        "Dry, medium body, citrus and flint",
    ),
    (
        5,
        "Central Otago Pinot",
        "Pinot Noir",
        "New Zealand",
        "Central Otago",
        "Bannockburn",
        "Red",
        "Still",
        "2021",
        "Light body, cherry and spice, silky tannin",
    ),
    (
        6,
        "Pomerol Reserve",
        "Merlot",
        "France",
        "Bordeaux",
        "Pomerol",
        "Red",
        "Still",
        "2018",
        "Plush body, plum and chocolate, soft tannin",
    ),
    (
        7,
        "Barossa Shiraz",
        "Shiraz",
        "Australia",
        "Barossa Valley",
        "Barossa",
        "Red",
        "Still",
        "2019",
        "Full body, ripe blackberry and pepper",
    ),
    (
        8,
        "Mendoza Malbec",
        "Malbec",
        "Argentina",
        "Mendoza",
        "Lujan de Cuyo",
        "Red",
        "Still",
        "2022",
        "Medium body, dark fruit and violet",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        self.seed_data(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Remove seed data
        let db = manager.get_connection();
        let seed_ids: Vec<i64> = SEED_WINES.iter().map(|row| row.0).collect();

        // Delete characteristics first (they reference the wines)
        characteristics::Entity::delete_many()
            .filter(characteristics::Column::WineId.is_in(seed_ids.clone()))
            .exec(db)
            .await?;

        wine::Entity::delete_many()
            .filter(wine::Column::Id.is_in(seed_ids))
            .exec(db)
            .await?;

        Ok(())
    }
}

impl Migration {
    async fn seed_data(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (id, title, grape, country, region, appellation, wine_type, style, vintage, traits) in
            SEED_WINES
        {
            // Skip rows that already exist so the migration stays re-runnable
            let existing = wine::Entity::find_by_id(*id).one(db).await?;
            if existing.is_some() {
                continue;
            }

            wine::ActiveModel {
                id: Set(*id),
                title: Set((*title).to_owned()),
                grape: Set((*grape).to_owned()),
                secondary_grape_varieties: Set(String::new()),
                closure: Set("Cork".to_owned()),
                country: Set((*country).to_owned()),
                region: Set((*region).to_owned()),
                appellation: Set((*appellation).to_owned()),
                wine_type: Set((*wine_type).to_owned()),
                style: Set((*style).to_owned()),
                vintage: Set((*vintage).to_owned()),
                image_url: Set(String::new()),
            }
            .insert(db)
            .await?;

            characteristics::ActiveModel {
                wine_id: Set(*id),
                characteristics: Set((*traits).to_owned()),
            }
            .insert(db)
            .await?;
        }

        info!("Seeded {} catalog wines", SEED_WINES.len());
        Ok(())
    }
}
