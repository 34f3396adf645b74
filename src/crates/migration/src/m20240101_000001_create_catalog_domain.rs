use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create wine_details table
        manager
            .create_table(
                Table::create()
                    .table(WineDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WineDetails::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WineDetails::Title).string().not_null())
                    .col(ColumnDef::new(WineDetails::Grape).string().not_null())
                    .col(
                        ColumnDef::new(WineDetails::SecondaryGrapeVarieties)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WineDetails::Closure).string().not_null())
                    .col(ColumnDef::new(WineDetails::Country).string().not_null())
                    .col(ColumnDef::new(WineDetails::Region).string().not_null())
                    .col(ColumnDef::new(WineDetails::Appellation).string().not_null())
                    .col(ColumnDef::new(WineDetails::WineType).string().not_null())
                    .col(ColumnDef::new(WineDetails::Style).string().not_null())
                    .col(ColumnDef::new(WineDetails::Vintage).string().not_null())
                    .col(ColumnDef::new(WineDetails::ImageUrl).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Index on grape for the recommendation filter
        manager
            .create_index(
                Index::create()
                    .name("idx_wine_details_grape")
                    .table(WineDetails::Table)
                    .col(WineDetails::Grape)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create wine_characteristics table
        manager
            .create_table(
                Table::create()
                    .table(WineCharacteristics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WineCharacteristics::WineId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WineCharacteristics::Characteristics)
                            .text()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(WineCharacteristics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WineDetails::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum WineDetails {
    Table,
    Id,
    Title,
    Grape,
    SecondaryGrapeVarieties,
    Closure,
    Country,
    Region,
    Appellation,
    WineType,
    Style,
    Vintage,
    ImageUrl,
}

#[derive(DeriveIden)]
enum WineCharacteristics {
    Table,
    WineId,
    Characteristics,
}
