use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create wine_search_counts table
        manager
            .create_table(
                Table::create()
                    .table(WineSearchCounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WineSearchCounts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WineSearchCounts::WineId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WineSearchCounts::Year).integer().not_null())
                    .col(
                        ColumnDef::new(WineSearchCounts::WeekOfYear)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WineSearchCounts::SearchCount)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique constraint on the (wine_id, year, week_of_year) natural key;
        // the upsert's conflict target
        manager
            .create_index(
                Index::create()
                    .name("idx_wine_search_counts_week_key")
                    .table(WineSearchCounts::Table)
                    .col(WineSearchCounts::WineId)
                    .col(WineSearchCounts::Year)
                    .col(WineSearchCounts::WeekOfYear)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Non-unique index on the week columns for the ranking scan
        manager
            .create_index(
                Index::create()
                    .name("idx_wine_search_counts_week")
                    .table(WineSearchCounts::Table)
                    .col(WineSearchCounts::Year)
                    .col(WineSearchCounts::WeekOfYear)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WineSearchCounts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum WineSearchCounts {
    Table,
    Id,
    WineId,
    Year,
    WeekOfYear,
    SearchCount,
}
