use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Lookups by plan name
        manager
            .create_index(
                Index::create()
                    .name("idx_pricing_meal_plan")
                    .table(PricingTable::Table)
                    .col(PricingTable::MealPlan)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_pricing_meal_plan").table(PricingTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PricingTable { Table, MealPlan }
