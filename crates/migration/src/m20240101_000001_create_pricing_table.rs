//! Create `pricing_table`.
//! One row per meal plan and household size, either imported from the
//! pricing spreadsheet or managed through the API.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PricingTable::Table)
                    .if_not_exists()
                    .col(integer(PricingTable::Id).primary_key().auto_increment())
                    .col(string(PricingTable::MealPlan).not_null())
                    .col(double(PricingTable::Price).not_null())
                    .col(string(PricingTable::FoodType).not_null())
                    .col(integer(PricingTable::PeopleCount).not_null())
                    .col(string(PricingTable::Frequency).not_null())
                    .col(text(PricingTable::MealDetails).not_null())
                    .col(ColumnDef::new(PricingTable::UtensilWashingPrice).double().null())
                    .col(ColumnDef::new(PricingTable::UtensilWashingCommission).double().null())
                    .col(ColumnDef::new(PricingTable::ChildrenSpecialPrice).double().null())
                    .col(ColumnDef::new(PricingTable::PreferenceCommunityPercentage).double().null())
                    .col(ColumnDef::new(PricingTable::KitchenPlatformPrice).double().null())
                    .col(
                        timestamp_with_time_zone(PricingTable::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PricingTable::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PricingTable {
    Table,
    Id,
    MealPlan,
    Price,
    FoodType,
    PeopleCount,
    Frequency,
    MealDetails,
    UtensilWashingPrice,
    UtensilWashingCommission,
    ChildrenSpecialPrice,
    PreferenceCommunityPercentage,
    KitchenPlatformPrice,
    CreatedAt,
}
