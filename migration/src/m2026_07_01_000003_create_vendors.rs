//! Vendors table.
//!
//! Vendors are external suppliers referenced by organisations for
//! dependency and sovereignty analysis. No update timestamp here; vendor
//! rows only change by re-seed.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vendors::Id).text().not_null().primary_key())
                    .col(
                        ColumnDef::new(Vendors::TenantId)
                            .text()
                            .not_null()
                            .default("default"),
                    )
                    .col(ColumnDef::new(Vendors::Name).text().not_null())
                    .col(ColumnDef::new(Vendors::CountryCode).text().null())
                    .col(
                        ColumnDef::new(Vendors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendors_tenant_id")
                            .from(Vendors::Table, Vendors::TenantId)
                            .to(Tenants::Table, Tenants::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vendors_tenant")
                    .table(Vendors::Table)
                    .col(Vendors::TenantId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_vendors_tenant").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vendors {
    Table,
    Id,
    TenantId,
    Name,
    CountryCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
