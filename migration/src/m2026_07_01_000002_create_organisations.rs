//! Organisations table.
//!
//! Organisations are the core unit of analysis: tenant-scoped, optionally
//! categorized by sector and country, carrying three independent maturity
//! scores populated by the seed procedure.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organisations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organisations::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Organisations::TenantId)
                            .text()
                            .not_null()
                            .default("default"),
                    )
                    .col(ColumnDef::new(Organisations::Name).text().not_null())
                    .col(ColumnDef::new(Organisations::Sector).text().null())
                    .col(ColumnDef::new(Organisations::CountryCode).text().null())
                    .col(
                        ColumnDef::new(Organisations::SovereigntyScore)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Organisations::DataMaturityScore)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Organisations::AiMaturityScore)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Organisations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Organisations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organisations_tenant_id")
                            .from(Organisations::Table, Organisations::TenantId)
                            .to(Tenants::Table, Tenants::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Tenant scoping plus the sector/country filters the list API sorts over.
        manager
            .create_index(
                Index::create()
                    .name("idx_organisations_tenant")
                    .table(Organisations::Table)
                    .col(Organisations::TenantId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_organisations_sector")
                    .table(Organisations::Table)
                    .col(Organisations::Sector)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_organisations_country")
                    .table(Organisations::Table)
                    .col(Organisations::CountryCode)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_organisations_country").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_organisations_sector").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_organisations_tenant").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Organisations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Organisations {
    Table,
    Id,
    TenantId,
    Name,
    Sector,
    CountryCode,
    SovereigntyScore,
    DataMaturityScore,
    AiMaturityScore,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
