//! Organisation-vendor join table.
//!
//! Many-to-many mapping between organisations and their vendors. The
//! composite primary key allows at most one link per pair; the optional
//! role label describes what the vendor supplies.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrganisationVendors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrganisationVendors::OrganisationId)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganisationVendors::VendorId)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrganisationVendors::Role).text().null())
                    .col(
                        ColumnDef::new(OrganisationVendors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(OrganisationVendors::OrganisationId)
                            .col(OrganisationVendors::VendorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organisation_vendors_organisation_id")
                            .from(
                                OrganisationVendors::Table,
                                OrganisationVendors::OrganisationId,
                            )
                            .to(Organisations::Table, Organisations::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organisation_vendors_vendor_id")
                            .from(OrganisationVendors::Table, OrganisationVendors::VendorId)
                            .to(Vendors::Table, Vendors::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrganisationVendors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrganisationVendors {
    Table,
    OrganisationId,
    VendorId,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Organisations {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Vendors {
    Table,
    Id,
}
