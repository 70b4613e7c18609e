use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_material_type_table::Migration),
            Box::new(m20240101_000002_create_materials_info_table::Migration),
        ]
    }
}

mod m20240101_000001_create_material_type_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_material_type_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MaterialType::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaterialType::MaterialTypeId)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(MaterialType::MaterialTypeName)
                                .string_len(100)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaterialType::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum MaterialType {
        Table,
        MaterialTypeId,
        MaterialTypeName,
    }
}

mod m20240101_000002_create_materials_info_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_materials_info_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // material_type_id is a soft reference; no foreign key on purpose
            manager
                .create_table(
                    Table::create()
                        .table(MaterialsInfo::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaterialsInfo::MaterialId)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(MaterialsInfo::MaterialName)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialsInfo::MaterialTypeId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialsInfo::MaterialDesc)
                                .string_len(255)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialsInfo::MaterialStatus)
                                .small_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(MaterialsInfo::MaterialPurchasedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialsInfo::MaterialLocation)
                                .string_len(100)
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_materials_info_material_type_id")
                        .table(MaterialsInfo::Table)
                        .col(MaterialsInfo::MaterialTypeId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaterialsInfo::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum MaterialsInfo {
        Table,
        MaterialId,
        MaterialName,
        MaterialTypeId,
        MaterialDesc,
        MaterialStatus,
        MaterialPurchasedAt,
        MaterialLocation,
    }
}
