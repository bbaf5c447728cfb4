//! Migration: Create the materia table.

use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Materia::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Materia::Codigo)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Materia::Nombre).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Case-insensitive uniqueness lives in the engine: concurrent
        // inserts of the same name cannot both pass.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_materia_nombre_lower ON materia (LOWER(nombre))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Materia::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Materia {
    Table,
    Codigo,
    Nombre,
}
