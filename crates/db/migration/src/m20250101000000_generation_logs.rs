use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(GenerationLogs::Table)
                    .col(pk_id_col(manager, GenerationLogs::Id))
                    .col(ColumnDef::new(GenerationLogs::Uuid).uuid().not_null())
                    .col(
                        ColumnDef::new(GenerationLogs::Technology)
                            .string_len(32)
                            .not_null()
                            .default(Expr::val("tailwind")),
                    )
                    .col(ColumnDef::new(GenerationLogs::Prompt).text().not_null())
                    .col(ColumnDef::new(GenerationLogs::GeneratedCode).text())
                    .col(ColumnDef::new(GenerationLogs::Improved).boolean())
                    .col(ColumnDef::new(GenerationLogs::Valid).boolean())
                    .col(timestamp_col(GenerationLogs::CreatedAt))
                    .col(timestamp_col(GenerationLogs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_generation_logs_uuid")
                    .table(GenerationLogs::Table)
                    .col(GenerationLogs::Uuid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_generation_logs_created_at")
                    .table(GenerationLogs::Table)
                    .col(GenerationLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(GenerationLogs::Table)
                    .to_owned(),
            )
            .await
    }
}

fn pk_id_col<T: Iden>(manager: &SchemaManager, col: T) -> ColumnDef {
    let mut col = ColumnDef::new(col);
    match manager.get_database_backend() {
        DatabaseBackend::Sqlite => {
            col.integer();
        }
        _ => {
            col.big_integer();
        }
    }
    col.not_null().auto_increment().primary_key().to_owned()
}

fn timestamp_col<T: Iden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(Iden)]
enum GenerationLogs {
    Table,
    Id,
    Uuid,
    Technology,
    Prompt,
    GeneratedCode,
    Improved,
    Valid,
    CreatedAt,
    UpdatedAt,
}
