use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HealthTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthTasks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(HealthTasks::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(HealthTasks::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(HealthTasks::Description).text())
                    .col(ColumnDef::new(HealthTasks::DueDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(HealthTasks::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(HealthTasks::SnoozedUntil).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(HealthTasks::Priority)
                            .string_len(10)
                            .not_null()
                            .default("medium"),
                    )
                    .col(ColumnDef::new(HealthTasks::Category).string_len(50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_tasks_user_id")
                            .from(HealthTasks::Table, HealthTasks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_health_tasks_user_id
                ON health_tasks (user_id, due_date);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_health_tasks_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HealthTasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HealthTasks {
    Table,
    Id,
    UserId,
    Title,
    Description,
    DueDate,
    Completed,
    SnoozedUntil,
    Priority,
    Category,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
