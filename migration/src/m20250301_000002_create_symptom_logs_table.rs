use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SymptomLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SymptomLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SymptomLogs::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(SymptomLogs::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(SymptomLogs::PainLevel).integer())
                    .col(ColumnDef::new(SymptomLogs::FatigueLevel).integer())
                    .col(ColumnDef::new(SymptomLogs::EnergyLevel).integer())
                    .col(ColumnDef::new(SymptomLogs::Mood).string_len(20))
                    .col(ColumnDef::new(SymptomLogs::AdditionalSymptoms).json_binary())
                    .col(ColumnDef::new(SymptomLogs::Medications).json_binary())
                    .col(ColumnDef::new(SymptomLogs::Notes).text())
                    .col(ColumnDef::new(SymptomLogs::VoiceNoteUrl).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_symptom_logs_user_id")
                            .from(SymptomLogs::Table, SymptomLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Every read is scoped by owner; insight windows scan (user_id, date)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_symptom_logs_user_id_date
                ON symptom_logs (user_id, date DESC);
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
                DROP INDEX IF EXISTS idx_symptom_logs_user_id_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SymptomLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SymptomLogs {
    Table,
    Id,
    UserId,
    Date,
    PainLevel,
    FatigueLevel,
    EnergyLevel,
    Mood,
    AdditionalSymptoms,
    Medications,
    Notes,
    VoiceNoteUrl,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
