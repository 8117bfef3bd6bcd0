use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalTimeline::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MedicalTimeline::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(MedicalTimeline::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(MedicalTimeline::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MedicalTimeline::Description).text())
                    .col(
                        ColumnDef::new(MedicalTimeline::EntryType)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MedicalTimeline::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MedicalTimeline::DoctorName).string_len(150))
                    .col(ColumnDef::new(MedicalTimeline::Location).string_len(200))
                    .col(ColumnDef::new(MedicalTimeline::Attachments).json_binary())
                    .col(
                        ColumnDef::new(MedicalTimeline::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_timeline_user_id")
                            .from(MedicalTimeline::Table, MedicalTimeline::UserId)
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
                CREATE INDEX IF NOT EXISTS idx_medical_timeline_user_id_date
                ON medical_timeline (user_id, date DESC);
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
                DROP INDEX IF EXISTS idx_medical_timeline_user_id_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MedicalTimeline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MedicalTimeline {
    Table,
    Id,
    UserId,
    Title,
    Description,
    EntryType,
    Date,
    DoctorName,
    Location,
    Attachments,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
