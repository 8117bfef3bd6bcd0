use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Appointments::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Appointments::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::DoctorName).string_len(150))
                    .col(
                        ColumnDef::new(Appointments::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::Location).string_len(200))
                    .col(ColumnDef::new(Appointments::PrepNotes).text())
                    .col(
                        ColumnDef::new(Appointments::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Appointments::ReminderSent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_user_id")
                            .from(Appointments::Table, Appointments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upcoming view filters on (user_id, completed, date)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_appointments_user_id_date
                ON appointments (user_id, completed, date);
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
                DROP INDEX IF EXISTS idx_appointments_user_id_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    Id,
    UserId,
    Title,
    DoctorName,
    Date,
    Location,
    PrepNotes,
    Completed,
    ReminderSent,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
