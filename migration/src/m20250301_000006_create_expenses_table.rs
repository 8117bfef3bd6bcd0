use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Expenses::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Expenses::Description)
                            .string_len(300)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Expenses::Amount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Expenses::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Expenses::Category).string_len(50))
                    .col(ColumnDef::new(Expenses::ReceiptUrl).text())
                    .col(
                        ColumnDef::new(Expenses::Reimbursed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Expenses::InsuranceClaim).string_len(100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_user_id")
                            .from(Expenses::Table, Expenses::UserId)
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
                CREATE INDEX IF NOT EXISTS idx_expenses_user_id_date
                ON expenses (user_id, date DESC);
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
                DROP INDEX IF EXISTS idx_expenses_user_id_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Expenses {
    Table,
    Id,
    UserId,
    Description,
    Amount,
    Date,
    Category,
    ReceiptUrl,
    Reimbursed,
    InsuranceClaim,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
