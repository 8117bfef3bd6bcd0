pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_symptom_logs_table;
mod m20250301_000003_create_medical_timeline_table;
mod m20250301_000004_create_appointments_table;
mod m20250301_000005_create_health_tasks_table;
mod m20250301_000006_create_expenses_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_symptom_logs_table::Migration),
            Box::new(m20250301_000003_create_medical_timeline_table::Migration),
            Box::new(m20250301_000004_create_appointments_table::Migration),
            Box::new(m20250301_000005_create_health_tasks_table::Migration),
            Box::new(m20250301_000006_create_expenses_table::Migration),
        ]
    }
}
