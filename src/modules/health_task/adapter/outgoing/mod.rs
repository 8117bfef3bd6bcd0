pub mod health_task_repository_postgres;
pub mod sea_orm_entity;

pub use health_task_repository_postgres::HealthTaskRepositoryPostgres;
