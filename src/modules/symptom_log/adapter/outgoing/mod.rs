pub mod sea_orm_entity;
pub mod symptom_log_repository_postgres;

pub use symptom_log_repository_postgres::SymptomLogRepositoryPostgres;
