pub mod appointment_repository_postgres;
pub mod sea_orm_entity;

pub use appointment_repository_postgres::AppointmentRepositoryPostgres;
