pub mod sea_orm_entity;
pub mod timeline_repository_postgres;

pub use timeline_repository_postgres::TimelineRepositoryPostgres;
