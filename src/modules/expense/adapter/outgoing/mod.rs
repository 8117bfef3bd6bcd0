pub mod expense_repository_postgres;
pub mod sea_orm_entity;

pub use expense_repository_postgres::ExpenseRepositoryPostgres;
