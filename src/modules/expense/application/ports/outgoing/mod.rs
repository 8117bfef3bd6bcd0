pub mod expense_repository;

pub use expense_repository::{
    CreateExpenseData, ExpenseRepository, ExpenseRepositoryError, ExpenseResult, UpdateExpenseData,
};
