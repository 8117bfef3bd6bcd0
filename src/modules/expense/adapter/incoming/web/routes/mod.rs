pub mod create_expense;
pub mod delete_expense;
pub mod get_expenses;
pub mod update_expense;

pub use create_expense::create_expense_handler;
pub use delete_expense::delete_expense_handler;
pub use get_expenses::get_expenses_handler;
pub use update_expense::update_expense_handler;
