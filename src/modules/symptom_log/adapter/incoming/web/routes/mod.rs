pub mod create_symptom_log;
pub mod delete_symptom_log;
pub mod get_symptom_logs;
pub mod update_symptom_log;

pub use create_symptom_log::create_symptom_log_handler;
pub use delete_symptom_log::delete_symptom_log_handler;
pub use get_symptom_logs::get_symptom_logs_handler;
pub use update_symptom_log::update_symptom_log_handler;
