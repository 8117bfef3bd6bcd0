pub mod symptom_log_service;

pub use symptom_log_service::SymptomLogService;
